//! DOCX text extraction using docx-rs.

use crate::error::ExtractResult;
use crate::types::DocumentKind;
use crate::{ExtractError, Extractor};
use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableChild, TableRowChild};

/// DOCX text extractor using the docx-rs library.
///
/// Walks the document body in order and emits the text of every
/// paragraph followed by a line separator, including paragraphs inside
/// table cells. Wraps synchronous docx-rs parsing in spawn_blocking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    fn extract_sync(content: Vec<u8>) -> Result<String, ExtractError> {
        let docx = docx_rs::read_docx(&content)
            .map_err(|e| ExtractError::Unreadable(format!("Failed to parse DOCX: {}", e)))?;

        let mut text = String::new();

        for child in docx.document.children {
            match child {
                DocumentChild::Paragraph(p) => {
                    text.push_str(&Self::paragraph_text(&p));
                    text.push('\n');
                }
                DocumentChild::Table(t) => {
                    for row in &t.rows {
                        let TableChild::TableRow(r) = row;
                        for cell in &r.cells {
                            let TableRowChild::TableCell(c) = cell;
                            for content in &c.children {
                                if let docx_rs::TableCellContent::Paragraph(p) = content {
                                    text.push_str(&Self::paragraph_text(p));
                                    text.push('\n');
                                }
                            }
                        }
                    }
                }
                _ => {
                    // Skip other document children (bookmarks, etc.)
                }
            }
        }

        Ok(text)
    }

    /// Extract text from a paragraph's runs and hyperlinks.
    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => {
                    for run_child in &r.children {
                        match run_child {
                            RunChild::Text(t) => text.push_str(&t.text),
                            RunChild::Tab(_) => text.push('\t'),
                            RunChild::Break(_) => text.push('\n'),
                            _ => {}
                        }
                    }
                }
                ParagraphChild::Hyperlink(h) => {
                    for child in &h.children {
                        if let ParagraphChild::Run(r) = child {
                            for run_child in &r.children {
                                if let RunChild::Text(t) = run_child {
                                    text.push_str(&t.text);
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        text
    }
}

#[async_trait]
impl Extractor for DocxExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        let content = content.to_vec();
        let text = tokio::task::spawn_blocking(move || Self::extract_sync(content)).await??;
        Ok(text)
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Docx
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

    fn build_docx(docx: Docx) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn test_extracts_paragraphs_in_order() {
        let bytes = build_docx(
            Docx::new()
                .add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text("SERVICE AGREEMENT")),
                )
                .add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text("Payment due in 30 days.")),
                ),
        );

        let extractor = DocxExtractor::new();
        let text = extractor.extract(&bytes).await.unwrap();

        // Each paragraph appears, line-terminated, in document order.
        assert!(text.contains("SERVICE AGREEMENT\n"), "got: {:?}", text);
        assert!(text.contains("Payment due in 30 days.\n"));
        assert!(
            text.find("SERVICE AGREEMENT").unwrap()
                < text.find("Payment due in 30 days.").unwrap()
        );
    }

    #[tokio::test]
    async fn test_table_cell_text_included() {
        let table = Table::new(vec![TableRow::new(vec![TableCell::new().add_paragraph(
            Paragraph::new().add_run(Run::new().add_text("Termination: 30 days notice")),
        )])]);
        let bytes = build_docx(Docx::new().add_table(table));

        let extractor = DocxExtractor::new();
        let text = extractor.extract(&bytes).await.unwrap();

        assert!(text.contains("Termination: 30 days notice\n"), "got: {:?}", text);
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_unreadable() {
        let extractor = DocxExtractor::new();
        let result = extractor.extract(b"definitely not a zip container").await;
        assert!(matches!(result, Err(ExtractError::Unreadable(_))));
    }

    #[test]
    fn test_extractor_metadata() {
        let extractor = DocxExtractor::new();
        assert_eq!(extractor.kind(), DocumentKind::Docx);
        assert_eq!(extractor.name(), "docx-rs");
    }
}
