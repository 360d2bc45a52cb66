//! PDF text extraction using pdf-extract.

use crate::error::ExtractResult;
use crate::types::DocumentKind;
use crate::{ExtractError, Extractor};
use async_trait::async_trait;

/// PDF text extractor using the pdf-extract library.
///
/// Extracts text page by page and concatenates the pages in order,
/// wrapping the synchronous pdf-extract calls in spawn_blocking to avoid
/// blocking the async runtime. A page without an extractable glyph layer
/// contributes an empty string; only an unopenable container is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    fn extract_sync(content: Vec<u8>) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&content)
            .map_err(|e| ExtractError::Unreadable(format!("Failed to read PDF: {}", e)))?;

        Ok(pages.concat())
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        let content = content.to_vec();
        let text = tokio::task::spawn_blocking(move || Self::extract_sync(content)).await??;
        Ok(text)
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracts_text_from_wellformed_pdf() {
        let extractor = PdfExtractor::new();
        let content = include_bytes!("../testdata/sample.pdf");

        let text = extractor.extract(content).await.unwrap();
        assert!(text.contains("Employment Agreement"), "got: {:?}", text);
        assert!(text.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_unreadable() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract(b"not a pdf at all").await;
        assert!(matches!(result, Err(ExtractError::Unreadable(_))));
    }

    #[test]
    fn test_extractor_metadata() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.kind(), DocumentKind::Pdf);
        assert_eq!(extractor.name(), "pdf-extract");
    }
}
