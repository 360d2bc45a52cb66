//! Core types for document extraction.

/// Declared kind of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF document.
    Pdf,
    /// Microsoft Word document (.docx or legacy .doc uploads).
    Docx,
}

impl DocumentKind {
    /// Select a kind from a filename's extension. Extensions outside
    /// {pdf, docx, doc} yield `None`; the upload boundary rejects those
    /// before any extraction is attempted.
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = name.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" | "doc" => Some(Self::Docx),
            _ => None,
        }
    }
}
