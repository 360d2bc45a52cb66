//! pactum-extractors - Document text extraction for contract ingestion.
//!
//! Converts uploaded PDF and DOCX binaries into plain text with a unified
//! trait-based interface. An empty extraction (e.g. a scanned image PDF
//! with no glyph layer) is a valid degenerate outcome, not an error; the
//! one fatal condition is a container that cannot be opened at all.
//!
//! # Example
//!
//! ```ignore
//! use pactum_extractors::{DocumentKind, ExtractionPipeline};
//!
//! let pipeline = ExtractionPipeline::with_defaults();
//! let text = pipeline.extract(&pdf_bytes, DocumentKind::Pdf).await?;
//! ```

mod docx;
mod error;
mod pdf;
mod pipeline;
mod types;

pub use docx::DocxExtractor;
pub use error::{ExtractError, ExtractResult};
pub use pdf::PdfExtractor;
pub use pipeline::ExtractionPipeline;
pub use types::DocumentKind;

use async_trait::async_trait;

/// Core Extractor trait - one implementation per document kind.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract plain text from document bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<String>;

    /// The document kind this extractor handles.
    fn kind(&self) -> DocumentKind;

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
