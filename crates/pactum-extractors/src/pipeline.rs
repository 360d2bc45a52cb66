//! Extraction pipeline routing content to the extractor for its kind.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::DocumentKind;
use crate::{DocxExtractor, Extractor, PdfExtractor};

/// Pipeline for extracting text using registered extractors.
///
/// Routes content to the extractor matching the declared document kind.
pub struct ExtractionPipeline {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create a pipeline with the PDF and DOCX extractors registered.
    pub fn with_defaults() -> Self {
        Self {
            extractors: vec![Arc::new(PdfExtractor::new()), Arc::new(DocxExtractor::new())],
        }
    }

    /// Add an extractor to the pipeline.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Extract text using the extractor registered for the declared kind.
    pub async fn extract(&self, content: &[u8], kind: DocumentKind) -> ExtractResult<String> {
        for extractor in &self.extractors {
            if extractor.kind() == kind {
                return extractor.extract(content).await;
            }
        }

        Err(ExtractError::UnsupportedKind(kind))
    }

    /// Check if the pipeline can handle a given kind.
    pub fn supports(&self, kind: DocumentKind) -> bool {
        self.extractors.iter().any(|e| e.kind() == kind)
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_with_defaults() {
        let pipeline = ExtractionPipeline::with_defaults();
        assert!(pipeline.supports(DocumentKind::Pdf));
        assert!(pipeline.supports(DocumentKind::Docx));
    }

    #[tokio::test]
    async fn test_empty_pipeline_rejects_kind() {
        let pipeline = ExtractionPipeline::new();
        assert!(!pipeline.supports(DocumentKind::Pdf));

        let result = pipeline.extract(b"test", DocumentKind::Pdf).await;
        assert!(matches!(result, Err(ExtractError::UnsupportedKind(_))));
    }

    #[tokio::test]
    async fn test_pipeline_routes_corrupt_input_to_unreadable() {
        let pipeline = ExtractionPipeline::with_defaults();
        let result = pipeline.extract(b"garbage", DocumentKind::Docx).await;
        assert!(matches!(result, Err(ExtractError::Unreadable(_))));
    }
}
