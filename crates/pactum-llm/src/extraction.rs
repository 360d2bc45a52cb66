//! The extraction orchestrator.
//!
//! `extract_details` is total: an upload is never aborted by an AI-layer
//! failure. Whatever goes wrong - missing credential, failed model call,
//! uninterpretable reply - the caller receives a well-formed record whose
//! summary carries a human-readable diagnostic, so there is always a row
//! to review and correct manually.

use std::sync::Arc;

use tracing::{debug, warn};

use pactum_core::{ContractFields, GenerationOptions, Llm, Message};

use crate::parser::parse_fields;
use crate::prompt::extraction_prompt;

/// Contact-name marker for the no-credential short circuit.
pub const NO_API_KEY_MARKER: &str = "API key not configured";

/// Contact-name marker when the model reply could not be interpreted.
pub const PARSE_FAILURE_MARKER: &str = "Error: could not interpret model output";

/// Near-deterministic decoding for extraction.
const EXTRACTION_TEMPERATURE: f32 = 0.2;
const EXTRACTION_MAX_TOKENS: u32 = 1200;

/// Orchestrates one extraction call: prompt, model, parse, degrade.
///
/// Holds the injected model handle; constructed once at process start
/// and shared across requests. `None` means no credential was configured
/// and every call short-circuits without touching the network.
pub struct ContractExtractor {
    llm: Option<Arc<dyn Llm>>,
}

impl ContractExtractor {
    /// Create a new extractor around an optional model handle.
    pub fn new(llm: Option<Arc<dyn Llm>>) -> Self {
        Self { llm }
    }

    /// Whether a model is available.
    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    /// Extract contract fields from document text. Total: never fails,
    /// every error path produces a degraded record with a diagnostic
    /// summary. No retries; a single call failure degrades immediately.
    pub async fn extract_details(&self, text: &str) -> ContractFields {
        let Some(llm) = &self.llm else {
            warn!("extraction requested without a configured API key");
            return ContractFields::degraded(
                "Configure an OpenAI API key to enable automatic contract extraction.",
            )
            .with_contact_name(NO_API_KEY_MARKER);
        };

        debug!(chars = text.len(), model = llm.model_name(), "extracting contract details");

        let (system, user) = extraction_prompt(text);
        let messages = [Message::system(system), Message::user(user)];
        let options = GenerationOptions {
            temperature: Some(EXTRACTION_TEMPERATURE),
            max_tokens: Some(EXTRACTION_MAX_TOKENS),
        };

        let response = match llm.generate(&messages, Some(options)).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "model call failed during extraction");
                return ContractFields::degraded(format!(
                    "Automatic extraction failed: the model call did not complete ({}).",
                    e
                ))
                .with_contact_name(format!("Error: {}", e));
            }
        };

        match parse_fields(response.content_or_empty()) {
            Ok(mut fields) => {
                // The summary doubles as the degraded-path diagnostic, so
                // keep it non-empty on the success path as well.
                if fields.summary.as_deref().map_or(true, |s| s.trim().is_empty()) {
                    fields.summary = Some("The model returned no summary for this document.".into());
                }
                fields
            }
            Err(e) => {
                warn!(error = %e, "could not parse model reply");
                ContractFields::degraded(format!(
                    "Automatic extraction failed: the model reply could not be parsed as JSON ({}).",
                    e
                ))
                .with_contact_name(PARSE_FAILURE_MARKER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockLlm;

    #[tokio::test]
    async fn test_no_credential_short_circuits() {
        let extractor = ContractExtractor::new(None);
        assert!(!extractor.is_configured());

        let fields = extractor.extract_details("some contract text").await;
        assert_eq!(fields.contact_name.as_deref(), Some(NO_API_KEY_MARKER));
        assert!(!fields.summary.as_deref().unwrap().is_empty());
        assert!(fields.contract_value.is_none());
    }

    #[tokio::test]
    async fn test_successful_extraction() {
        let llm = MockLlm::replying(
            r#"{"contact_name": "Jane Doe", "contract_value": 50000, "summary": "A one-year lease."}"#,
        );
        let extractor = ContractExtractor::new(Some(Arc::new(llm)));

        let fields = extractor.extract_details("LEASE AGREEMENT ...").await;
        assert_eq!(fields.contact_name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.contract_value, Some(50000.0));
        assert_eq!(fields.summary.as_deref(), Some("A one-year lease."));
    }

    #[tokio::test]
    async fn test_extraction_call_is_bounded() {
        let mock = Arc::new(MockLlm::replying(r#"{"summary": "ok"}"#));
        let extractor = ContractExtractor::new(Some(mock.clone()));

        extractor.extract_details("text").await;

        let options = mock.last_options.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, Some(EXTRACTION_TEMPERATURE));
        assert_eq!(options.max_tokens, Some(EXTRACTION_MAX_TOKENS));
    }

    #[tokio::test]
    async fn test_model_failure_degrades() {
        let llm = MockLlm::failing("connection refused");
        let extractor = ContractExtractor::new(Some(Arc::new(llm)));

        let fields = extractor.extract_details("text").await;
        let marker = fields.contact_name.unwrap();
        assert!(marker.starts_with("Error:"), "got marker: {}", marker);
        assert!(fields.summary.unwrap().contains("did not complete"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_degrades() {
        let llm = MockLlm::replying("I cannot help with that.");
        let extractor = ContractExtractor::new(Some(Arc::new(llm)));

        let fields = extractor.extract_details("text").await;
        assert_eq!(fields.contact_name.as_deref(), Some(PARSE_FAILURE_MARKER));
        assert!(fields.summary.unwrap().contains("could not be parsed"));
    }

    #[tokio::test]
    async fn test_summary_is_nonempty_in_every_branch() {
        for extractor in [
            ContractExtractor::new(None),
            ContractExtractor::new(Some(Arc::new(MockLlm::failing("down")))),
            ContractExtractor::new(Some(Arc::new(MockLlm::replying("garbage")))),
            ContractExtractor::new(Some(Arc::new(MockLlm::replying(r#"{"contact_name":"X"}"#)))),
        ] {
            let fields = extractor.extract_details("text").await;
            assert!(!fields.summary.as_deref().unwrap_or("").trim().is_empty());
        }
    }
}
