//! Conversational analytics over a user's contract set.
//!
//! Each call is stateless: the caller's records are serialized into the
//! system context and the question is submitted as the user turn. Unlike
//! extraction, a failed model call propagates to the caller - there is
//! no persisted artifact at stake, so the boundary surfaces the error.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use pactum_core::{ContractRecord, GenerationOptions, Llm, Message, PactumError, PactumResult};

/// Higher-temperature decoding for free-form answers.
const CHAT_TEMPERATURE: f32 = 0.7;

/// Answers natural-language questions about a set of contracts.
pub struct ContractAnalyst {
    llm: Arc<dyn Llm>,
}

impl ContractAnalyst {
    /// Create a new analyst around an injected model handle.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    /// Answer a question against the caller-visible records. Propagates
    /// model failures as errors.
    pub async fn answer(
        &self,
        question: &str,
        records: &[ContractRecord],
    ) -> PactumResult<String> {
        debug!(records = records.len(), "answering analytics question");

        let context = Self::records_context(records)?;
        let system = format!(
            "You are a contract analytics assistant. You have access to the following contracts data:\n{}\n\nAnswer questions about these contracts. Provide insights, statistics, and analysis based on the data.",
            context
        );

        let messages = [Message::system(system), Message::user(question)];
        // Free-form answers run uncapped; only extraction bounds its output.
        let options = GenerationOptions {
            temperature: Some(CHAT_TEMPERATURE),
            max_tokens: None,
        };

        let response = self.llm.generate(&messages, Some(options)).await?;
        response
            .content
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| PactumError::llm("model returned an empty answer"))
    }

    /// Serialize the caller-visible subset of each record.
    fn records_context(records: &[ContractRecord]) -> PactumResult<String> {
        let data: Vec<_> = records
            .iter()
            .map(|r| {
                json!({
                    "id": r.id,
                    "file_name": r.file_name,
                    "contact_name": r.fields.contact_name,
                    "start_date": r.fields.start_date,
                    "end_date": r.fields.end_date,
                    "contract_value": r.fields.contract_value,
                    "summary": r.fields.summary,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockLlm;
    use chrono::Utc;
    use pactum_core::ContractFields;

    fn record(id: i64, file_name: &str, value: Option<f64>) -> ContractRecord {
        ContractRecord {
            id,
            user_id: 1,
            file_name: file_name.into(),
            fields: ContractFields {
                contact_name: Some("Acme Corp".into()),
                contract_value: value,
                summary: Some("A vendor agreement.".into()),
                ..Default::default()
            },
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_answer_returns_model_text() {
        let analyst = ContractAnalyst::new(Arc::new(MockLlm::replying(
            "You have 2 contracts worth 30000 in total.",
        )));
        let records = vec![record(1, "a.pdf", Some(10000.0)), record(2, "b.pdf", Some(20000.0))];

        let answer = analyst.answer("What is the total value?", &records).await.unwrap();
        assert!(answer.contains("30000"));
    }

    #[tokio::test]
    async fn test_answer_runs_uncapped_at_chat_temperature() {
        let mock = Arc::new(MockLlm::replying("All contracts look fine."));
        let analyst = ContractAnalyst::new(mock.clone());

        analyst.answer("Any risks?", &[]).await.unwrap();

        let options = mock.last_options.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, Some(CHAT_TEMPERATURE));
        assert!(options.max_tokens.is_none());
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let analyst = ContractAnalyst::new(Arc::new(MockLlm::failing("service unavailable")));
        let result = analyst.answer("Anything?", &[]).await;
        assert!(matches!(result, Err(PactumError::Llm { .. })));
    }

    #[test]
    fn test_context_holds_visible_subset_only() {
        let context = ContractAnalyst::records_context(&[record(7, "lease.pdf", Some(1200.0))])
            .unwrap();
        assert!(context.contains("lease.pdf"));
        assert!(context.contains("Acme Corp"));
        // payment_terms is not part of the chat context.
        assert!(!context.contains("payment_terms"));
    }
}
