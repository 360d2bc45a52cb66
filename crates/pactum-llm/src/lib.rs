//! pactum-llm - LLM-backed contract extraction and analytics.
//!
//! This crate holds the document-ingestion core: prompt construction with
//! a hard character cap, multi-strategy parsing of model replies into a
//! fixed nine-field record, the extraction orchestrator that converts
//! every failure into a reviewable degraded result, and the stateless
//! conversational analytics service. The OpenAI provider implementing
//! `pactum_core::Llm` lives here too.

pub mod chat;
pub mod extraction;
pub mod openai;
pub mod parser;
pub mod prompt;

pub use chat::ContractAnalyst;
pub use extraction::{ContractExtractor, NO_API_KEY_MARKER, PARSE_FAILURE_MARKER};
pub use openai::OpenAiProvider;
pub use parser::parse_fields;
pub use prompt::{extraction_prompt, MAX_DOCUMENT_CHARS};

#[cfg(test)]
pub(crate) mod test_support {
    //! A scriptable fake model for orchestrator and chat tests.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use pactum_core::{GenerationOptions, Llm, LlmResponse, Message, PactumError, PactumResult};

    pub enum MockBehavior {
        Reply(String),
        Fail(String),
    }

    pub struct MockLlm {
        behavior: MockBehavior,
        /// Options from the most recent `generate` call, for assertions.
        pub last_options: Mutex<Option<GenerationOptions>>,
    }

    impl MockLlm {
        pub fn replying(reply: impl Into<String>) -> Self {
            Self {
                behavior: MockBehavior::Reply(reply.into()),
                last_options: Mutex::new(None),
            }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                behavior: MockBehavior::Fail(message.into()),
                last_options: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Llm for MockLlm {
        async fn generate(
            &self,
            _messages: &[Message],
            options: Option<GenerationOptions>,
        ) -> PactumResult<LlmResponse> {
            *self.last_options.lock().unwrap() = options;

            match &self.behavior {
                MockBehavior::Reply(reply) => Ok(LlmResponse {
                    content: Some(reply.clone()),
                }),
                MockBehavior::Fail(message) => Err(PactumError::llm(message.clone())),
            }
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }
}
