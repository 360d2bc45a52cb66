//! LLM trait and related types.
//!
//! The language model is the only non-deterministic dependency in the
//! pipeline, so it sits behind a trait: the server wires in a real
//! provider once at startup, tests substitute a fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PactumResult;
use crate::types::Message;

/// Response from LLM generation.
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Generated text content.
    pub content: Option<String>,
}

impl LlmResponse {
    /// Get the content or an empty string.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Per-call generation options. `max_tokens: None` leaves the model
/// output uncapped; callers that want a ceiling set one explicitly.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
    /// Maximum tokens to generate, if capped.
    pub max_tokens: Option<u32>,
}

/// Core LLM trait - all model providers implement this.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Generate a response from the model.
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> PactumResult<LlmResponse>;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name/identifier.
    pub model: String,
    /// Default sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_temperature() -> f32 {
    0.2
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: default_temperature(),
            api_key: None,
            base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_or_empty() {
        let response = LlmResponse { content: None };
        assert_eq!(response.content_or_empty(), "");

        let response = LlmResponse {
            content: Some("ok".into()),
        };
        assert_eq!(response.content_or_empty(), "ok");
    }

    #[test]
    fn test_config_defaults() {
        let config = LlmConfig::default();
        assert_eq!(config.temperature, 0.2);
        assert!(config.api_key.is_none());
    }
}
