//! OpenAI LLM provider implementation.

use async_trait::async_trait;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessage, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequest,
    },
    Client,
};

use pactum_core::{
    GenerationOptions, Llm, LlmConfig, LlmResponse, Message, MessageRole, PactumError,
    PactumResult,
};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI chat-completions provider.
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    config: LlmConfig,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider. The API key comes from the config or
    /// the `OPENAI_API_KEY` environment variable; its absence is an error
    /// here - callers that want the no-credential degraded path construct
    /// the orchestrator without a provider instead.
    pub fn new(config: LlmConfig) -> PactumResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                PactumError::Configuration(
                    "OpenAI API key not found. Set OPENAI_API_KEY or provide api_key in config."
                        .to_string(),
                )
            })?;

        let openai_config = if let Some(ref base_url) = config.base_url {
            OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(base_url)
        } else {
            OpenAIConfig::new().with_api_key(api_key)
        };

        let client = Client::with_config(openai_config);

        let mut config = config;
        if config.model.is_empty() {
            config.model = DEFAULT_MODEL.to_string();
        }

        Ok(Self { client, config })
    }

    fn message_to_openai(msg: &Message) -> ChatCompletionRequestMessage {
        match msg.role {
            MessageRole::System => {
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                    content: async_openai::types::ChatCompletionRequestSystemMessageContent::Text(
                        msg.content.clone(),
                    ),
                    name: None,
                })
            }
            MessageRole::User => {
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                    content: async_openai::types::ChatCompletionRequestUserMessageContent::Text(
                        msg.content.clone(),
                    ),
                    name: None,
                })
            }
            MessageRole::Assistant => {
                ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                    content: Some(
                        async_openai::types::ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        ),
                    ),
                    name: None,
                    ..Default::default()
                })
            }
        }
    }
}

#[async_trait]
impl Llm for OpenAiProvider {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> PactumResult<LlmResponse> {
        let chat_messages: Vec<ChatCompletionRequestMessage> =
            messages.iter().map(Self::message_to_openai).collect();

        let options = options.unwrap_or_default();

        // No per-call cap means the model decides when to stop.
        let request = CreateChatCompletionRequest {
            model: self.config.model.clone(),
            messages: chat_messages,
            temperature: Some(options.temperature.unwrap_or(self.config.temperature)),
            max_completion_tokens: options.max_tokens,
            ..Default::default()
        };

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| PactumError::llm_with_source("OpenAI API error", e))?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| PactumError::llm("No response choices returned"))?;

        Ok(LlmResponse {
            content: choice.message.content.clone(),
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_requires_api_key() {
        // No api_key in config; only fails when the env var is unset too.
        if std::env::var("OPENAI_API_KEY").is_err() {
            let result = OpenAiProvider::new(LlmConfig::default());
            assert!(matches!(result, Err(PactumError::Configuration(_))));
        }
    }

    #[test]
    fn test_default_model_applied() {
        let provider = OpenAiProvider::new(LlmConfig {
            api_key: Some("sk-test".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(provider.model_name(), DEFAULT_MODEL);
    }
}
