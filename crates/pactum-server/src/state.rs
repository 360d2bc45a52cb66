//! Shared application state.

use std::sync::Arc;

use pactum_core::{traits::Llm, LlmConfig, PactumResult};
use pactum_extractors::ExtractionPipeline;
use pactum_llm::{ContractAnalyst, ContractExtractor, OpenAiProvider};
use pactum_store::Store;

use crate::auth::SessionManager;
use crate::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Store,
    pipeline: ExtractionPipeline,
    extractor: ContractExtractor,
    analyst: Option<ContractAnalyst>,
    sessions: SessionManager,
    config: ServerConfig,
    http: reqwest::Client,
}

impl AppState {
    /// Build the state from configuration: open the database, set up the
    /// extraction pipeline, and connect the model provider when an API key
    /// is available.
    pub fn new(config: ServerConfig) -> PactumResult<Self> {
        let store = Store::open(&config.database_path)?;
        let pipeline = ExtractionPipeline::with_defaults();

        let llm: Option<Arc<dyn Llm>> = match &config.openai_api_key {
            Some(key) => {
                let llm_config = LlmConfig {
                    api_key: Some(key.clone()),
                    model: config.model.clone().unwrap_or_default(),
                    ..LlmConfig::default()
                };
                Some(Arc::new(OpenAiProvider::new(llm_config)?))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, extraction and chat are degraded");
                None
            }
        };

        let extractor = ContractExtractor::new(llm.clone());
        let analyst = llm.map(ContractAnalyst::new);

        let sessions = SessionManager::new(&config.jwt_secret, config.token_expiry);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                store,
                pipeline,
                extractor,
                analyst,
                sessions,
                config,
                http: reqwest::Client::new(),
            }),
        })
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    pub fn pipeline(&self) -> &ExtractionPipeline {
        &self.inner.pipeline
    }

    pub fn extractor(&self) -> &ContractExtractor {
        &self.inner.extractor
    }

    pub fn analyst(&self) -> Option<&ContractAnalyst> {
        self.inner.analyst.as_ref()
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.inner.sessions
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }
}
