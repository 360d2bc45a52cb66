//! Trait definitions for external service seams.

mod llm;

pub use llm::{GenerationOptions, Llm, LlmConfig, LlmResponse};
