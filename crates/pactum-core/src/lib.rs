//! pactum-core - Core library for pactum.
//!
//! This crate provides the shared domain types, the error taxonomy, and the
//! `Llm` trait used across the contract management backend.
//!
//! # Example
//!
//! ```
//! use pactum_core::types::ContractFields;
//!
//! let fields = ContractFields::degraded("No text could be analyzed.");
//! assert!(fields.contact_email.is_none());
//! assert!(!fields.summary.as_deref().unwrap_or("").is_empty());
//! ```

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{PactumError, PactumResult};
pub use traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
pub use types::{ContractFields, ContractRecord, Message, MessageRole, User};
