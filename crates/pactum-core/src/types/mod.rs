//! Shared domain types.

mod contract;
mod message;
mod user;

pub use contract::{ContractFields, ContractRecord};
pub use message::{Message, MessageRole};
pub use user::User;
