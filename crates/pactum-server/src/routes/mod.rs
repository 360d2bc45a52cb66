//! Route definitions for the REST API.

mod analytics;
mod auth;
mod contracts;
mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authentication
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/google/login", get(auth::google_login))
        .route("/api/auth/google/callback", get(auth::google_callback))
        // Contracts
        .route("/api/contracts/upload", post(contracts::upload_contract))
        .route("/api/contracts", get(contracts::list_contracts))
        .route("/api/contracts/:id", get(contracts::get_contract))
        .route("/api/contracts/:id", delete(contracts::delete_contract))
        .route("/api/contracts/export/csv", get(contracts::export_csv))
        // Analytics
        .route("/api/analytics/chat", post(analytics::chat))
        // Attach state
        .with_state(state)
}

pub use analytics::*;
pub use auth::*;
pub use contracts::*;
pub use health::*;
