//! Authentication: sessions, passwords, and the Google OAuth flow.

pub mod google;
pub mod password;
pub mod session;

pub use session::{SessionClaims, SessionError, SessionManager};

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use pactum_core::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that resolves the `Authorization: Bearer` header to the
/// authenticated user. Handlers taking `AuthUser` reject unauthenticated
/// requests with 401.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Expected a bearer token"))?;

        let claims = state.sessions().validate_token(token)?;
        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| ApiError::unauthorized("Invalid session token"))?;

        let user = state
            .store()
            .user_by_id(user_id)?
            .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

        Ok(AuthUser(user))
    }
}
