//! Conversational analytics over the user's contracts.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat response.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Answer a natural-language question about the user's contracts.
/// POST /api/analytics/chat
pub async fn chat(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let analyst = state
        .analyst()
        .ok_or_else(|| ApiError::bad_request("OpenAI API key not configured"))?;

    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message must not be empty"));
    }

    let records = state.store().contracts_for_user(user.id)?;
    let response = analyst.answer(&request.message, &records).await?;

    Ok(Json(ChatResponse { response }))
}
