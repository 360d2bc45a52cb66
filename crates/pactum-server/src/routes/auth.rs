//! Authentication endpoints: signup, login, current user, Google OAuth.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};

use pactum_core::User;
use pactum_store::NewUser;

use crate::auth::{self, password, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Create a new user account.
/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    if request.email.trim().is_empty()
        || request.username.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(ApiError::bad_request(
            "Email, username and password are required",
        ));
    }

    if state.store().user_by_email(&request.email)?.is_some() {
        return Err(ApiError::bad_request("Email already registered"));
    }
    if state.store().user_by_username(&request.username)?.is_some() {
        return Err(ApiError::bad_request("Username already taken"));
    }

    let hash = password::hash_password(&request.password);
    let user = state
        .store()
        .create_user(NewUser::local(request.email, request.username, hash))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticate and return an access token.
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let user = state.store().user_by_username(&request.username)?;

    let valid = user.as_ref().is_some_and(|u| {
        u.password_hash
            .as_deref()
            .is_some_and(|hash| password::verify_password(&request.password, hash))
    });

    let user = match user {
        Some(user) if valid => user,
        _ => return Err(ApiError::unauthorized("Incorrect username or password")),
    };

    let access_token = state.sessions().generate_token(user.id)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Return the authenticated user.
/// GET /api/auth/me
pub async fn me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

/// Redirect the browser to Google's consent screen.
/// GET /api/auth/google/login
pub async fn google_login(State(state): State<AppState>) -> ApiResult<Redirect> {
    let google = state
        .config()
        .google
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("Google OAuth is not configured"))?;

    let url = auth::google::authorize_url(google)?;
    Ok(Redirect::temporary(&url))
}

/// Query parameters from Google's redirect.
#[derive(Debug, Deserialize)]
pub struct GoogleCallbackQuery {
    pub code: String,
}

/// Handle the Google OAuth callback and redirect to the frontend with a
/// session token.
/// GET /api/auth/google/callback
pub async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<GoogleCallbackQuery>,
) -> ApiResult<Redirect> {
    let google = state
        .config()
        .google
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("Google OAuth is not configured"))?;

    let info = auth::google::exchange_code(state.http(), google, &query.code).await?;

    let email = info
        .email
        .clone()
        .ok_or_else(|| ApiError::bad_request("Email or Google ID not provided"))?;

    let user = match state.store().user_by_google_id(&info.sub)? {
        Some(user) => user,
        None => match state.store().user_by_email(&email)? {
            Some(existing) => {
                // Link the Google identity to the existing local account.
                state.store().link_google(existing.id, &info.sub)?;
                state
                    .store()
                    .user_by_id(existing.id)?
                    .ok_or_else(|| ApiError::internal("User vanished during linking"))?
            }
            None => {
                let username = unique_username(&state, &email)?;
                state
                    .store()
                    .create_user(NewUser::google(email, username, info.sub.clone()))?
            }
        },
    };

    let token = state.sessions().generate_token(user.id)?;
    let destination = format!(
        "{}/auth/callback?token={}",
        state.config().frontend_url.trim_end_matches('/'),
        token
    );

    Ok(Redirect::temporary(&destination))
}

/// Derive a username from the email local part, appending a counter until
/// it is free.
fn unique_username(state: &AppState, email: &str) -> ApiResult<String> {
    let base = email.split('@').next().unwrap_or(email).to_string();
    let mut candidate = base.clone();
    let mut counter = 1;

    while state.store().user_by_username(&candidate)?.is_some() {
        candidate = format!("{}{}", base, counter);
        counter += 1;
    }

    Ok(candidate)
}
