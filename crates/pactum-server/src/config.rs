//! Server configuration loaded from environment variables.

use std::env;

const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// Seconds a session token stays valid. 30 days.
pub const TOKEN_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Google OAuth credentials. Present only when all three variables are set.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path to the SQLite database file.
    pub database_path: String,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    pub token_expiry: i64,
    /// OpenAI API key, if configured.
    pub openai_api_key: Option<String>,
    /// Model name override for extraction and chat.
    pub model: Option<String>,
    /// Google OAuth credentials, if configured.
    pub google: Option<GoogleConfig>,
    /// Base URL of the frontend, used for OAuth redirects.
    pub frontend_url: String,
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults
    /// suitable for local development.
    pub fn from_env() -> Self {
        let host = env::var("PACTUM_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PACTUM_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let database_path = env::var("PACTUM_DB").unwrap_or_else(|_| "pactum.db".to_string());

        let jwt_secret = match env::var("PACTUM_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "PACTUM_JWT_SECRET not set, using default secret; do not use in production"
                );
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let model = env::var("PACTUM_MODEL").ok().filter(|m| !m.is_empty());

        let google = match (
            env::var("GOOGLE_CLIENT_ID"),
            env::var("GOOGLE_CLIENT_SECRET"),
            env::var("GOOGLE_REDIRECT_URI"),
        ) {
            (Ok(client_id), Ok(client_secret), Ok(redirect_uri)) => Some(GoogleConfig {
                client_id,
                client_secret,
                redirect_uri,
            }),
            _ => None,
        };

        let frontend_url =
            env::var("PACTUM_FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            host,
            port,
            database_path,
            jwt_secret,
            token_expiry: TOKEN_EXPIRY_SECONDS,
            openai_api_key,
            model,
            google,
            frontend_url,
        }
    }

    /// Socket address string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
