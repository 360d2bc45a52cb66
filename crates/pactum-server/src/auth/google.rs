//! Google OAuth 2.0 authorization-code flow.
//!
//! Builds the consent URL, exchanges the callback code for an access
//! token, and fetches the user's OpenID profile.

use serde::Deserialize;
use url::Url;

use pactum_core::{PactumError, PactumResult};

use crate::config::GoogleConfig;

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Profile fields returned by Google's userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google account id.
    pub sub: String,
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Build the Google consent-screen URL to redirect the browser to.
pub fn authorize_url(config: &GoogleConfig) -> PactumResult<String> {
    let mut url = Url::parse(AUTHORIZE_ENDPOINT)
        .map_err(|e| PactumError::Internal(format!("Bad authorize endpoint: {}", e)))?;
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", "openid email profile")
        .append_pair("access_type", "offline");
    Ok(url.to_string())
}

/// Exchange an authorization code for the user's Google profile.
pub async fn exchange_code(
    http: &reqwest::Client,
    config: &GoogleConfig,
    code: &str,
) -> PactumResult<GoogleUserInfo> {
    let token: TokenResponse = http
        .post(TOKEN_ENDPOINT)
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
        ])
        .send()
        .await
        .map_err(|e| PactumError::authentication(format!("Google token request failed: {}", e)))?
        .error_for_status()
        .map_err(|e| PactumError::authentication(format!("Google rejected the code: {}", e)))?
        .json()
        .await
        .map_err(|e| PactumError::authentication(format!("Bad token response: {}", e)))?;

    let info: GoogleUserInfo = http
        .get(USERINFO_ENDPOINT)
        .bearer_auth(&token.access_token)
        .send()
        .await
        .map_err(|e| PactumError::authentication(format!("Userinfo request failed: {}", e)))?
        .error_for_status()
        .map_err(|e| PactumError::authentication(format!("Userinfo request rejected: {}", e)))?
        .json()
        .await
        .map_err(|e| PactumError::authentication(format!("Bad userinfo response: {}", e)))?;

    Ok(info)
}
