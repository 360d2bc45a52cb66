//! User account type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account that owns contracts. Created either with a password or via
/// Google OAuth; Google accounts have no password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    /// Salted digest; never serialized into API responses.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    /// "local" or "google".
    pub auth_provider: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this account can log in with a password.
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            email: "a@b.c".into(),
            username: "a".into(),
            password_hash: Some("salt$digest".into()),
            google_id: None,
            auth_provider: "local".into(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(user.has_password());
    }
}
