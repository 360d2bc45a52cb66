//! User account persistence.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use pactum_core::{PactumError, PactumResult, User};

use crate::{parse_timestamp, Store};

/// Input for creating a user, either local (password hash present) or
/// Google (google_id present, no password).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub auth_provider: String,
}

impl NewUser {
    /// A password-based account.
    pub fn local(email: impl Into<String>, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password_hash: Some(password_hash.into()),
            google_id: None,
            auth_provider: "local".into(),
        }
    }

    /// A Google OAuth account.
    pub fn google(email: impl Into<String>, username: impl Into<String>, google_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password_hash: None,
            google_id: Some(google_id.into()),
            auth_provider: "google".into(),
        }
    }
}

const USER_COLUMNS: &str = "id, email, username, password_hash, google_id, auth_provider, created_at";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        username: row.get(2)?,
        password_hash: row.get(3)?,
        google_id: row.get(4)?,
        auth_provider: row.get(5)?,
        created_at: parse_timestamp(6, row.get(6)?)?,
    })
}

impl Store {
    /// Insert a new user. Duplicate email/username/google_id surfaces as
    /// a database error from the unique constraints.
    pub fn create_user(&self, new_user: NewUser) -> PactumResult<User> {
        let conn = self.conn.lock().unwrap();
        let created_at = Utc::now();

        conn.execute(
            r#"
            INSERT INTO users (email, username, password_hash, google_id, auth_provider, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                new_user.email,
                new_user.username,
                new_user.password_hash,
                new_user.google_id,
                new_user.auth_provider,
                created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| PactumError::database(e.to_string()))?;

        let id = conn.last_insert_rowid();

        Ok(User {
            id,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            google_id: new_user.google_id,
            auth_provider: new_user.auth_provider,
            created_at,
        })
    }

    /// Look up a user by id.
    pub fn user_by_id(&self, id: i64) -> PactumResult<Option<User>> {
        self.user_where("id = ?1", params![id])
    }

    /// Look up a user by email.
    pub fn user_by_email(&self, email: &str) -> PactumResult<Option<User>> {
        self.user_where("email = ?1", params![email])
    }

    /// Look up a user by username.
    pub fn user_by_username(&self, username: &str) -> PactumResult<Option<User>> {
        self.user_where("username = ?1", params![username])
    }

    /// Look up a user by Google account id.
    pub fn user_by_google_id(&self, google_id: &str) -> PactumResult<Option<User>> {
        self.user_where("google_id = ?1", params![google_id])
    }

    /// Attach a Google identity to an existing local account.
    pub fn link_google(&self, user_id: i64, google_id: &str) -> PactumResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE users SET google_id = ?1, auth_provider = 'google' WHERE id = ?2",
            params![google_id, user_id],
        )
        .map_err(|e| PactumError::database(e.to_string()))?;
        Ok(())
    }

    fn user_where(
        &self,
        predicate: &str,
        params: impl rusqlite::Params,
    ) -> PactumResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let sql = format!("SELECT {} FROM users WHERE {}", USER_COLUMNS, predicate);
        conn.query_row(&sql, params, user_from_row)
            .optional()
            .map_err(|e| PactumError::database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup_local_user() {
        let store = Store::open(":memory:").unwrap();
        let user = store
            .create_user(NewUser::local("jane@example.com", "jane", "salt$digest"))
            .unwrap();

        assert!(user.id > 0);
        assert!(user.has_password());

        let by_email = store.user_by_email("jane@example.com").unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
        let by_username = store.user_by_username("jane").unwrap().unwrap();
        assert_eq!(by_username.id, user.id);
        assert!(store.user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = Store::open(":memory:").unwrap();
        store
            .create_user(NewUser::local("jane@example.com", "jane", "h"))
            .unwrap();
        let result = store.create_user(NewUser::local("jane@example.com", "jane2", "h"));
        assert!(matches!(result, Err(PactumError::Database { .. })));
    }

    #[test]
    fn test_google_user_and_linking() {
        let store = Store::open(":memory:").unwrap();
        let google = store
            .create_user(NewUser::google("g@example.com", "g", "google-123"))
            .unwrap();
        assert!(!google.has_password());
        assert_eq!(
            store.user_by_google_id("google-123").unwrap().unwrap().id,
            google.id
        );

        let local = store
            .create_user(NewUser::local("l@example.com", "l", "h"))
            .unwrap();
        store.link_google(local.id, "google-456").unwrap();
        let linked = store.user_by_id(local.id).unwrap().unwrap();
        assert_eq!(linked.google_id.as_deref(), Some("google-456"));
        assert_eq!(linked.auth_provider, "google");
    }
}
