//! pactum-store - SQLite persistence for users and contracts.
//!
//! A single `Store` owns the connection (serialized behind a mutex) and
//! creates the schema on open. Contract operations are scoped to the
//! owning user id; a lookup against another user's row behaves exactly
//! like a missing row.

mod contracts;
mod export;
mod users;

pub use export::contracts_to_csv;
pub use users::NewUser;

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use pactum_core::{PactumError, PactumResult};

/// SQLite-backed store for users and contracts.
pub struct Store {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open (or create) the database at the given path. `":memory:"`
    /// opens an in-memory database, used by tests.
    pub fn open(db_path: impl AsRef<Path>) -> PactumResult<Self> {
        if let Some(parent) = db_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = if db_path.as_ref().to_str() == Some(":memory:") {
            Connection::open_in_memory()
        } else {
            Connection::open(db_path.as_ref())
        }
        .map_err(|e| PactumError::database(e.to_string()))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.create_tables()?;

        Ok(store)
    }

    fn create_tables(&self) -> PactumResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                email          TEXT NOT NULL UNIQUE,
                username       TEXT NOT NULL UNIQUE,
                password_hash  TEXT,
                google_id      TEXT UNIQUE,
                auth_provider  TEXT NOT NULL DEFAULT 'local',
                created_at     TEXT NOT NULL
            )
            "#,
            [],
        )
        .map_err(|e| PactumError::database(e.to_string()))?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS contracts (
                id                 INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id            INTEGER NOT NULL REFERENCES users(id),
                file_name          TEXT NOT NULL,
                contact_name       TEXT,
                contact_email      TEXT,
                contact_phone      TEXT,
                start_date         TEXT,
                end_date           TEXT,
                contract_value     REAL,
                payment_terms      TEXT,
                termination_terms  TEXT,
                summary            TEXT,
                created_at         TEXT NOT NULL
            )
            "#,
            [],
        )
        .map_err(|e| PactumError::database(e.to_string()))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_contracts_user_id ON contracts(user_id)",
            [],
        )
        .map_err(|e| PactumError::database(e.to_string()))?;

        Ok(())
    }
}

/// Parse an RFC 3339 timestamp read back from a row.
pub(crate) fn parse_timestamp(idx: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
