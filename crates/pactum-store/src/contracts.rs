//! Contract persistence, scoped to the owning user.

use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};

use pactum_core::{ContractFields, ContractRecord, PactumError, PactumResult};

use crate::{parse_timestamp, Store};

const CONTRACT_COLUMNS: &str = "id, user_id, file_name, contact_name, contact_email, \
     contact_phone, start_date, end_date, contract_value, payment_terms, termination_terms, \
     summary, created_at";

fn date_from_column(raw: Option<String>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}

fn contract_from_row(row: &Row<'_>) -> rusqlite::Result<ContractRecord> {
    Ok(ContractRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        file_name: row.get(2)?,
        fields: ContractFields {
            contact_name: row.get(3)?,
            contact_email: row.get(4)?,
            contact_phone: row.get(5)?,
            start_date: date_from_column(row.get(6)?),
            end_date: date_from_column(row.get(7)?),
            contract_value: row.get(8)?,
            payment_terms: row.get(9)?,
            termination_terms: row.get(10)?,
            summary: row.get(11)?,
        },
        created_at: parse_timestamp(12, row.get(12)?)?,
    })
}

impl Store {
    /// Persist an extraction result for a user. Assigns the identity and
    /// creation timestamp.
    pub fn create_contract(
        &self,
        user_id: i64,
        file_name: &str,
        fields: &ContractFields,
    ) -> PactumResult<ContractRecord> {
        let conn = self.conn.lock().unwrap();
        let created_at = Utc::now();

        conn.execute(
            r#"
            INSERT INTO contracts (
                user_id, file_name, contact_name, contact_email, contact_phone,
                start_date, end_date, contract_value, payment_terms,
                termination_terms, summary, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                user_id,
                file_name,
                fields.contact_name,
                fields.contact_email,
                fields.contact_phone,
                fields.start_date.map(|d| d.to_string()),
                fields.end_date.map(|d| d.to_string()),
                fields.contract_value,
                fields.payment_terms,
                fields.termination_terms,
                fields.summary,
                created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| PactumError::database(e.to_string()))?;

        Ok(ContractRecord {
            id: conn.last_insert_rowid(),
            user_id,
            file_name: file_name.to_string(),
            fields: fields.clone(),
            created_at,
        })
    }

    /// All contracts owned by a user, newest first.
    pub fn contracts_for_user(&self, user_id: i64) -> PactumResult<Vec<ContractRecord>> {
        let conn = self.conn.lock().unwrap();
        let sql = format!(
            "SELECT {} FROM contracts WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
            CONTRACT_COLUMNS
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| PactumError::database(e.to_string()))?;

        let records = stmt
            .query_map([user_id], contract_from_row)
            .map_err(|e| PactumError::database(e.to_string()))?;

        records
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PactumError::database(e.to_string()))
    }

    /// One contract by id, only if owned by the user.
    pub fn contract_by_id(
        &self,
        user_id: i64,
        contract_id: i64,
    ) -> PactumResult<Option<ContractRecord>> {
        let conn = self.conn.lock().unwrap();
        let sql = format!(
            "SELECT {} FROM contracts WHERE id = ?1 AND user_id = ?2",
            CONTRACT_COLUMNS
        );
        conn.query_row(&sql, params![contract_id, user_id], contract_from_row)
            .optional()
            .map_err(|e| PactumError::database(e.to_string()))
    }

    /// Delete a contract owned by the user. Returns whether a row was
    /// removed; another user's contract id deletes nothing.
    pub fn delete_contract(&self, user_id: i64, contract_id: i64) -> PactumResult<bool> {
        let conn = self.conn.lock().unwrap();
        let affected = conn
            .execute(
                "DELETE FROM contracts WHERE id = ?1 AND user_id = ?2",
                params![contract_id, user_id],
            )
            .map_err(|e| PactumError::database(e.to_string()))?;
        Ok(affected > 0)
    }
}
