//! Contract record types.
//!
//! `ContractFields` is the structured outcome of one extraction call. The
//! nine fields are fixed; a field the model could not resolve is `None`.
//! Serialization deliberately keeps `null` entries instead of omitting
//! them, so every serialized mapping carries all nine keys and consumers
//! never have to probe for presence.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The structured fields extracted from one contract document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractFields {
    /// Primary contact person, signatory, or party.
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// Effective/start date.
    pub start_date: Option<NaiveDate>,
    /// End/expiration date, if the contract has one.
    pub end_date: Option<NaiveDate>,
    /// Numeric contract value, stripped of currency formatting.
    pub contract_value: Option<f64>,
    pub payment_terms: Option<String>,
    pub termination_terms: Option<String>,
    /// 3-5 sentence summary; always present after a successful extraction,
    /// carries a diagnostic on a degraded one.
    pub summary: Option<String>,
}

impl ContractFields {
    /// Build a degraded result: every field absent except a diagnostic
    /// summary. The orchestrator layers a contact-name marker on top to
    /// distinguish failure causes.
    pub fn degraded(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    /// Set the contact-name marker on a degraded result.
    pub fn with_contact_name(mut self, name: impl Into<String>) -> Self {
        self.contact_name = Some(name.into());
        self
    }
}

/// A persisted contract, owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRecord {
    pub id: i64,
    /// Owning user; not exposed in API responses.
    #[serde(skip_serializing, default)]
    pub user_id: i64,
    pub file_name: String,
    #[serde(flatten)]
    pub fields: ContractFields,
    pub created_at: DateTime<Utc>,
}
