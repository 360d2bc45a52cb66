//! CSV export of a user's contracts.

use pactum_core::{ContractRecord, PactumError, PactumResult};

const HEADER: [&str; 12] = [
    "ID",
    "File Name",
    "Contact Name",
    "Contact Email",
    "Contact Phone",
    "Start Date",
    "End Date",
    "Contract Value",
    "Payment Terms",
    "Termination Terms",
    "Summary",
    "Created At",
];

/// Render contracts as a CSV document with a header row.
pub fn contracts_to_csv(records: &[ContractRecord]) -> PactumResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| PactumError::Internal(format!("CSV write error: {}", e)))?;

    for record in records {
        let fields = &record.fields;
        writer
            .write_record([
                record.id.to_string(),
                record.file_name.clone(),
                fields.contact_name.clone().unwrap_or_default(),
                fields.contact_email.clone().unwrap_or_default(),
                fields.contact_phone.clone().unwrap_or_default(),
                fields.start_date.map(|d| d.to_string()).unwrap_or_default(),
                fields.end_date.map(|d| d.to_string()).unwrap_or_default(),
                fields
                    .contract_value
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                fields.payment_terms.clone().unwrap_or_default(),
                fields.termination_terms.clone().unwrap_or_default(),
                fields.summary.clone().unwrap_or_default(),
                record.created_at.to_rfc3339(),
            ])
            .map_err(|e| PactumError::Internal(format!("CSV write error: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PactumError::Internal(format!("CSV flush error: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| PactumError::Internal(format!("CSV encoding error: {}", e)))
}
