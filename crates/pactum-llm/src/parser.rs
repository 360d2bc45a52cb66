//! Parsing of model replies into `ContractFields`.
//!
//! Models occasionally wrap their JSON in markdown fences despite being
//! told not to. Three strategies are tried in order, first success wins:
//! the whole reply as a JSON object, the interior of a ```json fenced
//! block, then the interior of any fenced block. Only when all three are
//! exhausted does parsing fail, and the orchestrator decides what to do
//! with that.
//!
//! A parsed object is converted through a total constructor: every one
//! of the nine record fields is populated, keys missing from the JSON
//! become `None`, and unknown keys are ignored.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use pactum_core::{ContractFields, PactumError, PactumResult};

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*\n?([\s\S]*?)\n?```").unwrap());

static ANY_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[a-zA-Z0-9]*\s*\n?([\s\S]*?)\n?```").unwrap());

/// Parse a raw model reply into a `ContractFields` record.
///
/// Returns `PactumError::Parse` when no strategy yields a JSON object;
/// the result is otherwise total over the nine fields.
pub fn parse_fields(reply: &str) -> PactumResult<ContractFields> {
    let reply = reply.trim();

    if let Some(map) = try_object(reply) {
        return Ok(fields_from_map(&map));
    }

    if let Some(caps) = JSON_FENCE.captures(reply) {
        if let Some(map) = caps.get(1).and_then(|m| try_object(m.as_str().trim())) {
            return Ok(fields_from_map(&map));
        }
    }

    if let Some(caps) = ANY_FENCE.captures(reply) {
        if let Some(map) = caps.get(1).and_then(|m| try_object(m.as_str().trim())) {
            return Ok(fields_from_map(&map));
        }
    }

    Err(PactumError::parse(
        "model reply contains no parseable JSON object",
    ))
}

/// Parse text as JSON and require a top-level object.
fn try_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Total constructor: builds the full nine-field record from whatever the
/// object carries. Values that cannot be coerced to the field's type are
/// dropped, matching the lenient contract with the model.
fn fields_from_map(map: &Map<String, Value>) -> ContractFields {
    ContractFields {
        contact_name: text_field(map, "contact_name"),
        contact_email: text_field(map, "contact_email"),
        contact_phone: text_field(map, "contact_phone"),
        start_date: date_field(map, "start_date"),
        end_date: date_field(map, "end_date"),
        contract_value: number_field(map, "contract_value"),
        payment_terms: text_field(map, "payment_terms"),
        termination_terms: text_field(map, "termination_terms"),
        summary: text_field(map, "summary"),
    }
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn date_field(map: &Map<String, Value>, key: &str) -> Option<NaiveDate> {
    map.get(key)
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

/// Accepts a JSON number, or a string with currency formatting the model
/// failed to strip ("$120,000" and the like).
fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_object() {
        let fields =
            parse_fields(r#"{"contact_name": "Jane Doe", "summary": "A lease."}"#).unwrap();

        assert_eq!(fields.contact_name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.summary.as_deref(), Some("A lease."));
        assert!(fields.contact_email.is_none());
        assert!(fields.contact_phone.is_none());
        assert!(fields.start_date.is_none());
        assert!(fields.end_date.is_none());
        assert!(fields.contract_value.is_none());
        assert!(fields.payment_terms.is_none());
        assert!(fields.termination_terms.is_none());
    }

    #[test]
    fn test_json_fenced_block_parses_like_plain() {
        let plain = parse_fields(r#"{"summary":"ok"}"#).unwrap();
        let fenced = parse_fields("```json\n{\"summary\":\"ok\"}\n```").unwrap();
        assert_eq!(plain, fenced);
    }

    #[test]
    fn test_untagged_fenced_block() {
        let fields = parse_fields("Here you go:\n```\n{\"summary\":\"fine\"}\n```").unwrap();
        assert_eq!(fields.summary.as_deref(), Some("fine"));
    }

    #[test]
    fn test_garbage_is_a_hard_failure() {
        let result = parse_fields("I cannot help with that.");
        assert!(matches!(result, Err(PactumError::Parse { .. })));
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(parse_fields(r#"["not", "an", "object"]"#).is_err());
        assert!(parse_fields("42").is_err());
        assert!(parse_fields(r#""just a string""#).is_err());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let reply = r#"{"contact_name": "Acme", "contract_value": 1200.5}"#;
        assert_eq!(parse_fields(reply).unwrap(), parse_fields(reply).unwrap());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let fields =
            parse_fields(r#"{"summary": "ok", "confidence": 0.9, "notes": ["extra"]}"#).unwrap();
        assert_eq!(fields.summary.as_deref(), Some("ok"));
    }

    #[test]
    fn test_explicit_nulls_become_absent() {
        let fields =
            parse_fields(r#"{"contact_name": null, "summary": "ok", "end_date": null}"#).unwrap();
        assert!(fields.contact_name.is_none());
        assert!(fields.end_date.is_none());
    }

    #[test]
    fn test_date_coercion() {
        let fields =
            parse_fields(r#"{"start_date": "2024-01-15", "end_date": "next spring"}"#).unwrap();
        assert_eq!(
            fields.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        // Uncoercible date is dropped, not an error.
        assert!(fields.end_date.is_none());
    }

    #[test]
    fn test_value_coercion() {
        let fields = parse_fields(r#"{"contract_value": 85000}"#).unwrap();
        assert_eq!(fields.contract_value, Some(85000.0));

        let fields = parse_fields(r#"{"contract_value": "$120,000.50"}"#).unwrap();
        assert_eq!(fields.contract_value, Some(120000.50));

        let fields = parse_fields(r#"{"contract_value": "to be negotiated"}"#).unwrap();
        assert!(fields.contract_value.is_none());
    }

    #[test]
    fn test_empty_strings_become_absent() {
        let fields = parse_fields(r#"{"contact_email": "   ", "summary": "ok"}"#).unwrap();
        assert!(fields.contact_email.is_none());
    }
}
