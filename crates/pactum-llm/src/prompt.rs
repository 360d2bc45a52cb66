//! Prompt construction for contract extraction.
//!
//! The instructions pin the model to a flat JSON object with exactly the
//! nine record keys so the parser can assume near-valid JSON; the model
//! is the only untrusted component in the pipeline.

/// Hard cap on document characters embedded in the prompt. Bounds cost
/// and latency regardless of document size; very long documents lose
/// their tail. The budget counts characters, not bytes, so non-ASCII
/// documents keep as much text as ASCII ones.
pub const MAX_DOCUMENT_CHARS: usize = 6000;

const SYSTEM_INSTRUCTIONS: &str = "You are an intelligent contract analysis assistant. You can analyze ANY type of contract or agreement document (employment agreements, vendor contracts, service agreements, leases, NDAs, etc.) and extract relevant information in a structured way.

Your task is to:
1. Identify what type of document this is
2. Extract ALL relevant contractual information found in the document
3. Return a structured JSON response with the information you find

IMPORTANT: Return ONLY valid JSON, no markdown, no code blocks, no explanations.";

/// Truncate document text to the first `MAX_DOCUMENT_CHARS` characters.
pub fn truncate_document(text: &str) -> &str {
    match text.char_indices().nth(MAX_DOCUMENT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the (system instructions, user prompt) pair for one extraction
/// call. The document text is truncated deterministically before being
/// embedded.
pub fn extraction_prompt(text: &str) -> (String, String) {
    let user = format!(
        r#"Analyze this document and extract all relevant contractual information. Return a JSON object with the following structure:

{{
  "contact_name": "Full name of the primary contact person, signatory, or party (employer, employee, vendor, client, etc.)",
  "contact_email": "Email address if present",
  "contact_phone": "Phone number with country code if present",
  "start_date": "Effective/start date in YYYY-MM-DD format (employment start date, contract effective date, lease start, etc.)",
  "end_date": "End/expiration date in YYYY-MM-DD format if specified (not all contracts have this - employment may be indefinite, some contracts auto-renew)",
  "contract_value": "Numeric value of the contract/agreement (salary, contract amount, lease amount, etc.) - extract the number only without currency symbols. For employment, use annual salary. For recurring payments, use total contract value if stated.",
  "payment_terms": "Description of payment terms, salary structure, or compensation details",
  "termination_terms": "Description of termination, resignation, cancellation, or exit conditions",
  "summary": "A concise 3-5 sentence summary explaining: (1) what type of document this is, (2) the key parties involved, (3) the main purpose/obligations, and (4) key terms or dates"
}}

INSTRUCTIONS:
- Extract information intelligently based on the document type
- If a field doesn't apply to this type of document, use null
- For dates: convert any date format to YYYY-MM-DD
- For values: extract numeric amounts (salary, fees, contract value, rent, etc.)
- Be flexible: "start_date" could be employment start, contract effective date, lease commencement, etc.
- "contact_name" should be the most relevant person (employee for employment agreement, vendor contact for service contract, etc.)
- In the summary, clearly state what type of document this is

Document text:
{}

Return ONLY the JSON object, nothing else."#,
        truncate_document(text)
    );

    (SYSTEM_INSTRUCTIONS.to_string(), user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_document("short contract"), "short contract");
    }

    #[test]
    fn test_truncation_is_deterministic() {
        let long = "x".repeat(MAX_DOCUMENT_CHARS * 2);
        let truncated = truncate_document(&long);
        assert_eq!(truncated.chars().count(), MAX_DOCUMENT_CHARS);
        assert_eq!(truncate_document(&long), truncated);
    }

    #[test]
    fn test_budget_counts_chars_not_bytes() {
        // 3-byte chars: a document exactly at the character budget is
        // kept whole even though it is far larger in bytes.
        let at_budget = "€".repeat(MAX_DOCUMENT_CHARS);
        assert_eq!(truncate_document(&at_budget), at_budget);

        let over_budget = "€".repeat(MAX_DOCUMENT_CHARS + 50);
        let truncated = truncate_document(&over_budget);
        assert_eq!(truncated.chars().count(), MAX_DOCUMENT_CHARS);
        assert!(truncated.chars().all(|c| c == '€'));
    }

    #[test]
    fn test_prompt_embeds_document_and_contract() {
        let (system, user) = extraction_prompt("THIS LEASE AGREEMENT is made...");
        assert!(system.contains("ONLY valid JSON"));
        assert!(user.contains("THIS LEASE AGREEMENT is made..."));
        for key in ["contact_name", "termination_terms", "summary"] {
            assert!(user.contains(key));
        }
    }
}
