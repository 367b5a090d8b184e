//! Story privacy guard: strips personal identifiers before a story is
//! analyzed or stored, and enforces length limits.

use crate::config::PrivacyConfig;
use crate::error::{CalmaError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email regex")
});

static PHONES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        r"\(\d{3}\)\s*\d{3}[-.]?\d{4}\b",
        r"\b\d{3}\s\d{3}\s\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone regex"))
    .collect()
});

static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d+\s+[a-z]+\s+(street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct)\b",
    )
    .expect("address regex")
});

static SSN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("ssn regex"));

static NAME_HINTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bmy name is\b",
        r"(?i:\bi am)\s+[A-Z][a-z]+\b",
        r"(?i:\bcall me)\s+[A-Z][a-z]+\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("name regex"))
    .collect()
});

pub const EMAIL_WARNING: &str = "Email address detected and removed";
pub const PHONE_WARNING: &str = "Phone number detected and removed";
pub const ADDRESS_WARNING: &str = "Street address detected and removed";
pub const SSN_WARNING: &str = "Social security number detected and removed";
pub const NAME_WARNING: &str =
    "Text may contain a name. Consider rephrasing without identifying information.";

/// Replace personal identifiers with placeholders.
///
/// Returns the cleaned text and one warning per kind of identifier removed.
pub fn sanitize(text: &str) -> (String, Vec<&'static str>) {
    let mut warnings = Vec::new();
    let mut cleaned = text.to_string();

    if EMAIL.is_match(&cleaned) {
        cleaned = EMAIL.replace_all(&cleaned, "[EMAIL REMOVED]").into_owned();
        warnings.push(EMAIL_WARNING);
    }

    for pattern in PHONES.iter() {
        if pattern.is_match(&cleaned) {
            cleaned = pattern.replace_all(&cleaned, "[PHONE REMOVED]").into_owned();
            if !warnings.contains(&PHONE_WARNING) {
                warnings.push(PHONE_WARNING);
            }
        }
    }

    if ADDRESS.is_match(&cleaned) {
        cleaned = ADDRESS.replace_all(&cleaned, "[ADDRESS REMOVED]").into_owned();
        warnings.push(ADDRESS_WARNING);
    }

    if SSN.is_match(&cleaned) {
        cleaned = SSN.replace_all(&cleaned, "[SSN REMOVED]").into_owned();
        warnings.push(SSN_WARNING);
    }

    if !warnings.is_empty() {
        tracing::debug!(removed = warnings.len(), "identifiers stripped from story");
    }
    (cleaned, warnings)
}

/// Flag phrasing that often introduces a real name. Advisory only.
pub fn check_for_names(text: &str) -> Option<&'static str> {
    NAME_HINTS
        .iter()
        .any(|re| re.is_match(text))
        .then_some(NAME_WARNING)
}

/// Check the trimmed character count against the configured limits.
pub fn validate_story_length(text: &str, limits: &PrivacyConfig) -> Result<()> {
    let len = text.trim().chars().count();
    if len < limits.min_story_chars {
        return Err(CalmaError::Validation {
            message: format!(
                "Story is too short. Please write at least {} characters.",
                limits.min_story_chars
            ),
        });
    }
    if len > limits.max_story_chars {
        return Err(CalmaError::Validation {
            message: format!(
                "Story is too long. Please keep it under {} characters.",
                limits.max_story_chars
            ),
        });
    }
    Ok(())
}
