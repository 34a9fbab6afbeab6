//! Best-effort removal of personal information from extracted resume text.
//!
//! This is pattern matching, not anonymization: the patterns catch common
//! shapes of emails, Indonesian phone numbers, dates, handles and profile
//! URLs, and anything outside those shapes passes through untouched.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Applied in order. Emails go before bare `@handles` so the handle pattern
/// never sees half of an address.
static PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("email", r"\S+@\S+"),
        ("phone", r"(\+62|62|0)\d{9,12}"),
        ("address", r"(?i)\b(jalan|jl\.?|alamat)\b"),
        ("name_label", r"(?i)\bnama\b"),
        ("date", r"\b(\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4})\b"),
        ("handle", r"@\w+"),
        (
            "social_url",
            r"(?i)\b(?:twitter|facebook|linkedin|instagram)\.com/\S+\b",
        ),
        ("brackets", r"[()\[\]{}]"),
        ("bullets", r"[-=•●▪▸▶►]"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).unwrap()))
    .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strips common personal-information patterns and collapses whitespace.
pub fn redact_personal_info(text: &str) -> String {
    let mut current = text.to_string();
    for (_, pattern) in PATTERNS.iter() {
        let redacted = match pattern.replace_all(&current, "") {
            Cow::Borrowed(_) => continue,
            Cow::Owned(redacted) => redacted,
        };
        current = redacted;
    }
    WHITESPACE.replace_all(&current, " ").trim().to_string()
}
