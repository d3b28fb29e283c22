//! Per-platform extraction patterns and URL templates
//!
//! Each platform module owns an ordered `PATTERNS` list. Order matters:
//! stricter forms come before looser fallbacks so a greedy pattern never
//! captures the wrong segment.

pub mod instagram;
pub mod tiktok;
pub mod vimeo;
pub mod youtube;

use regex::Regex;

/// Return the first non-empty capture produced by `patterns`, tried in order
pub(crate) fn first_capture(patterns: &[Regex], url: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    })
}

/// Append query parameters to a base URL in the given order
pub(crate) fn with_query(base: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return base.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}

pub(crate) fn flag(value: bool) -> String {
    let digit = if value { "1" } else { "0" };
    digit.to_string()
}
