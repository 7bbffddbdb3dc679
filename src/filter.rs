//! Compiler-output post-filter
//!
//! A fatal scaffold diagnostic surfaces in the C++ compiler's output as a
//! `ParseError(... "message")` note plus an out-of-range array subscript whose
//! value is the offending line. This turns that into `"<message> at line: <n>"`.

use std::sync::OnceLock;

use regex::Regex;

use crate::pattern::compiled;

/// Message quoted inside `ParseError(...)`, then the subscript value anywhere after it
const PATTERN: &str = r#"(?:ParseError\(.*"(.+)"\))[\s\S]*(?:array subscript value '([0-9]+)')"#;

static FILTER_RE: OnceLock<Regex> = OnceLock::new();

/// Extract `"<message> at line: <number>"`, or return `raw` unchanged.
pub fn filter_message(raw: &str) -> Result<String, regex::Error> {
    let re = compiled(&FILTER_RE, PATTERN)?;

    let filtered = match re.captures(raw) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(message), Some(line)) => {
                format!("{} at line: {}", message.as_str(), line.as_str())
            }
            _ => raw.to_string(),
        },
        None => raw.to_string(),
    };
    Ok(filtered)
}
