//! Input Sanitization
//!
//! String fields are cleaned at the write boundary: markup tags are
//! stripped, then the remainder is HTML-entity-escaped. Stored values
//! therefore already contain escaped entities and readers must not escape
//! again.

use std::sync::OnceLock;

use regex::Regex;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Strip markup tags, then HTML-escape the remainder.
pub fn clean(input: &str) -> String {
    let stripped = tag_pattern().replace_all(input, "");
    escape_entities(&stripped)
}

/// Escape the five HTML-significant characters (`& < > " '`).
fn escape_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
