//! Parameter Coercion
//!
//! Loose coercion rules for query parameters and JSON body fields. The
//! admin client sends well-formed input, but the wire contract tolerates
//! sloppy values: a numeric prefix counts as a number, anything else
//! coerces to zero, and zero-equivalent values count as missing.

use serde_json::Value;

/// Lenient identifier parse: numeric-prefix coercion, positive only.
///
/// `"7"`, `" 7 "`, and `"7abc"` all yield 7; `"abc"`, `"0"`, and `"-3"`
/// yield `None` and the caller treats the identifier as absent.
pub fn lenient_id(raw: &str) -> Option<i64> {
    let value = leading_int(raw.trim());
    (value > 0).then_some(value)
}

/// Strict identifier parse: digits only, positive only.
///
/// Any sign, decimal point, or trailing garbage fails. Used where an
/// invalid identifier must silently fall back rather than error.
pub fn strict_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i64>().ok().filter(|&v| v > 0)
}

/// Field presence: an explicit JSON `null` counts as absent.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Required-field check: absent, null, `false`, numeric zero, the empty
/// string, and the literal string `"0"` all count as blank.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v == 0.0),
        Some(Value::String(s)) => s.is_empty() || s == "0",
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(_)) => false,
    }
}

/// Coerce a JSON value to text. Non-scalar values coerce to empty.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        _ => String::new(),
    }
}

/// Coerce a JSON value to a float, taking the numeric prefix of strings.
pub fn as_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => leading_float(s),
        Value::Bool(b) => f64::from(*b),
        _ => 0.0,
    }
}

/// Coerce a JSON value to an integer, taking the numeric prefix of strings
/// and truncating floats toward zero.
pub fn as_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v as i64))
            .unwrap_or(0),
        Value::String(s) => leading_int(s.trim()),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Integer value of the longest numeric prefix, or 0 without one.
fn leading_int(s: &str) -> i64 {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    rest[..digits].parse::<i64>().map(|v| sign * v).unwrap_or(0)
}

/// Float value of the longest numeric prefix, or 0.0 without one.
fn leading_float(s: &str) -> f64 {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}
