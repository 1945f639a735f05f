//! # Response Formatting
//!
//! The uniform JSON envelope:
//! `{"status", "data"?, "message"?, "code"?, "category"?, "pagination"?}`.
//!
//! Absent fields are omitted from the serialized output, so a delete
//! response is just `{"status", "message"}` while a listing carries
//! `{"status", "data", "pagination"}`.

use serde::Serialize;
use serde_json::Value;

/// Pagination block attached to listing responses.
///
/// Pagination is not actually implemented: `page` is always 1 and
/// `per_page` equals the full result count. The shape is kept for the
/// client's benefit.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Pagination block for an unpaginated full result set
    pub fn full(total: usize) -> Self {
        Self {
            total,
            page: 1,
            per_page: total,
        }
    }
}

/// The envelope wrapping every endpoint response
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize = Value> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with a data payload
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: None,
            code: None,
            category: None,
            pagination: None,
        }
    }

    /// Success with a data payload and a human-readable message
    pub fn with_message(data: T, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::success(data)
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Full listing with the fixed pagination shape
    pub fn list(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            pagination: Some(Pagination::full(total)),
            ..Self::success(items)
        }
    }

    /// Category-scoped listing; the envelope names the category
    pub fn list_in_category(items: Vec<T>, category: String) -> Self {
        Self {
            category: Some(category),
            ..Self::list(items)
        }
    }
}

impl ApiResponse<Value> {
    /// Success carrying only a message (delete responses)
    pub fn message(message: &str) -> Self {
        Self {
            status: "success",
            data: None,
            message: Some(message.to_string()),
            code: None,
            category: None,
            pagination: None,
        }
    }

    /// Error envelope with the HTTP status echoed in `code`
    pub fn error(message: String, code: u16) -> Self {
        Self {
            status: "error",
            data: None,
            message: Some(message),
            code: Some(code),
            category: None,
            pagination: None,
        }
    }
}
