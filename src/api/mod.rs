//! API wire conventions
//!
//! The uniform JSON envelope every endpoint returns and the error taxonomy
//! mapped onto HTTP status codes.

pub mod errors;
pub mod response;

pub use errors::{ApiError, ApiResult};
pub use response::{ApiResponse, Pagination};
