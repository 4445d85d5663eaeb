//! API layer for recordledger
//!
//! Turns JSON requests into contract invocations and runs each one in its
//! own ledger transaction.
//!
//! # Supported operations
//!
//! - create
//! - update
//! - read
//! - delete
//! - get_history (when the history capability is enabled)

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::Gateway;
pub use request::parse_request;
pub use response::{ErrorResponse, Response, SuccessResponse};
