//! API error types
//!
//! API errors are pass-through: contract errors keep their `REC_*` code and
//! message unchanged. Only envelope problems get an API-level code.

use std::fmt;

use crate::contract::ContractError;

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Malformed request envelope
    RecInvalidRequest,
    /// Unknown `op`
    RecUnknownOperation,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::RecInvalidRequest => "REC_INVALID_REQUEST",
            ApiErrorCode::RecUnknownOperation => "REC_UNKNOWN_OPERATION",
        }
    }
}

/// API error with preserved contract error information
#[derive(Debug)]
pub struct ApiError {
    code: String,
    message: String,
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::RecInvalidRequest.code().to_string(),
            message: reason.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::RecUnknownOperation.code().to_string(),
            message: format!("Unknown operation: {}", op.into()),
        }
    }

    /// Create from a contract error (pass-through)
    pub fn from_contract_error(err: ContractError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        Self::from_contract_error(err)
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
