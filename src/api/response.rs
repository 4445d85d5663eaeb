//! API response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

/// Success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub tx_id: String,
    pub data: Value,
}

impl SuccessResponse {
    pub fn new(tx_id: impl Into<String>, data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            tx_id: tx_id.into(),
            data,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create from an API error
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Unified response type
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    pub fn success(tx_id: impl Into<String>, data: Value) -> Self {
        Response::Success(SuccessResponse::new(tx_id, data))
    }

    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> Value {
        let rendered = match self {
            Response::Success(r) => serde_json::to_value(r),
            Response::Error(r) => serde_json::to_value(r),
        };
        // Both variants are plain strings and JSON values
        rendered.unwrap_or(Value::Null)
    }

    /// Convert to a JSON string
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Error code, if this is an error response
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Error(r) => Some(&r.code),
        }
    }
}
