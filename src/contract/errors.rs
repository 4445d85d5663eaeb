//! Contract error types
//!
//! Error codes:
//! - REC_INVALID_INPUT - empty or missing argument
//! - REC_NOT_FOUND - no record at key
//! - REC_SERIALIZATION_ERROR - malformed payload or stored bytes
//! - REC_SUBSTRATE_ERROR - ledger failure
//! - REC_UNSUPPORTED_OPERATION - capability not enabled on this contract
//!
//! None of these are retried. The enclosing transaction is aborted.

use std::fmt;

use thiserror::Error;

use crate::ledger::LedgerError;

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

/// Error kind, for callers that branch on the category of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Serialization,
    Substrate,
    UnsupportedOperation,
}

impl ErrorKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "REC_INVALID_INPUT",
            ErrorKind::NotFound => "REC_NOT_FOUND",
            ErrorKind::Serialization => "REC_SERIALIZATION_ERROR",
            ErrorKind::Substrate => "REC_SUBSTRATE_ERROR",
            ErrorKind::UnsupportedOperation => "REC_UNSUPPORTED_OPERATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Contract operation failure
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} does not exist")]
    NotFound(String),

    #[error("serialization failed: {context}: {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("ledger failure: {context}: {source}")]
    Substrate {
        context: String,
        #[source]
        source: LedgerError,
    },

    #[error("operation {0} is not enabled on this contract")]
    UnsupportedOperation(String),
}

impl ContractError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ContractError::InvalidInput(reason.into())
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        ContractError::NotFound(key.into())
    }

    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        ContractError::Serialization {
            context: context.into(),
            source,
        }
    }

    pub fn substrate(context: impl Into<String>, source: LedgerError) -> Self {
        ContractError::Substrate {
            context: context.into(),
            source,
        }
    }

    pub fn unsupported(operation: impl Into<String>) -> Self {
        ContractError::UnsupportedOperation(operation.into())
    }

    /// Returns the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::InvalidInput(_) => ErrorKind::InvalidInput,
            ContractError::NotFound(_) => ErrorKind::NotFound,
            ContractError::Serialization { .. } => ErrorKind::Serialization,
            ContractError::Substrate { .. } => ErrorKind::Substrate,
            ContractError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
        }
    }

    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
