//! Ledger substrate error types
//!
//! These are failures reported by the substrate itself. The contract layer
//! never inspects them beyond wrapping them as `REC_SUBSTRATE_ERROR`.

use thiserror::Error;

/// Result type for substrate operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Substrate failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Writes require a non-empty key
    #[error("key must not be empty")]
    EmptyKey,

    /// `next()` called on a cursor with no remaining modifications
    #[error("history cursor exhausted for key {0}")]
    CursorExhausted(String),

    /// Cursor used after `close()`
    #[error("history cursor already closed for key {0}")]
    CursorClosed(String),

    /// Commit time outside the representable range
    #[error("invalid commit timestamp: {seconds}s {nanos}ns")]
    InvalidTimestamp { seconds: i64, nanos: i32 },

    /// Substrate could not serve the request
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}
