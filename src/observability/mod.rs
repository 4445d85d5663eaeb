//! Observability for recordledger
//!
//! - Structured logging (one JSON object per line, on stderr)
//! - Invocation scopes with begin/complete/failed events
//!
//! Observability is read-only: nothing here affects the outcome of an
//! operation, and logging failures are swallowed.
//!
//! ```ignore
//! use recordledger::observability::{Logger, ObservationScope};
//!
//! Logger::info("GATEWAY_READY", &[("ledger", "default")]);
//!
//! let scope = ObservationScope::new("READ");
//! scope.complete(&[]);
//! ```

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};
