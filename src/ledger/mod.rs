//! Ledger substrate boundary
//!
//! The record contract runs on top of a transactional key-value ledger that
//! it does not own. This module defines what the contract needs from it:
//!
//! - point `get_state` / `put_state` / `del_state`
//! - a forward-only history cursor per key
//! - the current transaction id
//!
//! `MemoryLedger` is a reference implementation used by the CLI and tests.

mod cursor;
mod errors;
mod memory;
mod stub;

pub use cursor::ScopedCursor;
pub use errors::{LedgerError, LedgerResult};
pub use memory::{Clock, LedgerTransaction, MemoryLedger};
pub use stub::{HistoryCursor, KeyModification, LedgerStub, LedgerTimestamp};
