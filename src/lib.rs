//! recordledger - record lifecycle and history over a transactional ledger
//!
//! Records are created, read, updated and deleted through a ledger substrate
//! that the crate does not own. Every change the ledger commits for a key can
//! be replayed as an ordered audit trail, deletions included.

pub mod api;
pub mod cli;
pub mod contract;
pub mod ledger;
pub mod observability;
