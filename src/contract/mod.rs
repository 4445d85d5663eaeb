//! Record contract
//!
//! Record lifecycle operations and history reconstruction over a ledger
//! substrate:
//!
//! - `RecordStore` - create / read / update / delete
//! - `HistoryReader` - ordered audit trail of a key
//! - `RecordContract` - the two composed under a capability set
//!
//! Every operation receives the ledger explicitly. Nothing here keeps state
//! between calls.

mod errors;
mod history;
mod invoke;
mod record;
mod store;

pub use errors::{ContractError, ContractResult, ErrorKind};
pub use history::{format_commit_time, HistoryReader};
pub use invoke::{Capabilities, Invocation, RecordContract};
pub use record::{HistoryEntry, Record};
pub use store::RecordStore;
