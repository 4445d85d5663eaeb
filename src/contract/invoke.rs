//! RecordContract: record store plus optional capabilities
//!
//! One contract type covers both the CRUD-only deployment and the one that
//! also serves history reads. Which operations are exposed is decided by the
//! [`Capabilities`] it is built with.

use serde_json::Value;

use crate::ledger::LedgerStub;

use super::errors::{ContractError, ContractResult};
use super::history::HistoryReader;
use super::store::RecordStore;

/// Optional capabilities on top of the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub history: bool,
}

impl Capabilities {
    /// Create/read/update/delete only
    pub const BASIC: Capabilities = Capabilities { history: false };
    /// Record store plus history reads
    pub const WITH_HISTORY: Capabilities = Capabilities { history: true };
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::WITH_HISTORY
    }
}

/// One typed contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Create {
        data: String,
    },
    Update {
        key: String,
        name: String,
        designation: String,
        mobile: i64,
    },
    Read {
        key: String,
    },
    Delete {
        key: String,
    },
    GetHistory {
        key: String,
    },
}

impl Invocation {
    /// Operation name as used in logs and the request envelope
    pub fn name(&self) -> &'static str {
        match self {
            Invocation::Create { .. } => "create",
            Invocation::Update { .. } => "update",
            Invocation::Read { .. } => "read",
            Invocation::Delete { .. } => "delete",
            Invocation::GetHistory { .. } => "get_history",
        }
    }

    /// Key the call addresses. `None` for create, whose key is inside the
    /// payload.
    pub fn key(&self) -> Option<&str> {
        match self {
            Invocation::Create { .. } => None,
            Invocation::Update { key, .. }
            | Invocation::Read { key }
            | Invocation::Delete { key }
            | Invocation::GetHistory { key } => Some(key),
        }
    }
}

/// The record contract
#[derive(Debug, Clone)]
pub struct RecordContract {
    capabilities: Capabilities,
    store: RecordStore,
    history: Option<HistoryReader>,
}

impl RecordContract {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            store: RecordStore::new(),
            history: capabilities.history.then(HistoryReader::new),
        }
    }

    /// Contract without history reads
    pub fn basic() -> Self {
        Self::new(Capabilities::BASIC)
    }

    /// Contract with history reads
    pub fn with_history() -> Self {
        Self::new(Capabilities::WITH_HISTORY)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Names of the operations this contract answers
    pub fn operations(&self) -> Vec<&'static str> {
        let mut ops = vec!["create", "read", "update", "delete"];
        if self.history.is_some() {
            ops.push("get_history");
        }
        ops
    }

    /// Runs one invocation against `stub`.
    ///
    /// Writes return the transaction id as a JSON string, `read` returns the
    /// record object and `get_history` the array of history entries.
    pub fn invoke<S: LedgerStub + ?Sized>(
        &self,
        stub: &mut S,
        invocation: &Invocation,
    ) -> ContractResult<Value> {
        match invocation {
            Invocation::Create { data } => self.store.create(stub, data).map(Value::String),
            Invocation::Update {
                key,
                name,
                designation,
                mobile,
            } => self
                .store
                .update(stub, key, name, designation, *mobile)
                .map(Value::String),
            Invocation::Read { key } => {
                let record = self.store.read(&*stub, key)?;
                serde_json::to_value(record)
                    .map_err(|e| ContractError::serialization("failed while marshalling record", e))
            }
            Invocation::Delete { key } => self.store.delete(stub, key).map(Value::String),
            Invocation::GetHistory { key } => {
                let reader = self
                    .history
                    .as_ref()
                    .ok_or_else(|| ContractError::unsupported(invocation.name()))?;
                let entries = reader.history(&*stub, key)?;
                serde_json::to_value(entries)
                    .map_err(|e| ContractError::serialization("failed while marshalling history", e))
            }
        }
    }
}

impl Default for RecordContract {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}
