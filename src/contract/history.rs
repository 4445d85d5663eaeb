//! HistoryReader: reconstructs the audit trail of a key
//!
//! The ledger's modification log for a key is drained in the order the
//! ledger reports it, without re-sorting or seeking. Each modification
//! becomes one [`HistoryEntry`]; deletions become tombstones with no value.
//!
//! The cursor is held through [`ScopedCursor`] so it is closed on every exit
//! path. Any failure discards the entries collected so far.

use crate::ledger::{
    KeyModification, LedgerResult, LedgerStub, LedgerTimestamp, ScopedCursor,
};

use super::errors::{ContractError, ContractResult};
use super::record::{HistoryEntry, Record};

/// History capability. Holds no state; the ledger is passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryReader;

impl HistoryReader {
    pub fn new() -> Self {
        Self
    }

    /// Returns every recorded modification of `key`, oldest first as
    /// reported by the ledger. A key with no history yields an empty list.
    pub fn history<S: LedgerStub + ?Sized>(
        &self,
        stub: &S,
        key: &str,
    ) -> ContractResult<Vec<HistoryEntry>> {
        if key.is_empty() {
            return Err(ContractError::invalid_input("key must not be empty"));
        }

        let mut cursor = ScopedCursor::open(stub, key)
            .map_err(|e| ContractError::substrate(format!("failed to open history of {}", key), e))?;

        let mut entries = Vec::new();
        while cursor.has_next() {
            let modification = cursor.next().map_err(|e| {
                ContractError::substrate(format!("history of {} failed mid-iteration", key), e)
            })?;
            entries.push(Self::to_entry(key, modification)?);
        }

        Ok(entries)
    }

    /// Same as [`history`](Self::history), rendered as a JSON array.
    pub fn history_json<S: LedgerStub + ?Sized>(&self, stub: &S, key: &str) -> ContractResult<String> {
        let entries = self.history(stub, key)?;
        serde_json::to_string(&entries)
            .map_err(|e| ContractError::serialization("failed while marshalling history", e))
    }

    fn to_entry(key: &str, modification: KeyModification) -> ContractResult<HistoryEntry> {
        let timestamp = format_commit_time(modification.timestamp())
            .map_err(|e| ContractError::substrate(format!("history of {}", key), e))?;

        let value = if modification.is_delete() {
            None
        } else {
            Some(Record::from_stored(key, modification.value())?)
        };

        Ok(HistoryEntry {
            tx_id: modification.tx_id().to_string(),
            value,
            timestamp,
            is_delete: modification.is_delete(),
        })
    }
}

/// Renders a commit time as `2006-01-02 15:04:05.123 +0000 UTC`.
///
/// The fractional part is omitted when zero and has trailing zeros trimmed
/// otherwise.
pub fn format_commit_time(timestamp: LedgerTimestamp) -> LedgerResult<String> {
    let at = timestamp.to_datetime()?;
    let mut rendered = at.format("%Y-%m-%d %H:%M:%S").to_string();

    let nanos = at.timestamp_subsec_nanos();
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        rendered.push('.');
        rendered.push_str(fraction.trim_end_matches('0'));
    }

    rendered.push_str(" +0000 UTC");
    Ok(rendered)
}
