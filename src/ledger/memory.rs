//! In-memory reference substrate
//!
//! Holds committed world state and a per-key modification log. Writes made
//! through a [`LedgerTransaction`] are buffered and become visible only on
//! `commit()`; dropping the transaction aborts it.
//!
//! This is not a durable store. It exists so the contract can be driven
//! end-to-end from the CLI and from tests.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{LedgerError, LedgerResult};
use super::stub::{HistoryCursor, KeyModification, LedgerStub, LedgerTimestamp};

/// Source of commit times
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// In-memory ledger with commit-ordered per-key history.
pub struct MemoryLedger {
    world: BTreeMap<String, Vec<u8>>,
    history: HashMap<String, Vec<KeyModification>>,
    open_cursors: Arc<AtomicUsize>,
    clock: Clock,
    committed: u64,
}

impl MemoryLedger {
    /// Creates an empty ledger stamping commits with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Creates an empty ledger with an injected clock.
    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self {
            world: BTreeMap::new(),
            history: HashMap::new(),
            open_cursors: Arc::new(AtomicUsize::new(0)),
            clock: Box::new(clock),
            committed: 0,
        }
    }

    /// Starts a transaction with a fresh random id.
    pub fn begin(&mut self) -> LedgerTransaction<'_> {
        let tx_id = Uuid::new_v4().simple().to_string();
        self.begin_with_tx_id(tx_id)
    }

    /// Starts a transaction with a caller-chosen id.
    pub fn begin_with_tx_id(&mut self, tx_id: impl Into<String>) -> LedgerTransaction<'_> {
        LedgerTransaction {
            ledger: self,
            tx_id: tx_id.into(),
            writes: BTreeMap::new(),
        }
    }

    /// Number of history cursors handed out and not yet closed.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Number of committed transactions.
    pub fn committed_transactions(&self) -> u64 {
        self.committed
    }

    /// Committed value at `key`.
    pub fn state(&self, key: &str) -> Option<&[u8]> {
        self.world.get(key).map(Vec::as_slice)
    }

    /// Number of committed modifications recorded for `key`.
    pub fn history_len(&self, key: &str) -> usize {
        self.history.get(key).map_or(0, Vec::len)
    }

    fn apply(&mut self, tx_id: &str, writes: BTreeMap<String, Option<Vec<u8>>>) {
        let timestamp = LedgerTimestamp::from_datetime((self.clock)());
        for (key, write) in writes {
            let modification = match write {
                Some(value) => {
                    self.world.insert(key.clone(), value.clone());
                    KeyModification::with_value(tx_id, value, timestamp)
                }
                None => {
                    self.world.remove(&key);
                    KeyModification::with_tombstone(tx_id, timestamp)
                }
            };
            self.history.entry(key).or_default().push(modification);
        }
        self.committed += 1;
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// One transaction against a [`MemoryLedger`].
///
/// Reads observe committed state only. Writes are buffered, last write per
/// key wins, and are applied atomically by `commit()`.
pub struct LedgerTransaction<'a> {
    ledger: &'a mut MemoryLedger,
    tx_id: String,
    writes: BTreeMap<String, Option<Vec<u8>>>,
}

impl LedgerTransaction<'_> {
    /// Applies buffered writes and returns the transaction id.
    pub fn commit(self) -> String {
        let LedgerTransaction {
            ledger,
            tx_id,
            writes,
        } = self;
        ledger.apply(&tx_id, writes);
        tx_id
    }

    /// Discards buffered writes.
    pub fn abort(self) {}

    /// Number of keys written so far.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }
}

impl LedgerStub for LedgerTransaction<'_> {
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        if key.is_empty() {
            return Err(LedgerError::EmptyKey);
        }
        Ok(self.ledger.world.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        if key.is_empty() {
            return Err(LedgerError::EmptyKey);
        }
        self.writes.insert(key.to_string(), Some(value));
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> LedgerResult<()> {
        if key.is_empty() {
            return Err(LedgerError::EmptyKey);
        }
        self.writes.insert(key.to_string(), None);
        Ok(())
    }

    fn history_for_key(&self, key: &str) -> LedgerResult<Box<dyn HistoryCursor + '_>> {
        if key.is_empty() {
            return Err(LedgerError::EmptyKey);
        }
        let entries: VecDeque<KeyModification> = self
            .ledger
            .history
            .get(key)
            .map(|log| log.iter().cloned().collect())
            .unwrap_or_default();
        self.ledger.open_cursors.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryCursor {
            key: key.to_string(),
            entries,
            open_cursors: Arc::clone(&self.ledger.open_cursors),
            closed: false,
        }))
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }
}

/// Cursor over a snapshot of one key's committed log.
struct MemoryCursor {
    key: String,
    entries: VecDeque<KeyModification>,
    open_cursors: Arc<AtomicUsize>,
    closed: bool,
}

impl HistoryCursor for MemoryCursor {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next(&mut self) -> LedgerResult<KeyModification> {
        if self.closed {
            return Err(LedgerError::CursorClosed(self.key.clone()));
        }
        self.entries
            .pop_front()
            .ok_or_else(|| LedgerError::CursorExhausted(self.key.clone()))
    }

    fn close(&mut self) -> LedgerResult<()> {
        if !self.closed {
            self.closed = true;
            self.open_cursors.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
