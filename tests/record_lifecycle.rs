//! Record lifecycle tests
//!
//! Create / read / update / delete against both the in-memory ledger and a
//! call-counting substitute that proves validation failures never reach the
//! ledger.

use std::cell::Cell;

use recordledger::contract::{ErrorKind, Record, RecordStore};
use recordledger::ledger::{
    HistoryCursor, LedgerResult, LedgerStub, MemoryLedger,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Ledger substitute that records every call and stores nothing.
#[derive(Default)]
struct CountingStub {
    reads: Cell<usize>,
    writes: usize,
    deletes: usize,
    history_opens: Cell<usize>,
}

impl CountingStub {
    fn total(&self) -> usize {
        self.reads.get() + self.writes + self.deletes + self.history_opens.get()
    }
}

impl LedgerStub for CountingStub {
    fn get_state(&self, _key: &str) -> LedgerResult<Option<Vec<u8>>> {
        self.reads.set(self.reads.get() + 1);
        Ok(None)
    }

    fn put_state(&mut self, _key: &str, _value: Vec<u8>) -> LedgerResult<()> {
        self.writes += 1;
        Ok(())
    }

    fn del_state(&mut self, _key: &str) -> LedgerResult<()> {
        self.deletes += 1;
        Ok(())
    }

    fn history_for_key(&self, _key: &str) -> LedgerResult<Box<dyn HistoryCursor + '_>> {
        self.history_opens.set(self.history_opens.get() + 1);
        Err(recordledger::ledger::LedgerError::Unavailable("counting stub".into()))
    }

    fn tx_id(&self) -> &str {
        "counting-tx"
    }
}

fn record_json(record: &Record) -> String {
    serde_json::to_string(record).unwrap()
}

fn bob() -> Record {
    Record::new("Bob", "bob@example.com", "Analyst", 4155550100)
}

fn commit_create(ledger: &mut MemoryLedger, record: &Record) -> String {
    let mut tx = ledger.begin();
    RecordStore::new().create(&mut tx, &record_json(record)).unwrap();
    tx.commit()
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_create_then_read_returns_equal_record() {
    let mut ledger = MemoryLedger::new();
    let records = [
        bob(),
        Record::new("", "x@y.z", "", 0),
        Record::new("Ünïcode \"quoted\"", "u@example.com", "Dev\nOps", -1),
        Record::new("Max", "max@example.com", "Ops", i64::MAX),
    ];

    for record in &records {
        commit_create(&mut ledger, record);
    }

    let tx = ledger.begin();
    for record in &records {
        assert_eq!(&RecordStore::new().read(&tx, &record.email).unwrap(), record);
    }
}

#[test]
fn test_create_returns_current_tx_id() {
    let mut ledger = MemoryLedger::new();
    let mut tx = ledger.begin_with_tx_id("tx-42");
    let tx_id = RecordStore::new().create(&mut tx, &record_json(&bob())).unwrap();
    assert_eq!(tx_id, "tx-42");
}

#[test]
fn test_partial_create_reads_back_with_zero_values() {
    let mut ledger = MemoryLedger::new();
    let store = RecordStore::new();

    let mut tx = ledger.begin();
    store
        .create(&mut tx, r#"{"name":"A","email":"a@b.com","designation":null}"#)
        .unwrap();
    tx.commit();

    let tx = ledger.begin();
    let record = store.read(&tx, "a@b.com").unwrap();
    assert_eq!(record.name, "A");
    assert_eq!(record.designation, "");
    assert_eq!(record.mobile, 0);
}

#[test]
fn test_record_serde_round_trip() {
    let record = bob();
    let back: Record = serde_json::from_str(&record_json(&record)).unwrap();
    assert_eq!(back, record);
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_missing_key_does_not_create() {
    let mut ledger = MemoryLedger::new();
    let mut tx = ledger.begin();
    let err = RecordStore::new()
        .update(&mut tx, "missing@x.com", "n", "d", 1)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    tx.commit();

    assert_eq!(ledger.state("missing@x.com"), None);
    assert_eq!(ledger.history_len("missing@x.com"), 0);
}

#[test]
fn test_update_overwrites_mutable_fields_only() {
    let mut ledger = MemoryLedger::new();
    commit_create(&mut ledger, &bob());

    let mut tx = ledger.begin();
    RecordStore::new()
        .update(&mut tx, "bob@example.com", "Robert", "Principal", 7)
        .unwrap();
    tx.commit();

    let tx = ledger.begin();
    let record = RecordStore::new().read(&tx, "bob@example.com").unwrap();
    assert_eq!(record, Record::new("Robert", "bob@example.com", "Principal", 7));
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_then_read_is_not_found() {
    let mut ledger = MemoryLedger::new();
    commit_create(&mut ledger, &bob());

    let mut tx = ledger.begin();
    RecordStore::new().delete(&mut tx, "bob@example.com").unwrap();
    tx.commit();

    let tx = ledger.begin();
    let err = RecordStore::new().read(&tx, "bob@example.com").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_absent_key_succeeds() {
    let mut ledger = MemoryLedger::new();
    let mut tx = ledger.begin();
    RecordStore::new().delete(&mut tx, "never@x.com").unwrap();
    tx.commit();

    assert_eq!(ledger.history_len("never@x.com"), 1);
}

// =============================================================================
// Validation never reaches the ledger
// =============================================================================

#[test]
fn test_empty_key_rejected_without_ledger_access() {
    let store = RecordStore::new();
    let mut stub = CountingStub::default();

    assert_eq!(store.read(&stub, "").unwrap_err().kind(), ErrorKind::InvalidInput);
    assert_eq!(
        store.update(&mut stub, "", "n", "d", 1).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(store.delete(&mut stub, "").unwrap_err().kind(), ErrorKind::InvalidInput);

    assert_eq!(stub.total(), 0);
}

#[test]
fn test_bad_create_payload_never_written() {
    let store = RecordStore::new();
    let mut stub = CountingStub::default();

    assert_eq!(store.create(&mut stub, "").unwrap_err().kind(), ErrorKind::InvalidInput);
    assert_eq!(
        store.create(&mut stub, "{not json").unwrap_err().kind(),
        ErrorKind::Serialization
    );
    assert_eq!(
        store
            .create(&mut stub, r#"{"name":"n","email":"e@x.com","mobile":"x"}"#)
            .unwrap_err()
            .kind(),
        ErrorKind::Serialization
    );
    assert_eq!(
        store.create(&mut stub, r#"{"name":"n"}"#).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );

    assert_eq!(stub.writes, 0);
    assert_eq!(stub.total(), 0);
}

#[test]
fn test_create_does_not_check_existence() {
    let mut stub = CountingStub::default();
    RecordStore::new()
        .create(&mut stub, &record_json(&bob()))
        .unwrap();

    assert_eq!(stub.reads.get(), 0);
    assert_eq!(stub.writes, 1);
}

#[test]
fn test_update_reads_once_then_stops_when_absent() {
    let mut stub = CountingStub::default();
    let err = RecordStore::new()
        .update(&mut stub, "bob@example.com", "n", "d", 1)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(stub.reads.get(), 1);
    assert_eq!(stub.writes, 0);
}
