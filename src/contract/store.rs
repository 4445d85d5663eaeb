//! RecordStore: create/read/update/delete over the ledger
//!
//! Every operation validates its arguments before touching the ledger and
//! performs at most one write, so a failed validation never reaches storage.

use crate::ledger::LedgerStub;

use super::errors::{ContractError, ContractResult};
use super::record::Record;

/// Record lifecycle operations. Holds no state; the ledger is passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStore;

impl RecordStore {
    pub fn new() -> Self {
        Self
    }

    /// Stores the record parsed from `data` under its email.
    ///
    /// There is no existence check: an existing record at the same email is
    /// overwritten.
    pub fn create<S: LedgerStub + ?Sized>(&self, stub: &mut S, data: &str) -> ContractResult<String> {
        if data.is_empty() {
            return Err(ContractError::invalid_input("record data must not be empty"));
        }

        let record = Record::from_json(data)?;
        if record.email.is_empty() {
            return Err(ContractError::invalid_input("record email must not be empty"));
        }

        let bytes = record.to_bytes()?;
        stub.put_state(&record.email, bytes)
            .map_err(|e| ContractError::substrate(format!("failed to write {}", record.email), e))?;

        Ok(stub.tx_id().to_string())
    }

    /// Overwrites name, designation and mobile of the record at `key`.
    /// The email is left unchanged.
    pub fn update<S: LedgerStub + ?Sized>(
        &self,
        stub: &mut S,
        key: &str,
        name: &str,
        designation: &str,
        mobile: i64,
    ) -> ContractResult<String> {
        let mut record = self.load(&*stub, key)?;

        record.name = name.to_string();
        record.designation = designation.to_string();
        record.mobile = mobile;

        let bytes = record.to_bytes()?;
        stub.put_state(key, bytes)
            .map_err(|e| ContractError::substrate(format!("failed to write {}", key), e))?;

        Ok(stub.tx_id().to_string())
    }

    /// Returns the record at `key`.
    pub fn read<S: LedgerStub + ?Sized>(&self, stub: &S, key: &str) -> ContractResult<Record> {
        self.load(stub, key)
    }

    /// Deletes `key`. Deleting an absent key is not an error.
    pub fn delete<S: LedgerStub + ?Sized>(&self, stub: &mut S, key: &str) -> ContractResult<String> {
        if key.is_empty() {
            return Err(ContractError::invalid_input("key must not be empty"));
        }

        stub.del_state(key)
            .map_err(|e| ContractError::substrate(format!("failed to delete {}", key), e))?;

        Ok(stub.tx_id().to_string())
    }

    fn load<S: LedgerStub + ?Sized>(&self, stub: &S, key: &str) -> ContractResult<Record> {
        if key.is_empty() {
            return Err(ContractError::invalid_input("key must not be empty"));
        }

        let bytes = stub
            .get_state(key)
            .map_err(|e| ContractError::substrate(format!("failed to read {}", key), e))?
            .ok_or_else(|| ContractError::not_found(key))?;

        Record::from_stored(key, &bytes)
    }
}
