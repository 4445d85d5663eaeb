//! Substrate contract consumed by the record contract
//!
//! The substrate is passed explicitly into every contract operation. Nothing
//! in the contract layer holds ledger state of its own.

use chrono::{DateTime, Utc};

use super::errors::{LedgerError, LedgerResult};

/// Commit time as reported by the substrate: seconds and nanoseconds since
/// the Unix epoch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerTimestamp {
    seconds: i64,
    nanos: i32,
}

impl LedgerTimestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self {
            seconds: at.timestamp(),
            nanos: at.timestamp_subsec_nanos() as i32,
        }
    }

    #[inline]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    #[inline]
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Converts to an absolute UTC time.
    ///
    /// Fails for negative nanos or values chrono cannot represent.
    pub fn to_datetime(&self) -> LedgerResult<DateTime<Utc>> {
        let invalid = LedgerError::InvalidTimestamp {
            seconds: self.seconds,
            nanos: self.nanos,
        };
        let nanos = u32::try_from(self.nanos).map_err(|_| invalid.clone())?;
        DateTime::from_timestamp(self.seconds, nanos).ok_or(invalid)
    }
}

/// One recorded change of a key, in the order the substrate committed it.
///
/// A deletion carries no value. All fields are private; a modification
/// never changes after the substrate hands it out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyModification {
    tx_id: String,
    value: Vec<u8>,
    is_delete: bool,
    timestamp: LedgerTimestamp,
}

impl KeyModification {
    /// A write of `value` committed by `tx_id`.
    pub fn with_value(tx_id: impl Into<String>, value: Vec<u8>, timestamp: LedgerTimestamp) -> Self {
        Self {
            tx_id: tx_id.into(),
            value,
            is_delete: false,
            timestamp,
        }
    }

    /// A deletion committed by `tx_id`.
    pub fn with_tombstone(tx_id: impl Into<String>, timestamp: LedgerTimestamp) -> Self {
        Self {
            tx_id: tx_id.into(),
            value: Vec::new(),
            is_delete: true,
            timestamp,
        }
    }

    #[inline]
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }

    /// Stored bytes. Empty for a deletion.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    #[inline]
    pub fn is_delete(&self) -> bool {
        self.is_delete
    }

    #[inline]
    pub fn timestamp(&self) -> LedgerTimestamp {
        self.timestamp
    }
}

/// Forward-only cursor over the modification log of a single key.
///
/// The substrate holds resources for the cursor until `close()` is called.
/// Callers should hold it through [`ScopedCursor`](super::ScopedCursor)
/// rather than closing by hand.
pub trait HistoryCursor {
    /// Returns true if another modification can be read.
    fn has_next(&self) -> bool;

    /// Reads the next modification.
    fn next(&mut self) -> LedgerResult<KeyModification>;

    /// Releases substrate-side resources.
    fn close(&mut self) -> LedgerResult<()>;
}

/// Point access to world state plus per-key history, scoped to one
/// transaction.
pub trait LedgerStub {
    /// Returns the committed value at `key`, or `None` if absent.
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Writes `value` at `key` within the current transaction.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()>;

    /// Deletes `key` within the current transaction. Absent keys are not an
    /// error.
    fn del_state(&mut self, key: &str) -> LedgerResult<()>;

    /// Opens a cursor over the committed modification log of `key`.
    fn history_for_key(&self, key: &str) -> LedgerResult<Box<dyn HistoryCursor + '_>>;

    /// Identifier of the current transaction.
    fn tx_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_datetime_round_trip() {
        let at = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        let ts = LedgerTimestamp::from_datetime(at);
        assert_eq!(ts.seconds(), at.timestamp());
        assert_eq!(ts.nanos(), 0);
        assert_eq!(ts.to_datetime().unwrap(), at);
    }

    #[test]
    fn test_negative_nanos_rejected() {
        let ts = LedgerTimestamp::new(10, -1);
        assert!(matches!(
            ts.to_datetime(),
            Err(LedgerError::InvalidTimestamp { seconds: 10, nanos: -1 })
        ));
    }

    #[test]
    fn test_out_of_range_seconds_rejected() {
        let ts = LedgerTimestamp::new(i64::MAX, 0);
        assert!(ts.to_datetime().is_err());
    }

    #[test]
    fn test_tombstone_has_no_value() {
        let m = KeyModification::with_tombstone("tx1", LedgerTimestamp::new(1, 0));
        assert!(m.is_delete());
        assert!(m.value().is_empty());
        assert_eq!(m.tx_id(), "tx1");
    }

    #[test]
    fn test_value_modification() {
        let m = KeyModification::with_value("tx2", b"{}".to_vec(), LedgerTimestamp::new(2, 5));
        assert!(!m.is_delete());
        assert_eq!(m.value(), b"{}");
        assert_eq!(m.timestamp(), LedgerTimestamp::new(2, 5));
    }
}
