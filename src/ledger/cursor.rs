//! Scoped ownership of a substrate history cursor
//!
//! The substrate keeps resources alive for every open cursor. `ScopedCursor`
//! closes the wrapped cursor exactly once: either through an explicit
//! `close()` or, on any other exit path, when dropped.

use crate::observability::Logger;

use super::errors::LedgerResult;
use super::stub::{HistoryCursor, KeyModification, LedgerStub};

/// A history cursor that is guaranteed to be closed once.
///
/// # Usage
///
/// ```ignore
/// let mut cursor = ScopedCursor::open(stub, "a@b.com")?;
/// while cursor.has_next() {
///     let modification = cursor.next()?; // early return still closes
/// }
/// ```
pub struct ScopedCursor<'a> {
    key: String,
    inner: Box<dyn HistoryCursor + 'a>,
    closed: bool,
}

impl<'a> ScopedCursor<'a> {
    /// Opens the modification log of `key` on `stub`.
    pub fn open<S: LedgerStub + ?Sized>(stub: &'a S, key: &str) -> LedgerResult<Self> {
        let inner = stub.history_for_key(key)?;
        Ok(Self {
            key: key.to_string(),
            inner,
            closed: false,
        })
    }

    /// Key this cursor reads
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn has_next(&self) -> bool {
        !self.closed && self.inner.has_next()
    }

    pub fn next(&mut self) -> LedgerResult<KeyModification> {
        self.inner.next()
    }

    /// Closes the cursor now and reports the substrate's answer.
    pub fn close(mut self) -> LedgerResult<()> {
        self.closed = true;
        self.inner.close()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for ScopedCursor<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.inner.close() {
            let reason = e.to_string();
            Logger::warn(
                "HISTORY_CURSOR_CLOSE_FAILED",
                &[("key", self.key.as_str()), ("reason", reason.as_str())],
            );
        }
    }
}
