//! Key-value store capability.
//!
//! The `KeyValueStore` trait is the only collaborator of `RecordService`. Hosts
//! supply an implementation; the core ships an in-memory map and a SQLite
//! backend. Keys are compared as raw UTF-8 bytes, so range scans are
//! lexicographic (`"REC10"` sorts before `"REC2"`).

use crate::error::Result;

/// A key/value pair yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Forward iterator over a key range.
///
/// Each item may fail independently. Callers must call `close` once they are
/// done, including on early exit; `ScopedIterator` does this on drop.
pub trait StateIterator: Iterator<Item = Result<KeyValue>> {
    /// Release any resources held by the iterator.
    ///
    /// Calling `close` more than once must be harmless.
    fn close(&mut self) -> Result<()>;
}

/// Key-value store interface backing the ledger.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any existing value.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Iterate keys in `[start, end)` in ascending byte order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StoreRead` if the iterator cannot be created.
    fn range_scan<'a>(&'a self, start: &str, end: &str)
        -> Result<Box<dyn StateIterator + 'a>>;
}

/// RAII wrapper that closes a `StateIterator` when dropped.
pub struct ScopedIterator<'a> {
    inner: Box<dyn StateIterator + 'a>,
    closed: bool,
}

impl<'a> ScopedIterator<'a> {
    pub fn new(inner: Box<dyn StateIterator + 'a>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Close the iterator now, surfacing any error from the store.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.inner.close()
    }
}

impl Iterator for ScopedIterator<'_> {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl Drop for ScopedIterator<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(err) = self.inner.close() {
            tracing::warn!(error = %err, "failed to close range iterator");
        }
    }
}
