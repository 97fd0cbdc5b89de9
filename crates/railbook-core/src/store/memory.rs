//! In-memory key-value store.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::store::traits::{KeyValue, KeyValueStore, StateIterator};

/// Ordered in-memory store, mainly for tests and embedding hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.state.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn range_scan<'a>(&'a self, start: &str, end: &str) -> Result<Box<dyn StateIterator + 'a>> {
        // BTreeMap::range panics on an inverted range; treat it as empty instead.
        if start >= end {
            return Ok(Box::new(MemoryRangeIter { inner: None }));
        }
        let range = self
            .state
            .range::<str, _>((
                std::ops::Bound::Included(start),
                std::ops::Bound::Excluded(end),
            ));
        Ok(Box::new(MemoryRangeIter { inner: Some(range) }))
    }
}

struct MemoryRangeIter<'a> {
    inner: Option<std::collections::btree_map::Range<'a, String, Vec<u8>>>,
}

impl Iterator for MemoryRangeIter<'_> {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.as_mut()?.next()?;
        Some(Ok(KeyValue::new(key.clone(), value.clone())))
    }
}

impl StateIterator for MemoryRangeIter<'_> {
    fn close(&mut self) -> Result<()> {
        self.inner = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(store: &MemoryStore, start: &str, end: &str) -> Vec<String> {
        store
            .range_scan(start, end)
            .unwrap()
            .map(|item| item.unwrap().key)
            .collect()
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("REC0").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryStore::new();
        store.put("k", b"one").unwrap();
        store.put("k", b"two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_range_is_half_open_and_lexicographic() {
        let mut store = MemoryStore::new();
        for key in ["REC0", "REC2", "REC10", "REC999", "OTHER"] {
            store.put(key, b"{}").unwrap();
        }
        assert_eq!(keys(&store, "REC0", "REC999"), vec!["REC0", "REC10", "REC2"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut store = MemoryStore::new();
        store.put("b", b"1").unwrap();
        assert!(keys(&store, "c", "a").is_empty());
    }

    #[test]
    fn test_closed_iterator_yields_nothing() {
        let mut store = MemoryStore::new();
        store.put("a", b"1").unwrap();
        store.put("b", b"2").unwrap();
        let mut iter = store.range_scan("a", "z").unwrap();
        assert!(iter.next().is_some());
        iter.close().unwrap();
        iter.close().unwrap();
        assert!(iter.next().is_none());
    }
}
