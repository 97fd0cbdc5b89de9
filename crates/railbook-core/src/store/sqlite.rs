//! SQLite-backed key-value store.
//!
//! Values live in a single `world_state` table keyed by TEXT with the default
//! BINARY collation, which orders keys by their UTF-8 bytes. Range scans page
//! through the table with keyset pagination so the iterator never keeps a
//! statement borrowed between calls.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{LedgerError, Result};
use crate::store::traits::{KeyValue, KeyValueStore, StateIterator};

/// Rows fetched per range-scan round trip.
const DEFAULT_PAGE_SIZE: usize = 64;

const SCAN_FROM_START: &str =
    "SELECT key, value FROM world_state WHERE key >= ?1 AND key < ?2 ORDER BY key LIMIT ?3";
const SCAN_AFTER_KEY: &str =
    "SELECT key, value FROM world_state WHERE key > ?1 AND key < ?2 ORDER BY key LIMIT ?3";

/// SQLite key-value store.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
    page_size: usize,
}

impl SqliteStore {
    /// Open (or create) a store file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Storage(format!(
                        "Failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Override the number of rows fetched per range-scan page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run SQLite's integrity check.
    pub fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;
        let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if result != "ok" {
            return Err(LedgerError::Storage(format!(
                "Integrity check failed: {}",
                result
            )));
        }
        Ok(())
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS world_state (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| LedgerError::Storage("SQLite connection poisoned".to_string()))
    }

    /// Fetch the next page of `[start, end)`, resuming after `after` if set.
    fn fetch_page(
        &self,
        start: &str,
        after: Option<&str>,
        end: &str,
        limit: usize,
    ) -> Result<Vec<KeyValue>> {
        let conn = self.lock_conn().map_err(read_error)?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let (sql, lower) = match after {
            None => (SCAN_FROM_START, start),
            Some(last) => (SCAN_AFTER_KEY, last),
        };

        let scan = || -> rusqlite::Result<Vec<KeyValue>> {
            let mut stmt = conn.prepare_cached(sql)?;
            let mapped = stmt.query_map(params![lower, end, limit], |row| {
                Ok(KeyValue {
                    key: row.get(0)?,
                    value: row.get(1)?,
                })
            })?;
            let mut rows = Vec::new();
            for row in mapped {
                rows.push(row?);
            }
            Ok(rows)
        };

        scan().map_err(|e| LedgerError::StoreRead(format!("SQLite range scan failed: {}", e)))
    }
}

fn read_error(err: LedgerError) -> LedgerError {
    LedgerError::StoreRead(err.to_string())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = self.lock_conn().map_err(read_error)?;
        conn.query_row(
            "SELECT value FROM world_state WHERE key = ?1",
            [key],
            |row| row.get::<_, Vec<u8>>(0),
        )
        .optional()
        .map_err(|e| LedgerError::StoreRead(format!("SQLite read failed: {}", e)))
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let conn = self
            .lock_conn()
            .map_err(|e| LedgerError::StoreWrite(e.to_string()))?;
        conn.execute(
            r#"
            INSERT INTO world_state (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )
        .map_err(|e| LedgerError::StoreWrite(format!("SQLite write failed: {}", e)))?;
        Ok(())
    }

    fn range_scan<'a>(&'a self, start: &str, end: &str) -> Result<Box<dyn StateIterator + 'a>> {
        // Probe the connection up front so construction failures surface here.
        drop(self.lock_conn().map_err(read_error)?);
        Ok(Box::new(SqliteRangeIter {
            store: self,
            start: start.to_string(),
            end: end.to_string(),
            last_key: None,
            buffer: VecDeque::new(),
            exhausted: start >= end,
        }))
    }
}

/// Lazy, paginated range iterator over `world_state`.
struct SqliteRangeIter<'a> {
    store: &'a SqliteStore,
    start: String,
    end: String,
    last_key: Option<String>,
    buffer: VecDeque<KeyValue>,
    exhausted: bool,
}

impl SqliteRangeIter<'_> {
    fn refill(&mut self) -> Result<()> {
        let page_size = self.store.page_size;
        let page = self.store.fetch_page(
            &self.start,
            self.last_key.as_deref(),
            &self.end,
            page_size,
        )?;
        if page.len() < page_size {
            self.exhausted = true;
        }
        if let Some(last) = page.last() {
            self.last_key = Some(last.key.clone());
        }
        self.buffer.extend(page);
        Ok(())
    }
}

impl Iterator for SqliteRangeIter<'_> {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.exhausted {
            if let Err(err) = self.refill() {
                self.exhausted = true;
                return Some(Err(err));
            }
        }
        self.buffer.pop_front().map(Ok)
    }
}

impl StateIterator for SqliteRangeIter<'_> {
    fn close(&mut self) -> Result<()> {
        self.buffer.clear();
        self.exhausted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_keys(store: &SqliteStore, start: &str, end: &str) -> Vec<String> {
        store
            .range_scan(start, end)
            .unwrap()
            .map(|item| item.unwrap().key)
            .collect()
    }

    #[test]
    fn test_get_put_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("REC0").unwrap(), None);

        store.put("REC0", br#"{"status":"RAC"}"#).unwrap();
        assert_eq!(
            store.get("REC0").unwrap(),
            Some(br#"{"status":"RAC"}"#.to_vec())
        );

        store.put("REC0", b"{}").unwrap();
        assert_eq!(store.get("REC0").unwrap(), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_range_scan_spans_pages_in_byte_order() {
        let mut store = SqliteStore::open_in_memory().unwrap().with_page_size(2);
        for i in 0..7 {
            store.put(&format!("REC{}", i), b"{}").unwrap();
        }
        store.put("REC10", b"{}").unwrap();
        store.put("REC999", b"{}").unwrap();
        store.put("ZZZ", b"{}").unwrap();

        let keys = scan_keys(&store, "REC0", "REC999");
        assert_eq!(
            keys,
            vec!["REC0", "REC1", "REC10", "REC2", "REC3", "REC4", "REC5", "REC6"]
        );
    }

    #[test]
    fn test_range_scan_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(scan_keys(&store, "REC0", "REC999").is_empty());
        assert!(scan_keys(&store, "b", "a").is_empty());
    }

    #[test]
    fn test_close_stops_iteration() {
        let mut store = SqliteStore::open_in_memory().unwrap().with_page_size(1);
        store.put("a", b"1").unwrap();
        store.put("b", b"2").unwrap();
        let mut iter = store.range_scan("a", "z").unwrap();
        assert_eq!(iter.next().unwrap().unwrap().key, "a");
        iter.close().unwrap();
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_integrity_check_passes_on_fresh_store() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.check_integrity().unwrap();
        assert!(store.path().is_none());
    }
}
