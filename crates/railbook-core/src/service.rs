//! Record service: argument validation and dispatch over the key-value store.
//!
//! `RecordService::invoke` is the single host-facing entry point. It maps an
//! operation name onto an [`Operation`], checks the argument count, and runs
//! one read/transform/write cycle against the injected store. The service
//! keeps no record state between calls.

use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, Result};
use crate::record::Record;
use crate::response::Response;
use crate::store::{KeyValueStore, ScopedIterator};

/// Inclusive lower bound of the `queryAllRecords` scan.
pub const RANGE_START: &str = "REC0";

/// Exclusive upper bound of the `queryAllRecords` scan.
pub const RANGE_END: &str = "REC999";

/// Key prefix used by `seedLedger`.
pub const SEED_KEY_PREFIX: &str = "REC";

/// Records written by `seedLedger`, in key order `REC0`..`REC4`.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new("Lokesh", "Male", "Bangalore-Mysore", "AC", "Waiting list"),
        Record::new("Subhiksha", "Female", "Bangalore-Chennai", "AC", "RAC"),
        Record::new("Rakshita", "Female", "Chennai-Mysore", "Sleeper", "Confirmed"),
        Record::new("Sachin", "Male", "Bangalore-Mumbai", "General", "Waiting list"),
        Record::new("Kiran", "Male", "Mysore-Mangalore", "AC", "Waiting list"),
    ]
}

/// Operations reachable through `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    QueryRecord,
    SeedLedger,
    CreateRecord,
    QueryAllRecords,
    UpdateStatus,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::QueryRecord,
        Operation::SeedLedger,
        Operation::CreateRecord,
        Operation::QueryAllRecords,
        Operation::UpdateStatus,
    ];

    /// Wire name used by hosts.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::QueryRecord => "queryRecord",
            Operation::SeedLedger => "seedLedger",
            Operation::CreateRecord => "createRecord",
            Operation::QueryAllRecords => "queryAllRecords",
            Operation::UpdateStatus => "updateStatus",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = LedgerError;

    fn from_str(name: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| LedgerError::UnknownOperation(name.to_string()))
    }
}

/// CRUD dispatcher over an injected key-value store.
pub struct RecordService<S> {
    store: S,
}

impl<S: KeyValueStore> RecordService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Instantiation hook. Does no ledger work; seeding is explicit.
    pub fn init(&mut self) -> Response {
        tracing::debug!("record service initialized");
        Response::success(Vec::new())
    }

    /// Dispatch `function` with positional `args`.
    pub fn invoke(&mut self, function: &str, args: &[String]) -> Response {
        let result = function
            .parse::<Operation>()
            .and_then(|op| self.dispatch(op, args));
        if let Err(ref err) = result {
            tracing::debug!(function, error = %err, "operation failed");
        }
        result.into()
    }

    /// Run a parsed operation, returning the success payload.
    pub fn dispatch(&mut self, op: Operation, args: &[String]) -> Result<Vec<u8>> {
        tracing::debug!(operation = %op, args = args.len(), "dispatching");
        match op {
            Operation::QueryRecord => {
                let [key] = expect_args::<1>(args, 1)?;
                Ok(self.query_record(key))
            }
            Operation::SeedLedger => {
                self.seed_ledger()?;
                Ok(Vec::new())
            }
            Operation::CreateRecord => {
                // Six arguments are required; the message has always said five.
                let [key, name, category, route, tier, status] = expect_args::<6>(args, 5)?;
                let record = Record::new(name, category, route, tier, status);
                self.create_record(key, &record)?;
                Ok(Vec::new())
            }
            Operation::QueryAllRecords => self.query_all_records(),
            Operation::UpdateStatus => {
                let [key, status] = expect_args::<2>(args, 2)?;
                self.update_status(key, status)?;
                Ok(Vec::new())
            }
        }
    }

    /// Raw bytes stored under `key`, empty if missing or unreadable.
    pub fn query_record(&self, key: &str) -> Vec<u8> {
        match self.store.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(key, error = %err, "read failed, returning empty payload");
                Vec::new()
            }
        }
    }

    /// Write the seed records under `REC0`..`REC4`.
    pub fn seed_ledger(&mut self) -> Result<()> {
        for (i, record) in seed_records().iter().enumerate() {
            let key = format!("{}{}", SEED_KEY_PREFIX, i);
            self.store.put(&key, &record.to_bytes()?)?;
            tracing::info!(key = %key, name = %record.name, "seeded record");
        }
        Ok(())
    }

    /// Store `record` under `key`, replacing any existing value.
    pub fn create_record(&mut self, key: &str, record: &Record) -> Result<()> {
        self.store.put(key, &record.to_bytes()?)?;
        tracing::debug!(key, "created record");
        Ok(())
    }

    /// Serialize every record in `[RANGE_START, RANGE_END)` as a JSON array.
    ///
    /// Stored values are embedded verbatim. Any scan error discards the
    /// partial buffer.
    pub fn query_all_records(&self) -> Result<Vec<u8>> {
        let iter = self
            .store
            .range_scan(RANGE_START, RANGE_END)
            .map_err(into_read_error)?;
        let mut iter = ScopedIterator::new(iter);

        let mut buffer = Vec::new();
        buffer.push(b'[');
        let mut count = 0usize;
        for item in iter.by_ref() {
            let kv = item.map_err(into_read_error)?;
            if count > 0 {
                buffer.push(b',');
            }
            buffer.extend_from_slice(b"{\"Key\":");
            serde_json::to_writer(&mut buffer, &kv.key)?;
            buffer.extend_from_slice(b",\"Record\":");
            buffer.extend_from_slice(&kv.value);
            buffer.push(b'}');
            count += 1;
        }
        buffer.push(b']');
        iter.close().map_err(into_read_error)?;

        tracing::debug!(count, "queried all records");
        Ok(buffer)
    }

    /// Replace the `status` of the record under `key`.
    ///
    /// A missing, unreadable, or undecodable value is treated as an empty
    /// record, so the result always carries the new status.
    pub fn update_status(&mut self, key: &str, status: &str) -> Result<()> {
        let current = self.query_record(key);
        let record = if current.is_empty() {
            Record::default()
        } else {
            Record::from_bytes(&current).unwrap_or_else(|err| {
                tracing::warn!(key, error = %err, "stored record undecodable, starting empty");
                Record::default()
            })
        };
        let record = record.with_status(status);
        self.store.put(key, &record.to_bytes()?)?;
        tracing::debug!(key, status, "updated status");
        Ok(())
    }
}

/// Require exactly `N` arguments; `quoted` is the count named in the error.
fn expect_args<const N: usize>(args: &[String], quoted: usize) -> Result<[&str; N]> {
    if args.len() != N {
        return Err(LedgerError::ArgumentCount { expected: quoted });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn into_read_error(err: LedgerError) -> LedgerError {
    match err {
        LedgerError::StoreRead(_) => err,
        other => LedgerError::StoreRead(other.to_string()),
    }
}
