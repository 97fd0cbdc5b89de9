//! # Railbook Core
//!
//! Core library for Railbook - a minimal ledger-record manager for
//! train-booking entries.
//!
//! This crate provides the record model, the key-value store capability the
//! ledger runs on, and the `RecordService` dispatcher, independent of any
//! host or CLI.
//!
//! ## Architecture
//!
//! - **record**: Booking record and its JSON wire format
//! - **store**: `KeyValueStore` trait, in-memory and SQLite backends
//! - **service**: Operation dispatch (`queryRecord`, `seedLedger`,
//!   `createRecord`, `queryAllRecords`, `updateStatus`)
//! - **response**: Success/error envelope returned to the host
//! - **fs**: Atomic file writes for exports

pub mod error;
pub mod fs;
pub mod record;
pub mod response;
pub mod service;
pub mod store;

pub use error::{LedgerError, Result};
pub use record::{QueryResult, Record};
pub use response::Response;
pub use service::{Operation, RecordService};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
