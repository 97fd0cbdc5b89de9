//! Key-value store abstraction and bundled backends.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{KeyValue, KeyValueStore, ScopedIterator, StateIterator};
