//! Application-level utilities for the Railbook CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - A per-invocation context that opens the store on demand

mod context;
mod resolver;

pub use context::AppContext;
