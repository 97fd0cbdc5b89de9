//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying records
//! as JSON or as human-readable text.

mod json;
mod text;

pub use json::{payload_json, record_json};
pub use text::{print_record, print_record_list, ListEntry};
