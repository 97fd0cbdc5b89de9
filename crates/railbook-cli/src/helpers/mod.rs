//! Input helpers for the CLI.
//!
//! This module provides validation for record keys and record fields
//! (`validation`).

mod validation;

pub use validation::{require_fields, validate_record_key};
