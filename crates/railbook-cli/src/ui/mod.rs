//! UI primitives for the Railbook CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, receipts, hints, key-value lines

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, hint, kv, print_error, receipt, simple_table, Column};
