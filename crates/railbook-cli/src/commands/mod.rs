//! Command handlers, one module per command group.

pub mod init;
pub mod invoke;
pub mod maintenance;
pub mod records;
