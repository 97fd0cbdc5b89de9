//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use railbook_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, record)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Store read/write/integrity failure
    StoreFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::StoreFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<LedgerError> for CliError {
    fn from(err: LedgerError) -> Self {
        if err.is_invalid_input() {
            CliError::InvalidInput(err.to_string())
        } else {
            CliError::StoreFailed(err.to_string())
        }
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::StoreFailed(_) => exit_codes::STORE_FAILED,
        }
    }
}

/// Exit code for an arbitrary command error.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(ledger_err) = err.downcast_ref::<LedgerError>() {
        if ledger_err.is_invalid_input() {
            return exit_codes::INVALID_INPUT;
        }
        if ledger_err.is_store_failure() {
            return exit_codes::STORE_FAILED;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_errors_map_to_exit_codes() {
        let arity: CliError = LedgerError::ArgumentCount { expected: 2 }.into();
        assert_eq!(arity.exit_code(), exit_codes::INVALID_INPUT);

        let store: CliError = LedgerError::StoreWrite("full".to_string()).into();
        assert_eq!(store.exit_code(), exit_codes::STORE_FAILED);
    }

    #[test]
    fn test_exit_code_for_anyhow() {
        let err = anyhow::Error::new(LedgerError::UnknownOperation("x".to_string()));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::Error::new(CliError::not_found("Record not found", "Hint: x"));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("No store", "Hint: run init");
        assert_eq!(err.to_string(), "No store\nHint: run init");
    }
}
