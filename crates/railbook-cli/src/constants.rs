//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store, record).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (arity, unknown operation).
    pub const INVALID_INPUT: i32 = 4;

    /// The key-value store failed a read, write or integrity check.
    pub const STORE_FAILED: i32 = 5;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "RAILBOOK_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "RAILBOOK_LOG";
