//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for payloads and JSON output.
//! Filter precedence: `RAILBOOK_LOG`, then `-v` flags, then the config
//! file's `[log] level`, then `warn`.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Pick the filter directive to use.
pub fn filter_directive(
    env_value: Option<&str>,
    verbosity: u8,
    config_level: Option<&str>,
) -> String {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return value.to_string();
    }
    match verbosity {
        0 => config_level
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("warn")
            .to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_tracing(verbosity: u8, config_level: Option<&str>) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), verbosity, config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
