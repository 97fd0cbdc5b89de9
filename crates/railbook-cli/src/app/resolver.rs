//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, RailbookConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking RAILBOOK_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store path from CLI args (or RAILBOOK_STORE) or config.
pub fn resolve_store_path(
    cli: &Cli,
    config: Option<&RailbookConfig>,
    config_path: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    match config {
        Some(config) => Ok(PathBuf::from(&config.store.path)),
        None => Err(CliError::not_found(
            missing_config_message(config_path),
            "Hint: Run `railbook init` to create one.",
        )
        .into()),
    }
}

/// Error message when the store file is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!("No store found at {}", path.display())
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No config found at {}\n\nOr specify a store path:\n  RAILBOOK_STORE=/path/to/railbook.db railbook list",
        config_path.display()
    )
}
