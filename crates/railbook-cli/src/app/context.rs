//! Application context for the Railbook CLI.
//!
//! Bundles CLI arguments, UI settings and the lazily-loaded config so
//! command handlers take a single parameter.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use railbook_core::{RecordService, SqliteStore};

use crate::cli::Cli;
use crate::config::{read_config, RailbookConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{missing_store_message, resolve_config_path, resolve_store_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    ui: UiContext,
    config_path: OnceCell<PathBuf>,
    config: OnceCell<Option<RailbookConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            ui: UiContext::from_env(cli.json, cli.no_color),
            config_path: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolved config file path.
    pub fn config_path(&self) -> anyhow::Result<&PathBuf> {
        self.config_path.get_or_try_init(resolve_config_path)
    }

    /// Parsed config, or `None` if the file does not exist.
    pub fn config(&self) -> anyhow::Result<Option<&RailbookConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            if path.exists() {
                read_config(path).map(Some)
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    /// Store path from `--store`, RAILBOOK_STORE, or the config file.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        let config = self.config()?;
        resolve_store_path(self.cli, config, self.config_path()?)
    }

    /// Open the existing store and wrap it in a record service.
    pub fn open_service(&self) -> anyhow::Result<RecordService<SqliteStore>> {
        let path = self.store_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_store_message(&path),
                "Hint: Run `railbook init` to create it.",
            )
            .into());
        }
        let store = SqliteStore::open(&path).map_err(CliError::from)?;
        tracing::debug!(path = %path.display(), "store opened");
        Ok(RecordService::new(store))
    }
}
