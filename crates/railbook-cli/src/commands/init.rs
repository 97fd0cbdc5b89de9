use std::path::PathBuf;

use railbook_core::service::seed_records;
use railbook_core::{RecordService, Response, SqliteStore};

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, RailbookConfig};
use crate::errors::CliError;
use crate::ui::receipt;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = ctx.config_path()?.clone();
    if config_path.exists() && !args.force {
        return Err(CliError::InvalidInput(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let store_path = match args
        .path
        .as_deref()
        .or(ctx.cli().store.as_deref())
        .filter(|p| !p.trim().is_empty())
    {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };

    let store = SqliteStore::open(&store_path).map_err(CliError::from)?;
    let mut service = RecordService::new(store);
    if let Response::Error(message) = service.init() {
        return Err(CliError::StoreFailed(message).into());
    }

    let seeded = if args.seed {
        service.seed_ledger().map_err(CliError::from)?;
        seed_records().len()
    } else {
        0
    };

    write_config(&config_path, &RailbookConfig::new(&store_path))?;
    tracing::info!(
        config = %config_path.display(),
        store = %store_path.display(),
        "initialized"
    );

    if ctx.ui().mode.is_json() {
        let output = serde_json::json!({
            "config": config_path,
            "store": store_path,
            "seeded": seeded,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet() {
        let config_display = config_path.display().to_string();
        let store_display = store_path.display().to_string();
        let seeded_display = seeded.to_string();
        println!(
            "{}",
            receipt(
                ctx.ui(),
                "Store initialized",
                &[
                    ("Config", config_display.as_str()),
                    ("Store", store_display.as_str()),
                    ("Seeded", seeded_display.as_str()),
                ],
            )
        );
    }
    Ok(())
}
