use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::{Cli, CompletionsArgs, ExportArgs};
use crate::commands::records::print_receipt;
use crate::errors::CliError;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let payload = service.query_all_records().map_err(CliError::from)?;
    let count = serde_json::from_slice::<Vec<serde_json::Value>>(&payload)
        .map(|items| items.len().to_string())
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "exported payload is not a JSON array");
            "unknown".to_string()
        });

    let destination = Path::new(&args.destination);
    railbook_core::fs::write_atomic(destination, &payload).map_err(|e| {
        CliError::StoreFailed(format!(
            "Export to {} failed: {}",
            destination.display(),
            e
        ))
    })?;

    print_receipt(
        ctx,
        "Exported records",
        &[
            ("Records", count.as_str()),
            ("Destination", args.destination.as_str()),
        ],
    )
}

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    service
        .store()
        .check_integrity()
        .map_err(|e| CliError::StoreFailed(e.to_string()))?;

    print_receipt(ctx, "Store integrity verified", &[])
}

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "railbook", &mut std::io::stdout());
    Ok(())
}
