//! Railbook CLI - a minimal ledger of train-booking records
//!
//! This is the command-line interface for Railbook. It opens the configured
//! store and routes each subcommand to the core record service.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{init, invoke, maintenance, records};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    // A broken config surfaces later from the command itself.
    let config_level = ctx
        .config()
        .ok()
        .flatten()
        .and_then(|config| config.log.level.clone());
    logging::init_tracing(cli.verbose, config_level.as_deref());

    if let Err(e) = run(&ctx, &cli) {
        let error_msg = e.to_string();
        let (message, hint) = split_hint(&error_msg);
        tracing::debug!(error = ?e, "command failed");
        print_error(ctx.ui(), message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(&error[idx + 1..])),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => init::handle_init(ctx, args),
        Commands::Invoke(args) => invoke::handle_invoke(ctx, args),
        Commands::Seed => records::handle_seed(ctx),
        Commands::Create(args) => records::handle_create(ctx, args),
        Commands::Show(args) => records::handle_show(ctx, args),
        Commands::List => records::handle_list(ctx),
        Commands::Status(args) => records::handle_status(ctx, args),
        Commands::Export(args) => maintenance::handle_export(ctx, args),
        Commands::Check => maintenance::handle_check(ctx),
        Commands::Completions(args) => maintenance::handle_completions(args),
    }
}
