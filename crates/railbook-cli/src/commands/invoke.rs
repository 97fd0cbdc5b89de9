use std::io::Write;

use railbook_core::Operation;

use crate::app::AppContext;
use crate::cli::InvokeArgs;
use crate::errors::CliError;
use crate::output::payload_json;

/// Run an operation by name and print its raw payload.
pub fn handle_invoke(ctx: &AppContext, args: &InvokeArgs) -> anyhow::Result<()> {
    let op: Operation = args.function.parse().map_err(CliError::from)?;
    let mut service = ctx.open_service()?;
    let payload = service.dispatch(op, &args.args).map_err(CliError::from)?;

    if payload.is_empty() {
        return Ok(());
    }
    if ctx.ui().mode.is_json() {
        println!("{}", payload_json(&payload));
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&payload)?;
        writeln!(stdout)?;
    }
    Ok(())
}
