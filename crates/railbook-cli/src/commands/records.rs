use railbook_core::service::seed_records;
use railbook_core::Record;

use crate::app::AppContext;
use crate::cli::{CreateArgs, ShowArgs, StatusArgs};
use crate::errors::CliError;
use crate::helpers::{require_fields, validate_record_key};
use crate::output::{payload_json, print_record, print_record_list, record_json, ListEntry};
use crate::ui::{hint, receipt};

pub fn handle_seed(ctx: &AppContext) -> anyhow::Result<()> {
    let mut service = ctx.open_service()?;
    service.seed_ledger().map_err(CliError::from)?;

    let count = seed_records().len().to_string();
    print_receipt(ctx, "Seeded demo records", &[("Records", count.as_str())])
}

pub fn handle_create(ctx: &AppContext, args: &CreateArgs) -> anyhow::Result<()> {
    validate_record_key(&args.key)?;
    require_fields(&[
        ("Name", args.name.as_str()),
        ("Category", args.category.as_str()),
        ("Route", args.route.as_str()),
        ("Tier", args.tier.as_str()),
        ("Status", args.status.as_str()),
    ])?;

    let mut service = ctx.open_service()?;
    let record = Record::new(
        args.name.as_str(),
        args.category.as_str(),
        args.route.as_str(),
        args.tier.as_str(),
        args.status.as_str(),
    );
    service
        .create_record(&args.key, &record)
        .map_err(CliError::from)?;

    print_receipt(ctx, "Record saved", &[("Key", args.key.as_str())])
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let payload = service.query_record(&args.key);
    if payload.is_empty() {
        return Err(CliError::not_found(
            format!("Record not found: {}", args.key),
            "Hint: Run `railbook list` to see record keys.",
        )
        .into());
    }

    match Record::from_bytes(&payload) {
        Ok(record) if ctx.ui().mode.is_json() => {
            println!(
                "{}",
                serde_json::to_string_pretty(&record_json(&args.key, &record))?
            );
        }
        Ok(record) => print_record(ctx.ui(), &args.key, &record, ctx.quiet()),
        Err(err) => {
            tracing::warn!(key = %args.key, error = %err, "stored value is not a record");
            println!("{}", payload_json(&payload));
        }
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let payload = service.query_all_records().map_err(CliError::from)?;

    if ctx.ui().mode.is_json() {
        println!("{}", payload_json(&payload));
        return Ok(());
    }

    let elements: Vec<serde_json::Value> = serde_json::from_slice(&payload).map_err(|e| {
        CliError::StoreFailed(format!("Stored records are not valid JSON: {}", e))
    })?;
    if elements.is_empty() {
        if !ctx.quiet() {
            println!("No records found.");
            println!("{}", hint(ctx.ui(), "Run `railbook seed` to add demo records."));
        }
        return Ok(());
    }
    let entries: Vec<ListEntry> = elements.iter().map(ListEntry::from_value).collect();
    print_record_list(ctx.ui(), &entries, ctx.quiet());
    Ok(())
}

pub fn handle_status(ctx: &AppContext, args: &StatusArgs) -> anyhow::Result<()> {
    let mut service = ctx.open_service()?;
    service
        .update_status(&args.key, &args.status)
        .map_err(CliError::from)?;

    print_receipt(
        ctx,
        "Status updated",
        &[("Key", args.key.as_str()), ("Status", args.status.as_str())],
    )
}

/// Print a receipt, or a JSON object of the same items in JSON mode.
pub(crate) fn print_receipt(
    ctx: &AppContext,
    title: &str,
    items: &[(&str, &str)],
) -> anyhow::Result<()> {
    if ctx.ui().mode.is_json() {
        let map: serde_json::Map<String, serde_json::Value> = items
            .iter()
            .map(|(key, value)| (key.to_lowercase(), serde_json::Value::from(*value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else if !ctx.quiet() {
        println!("{}", receipt(ctx.ui(), title, items));
    }
    Ok(())
}
