//! Human-readable output for records.

use railbook_core::Record;

use crate::ui::{badge, kv, simple_table, Badge, Column, UiContext};

const RECORD_COLUMNS: [Column; 6] = [
    Column::new("KEY"),
    Column::new("NAME"),
    Column::new("CATEGORY"),
    Column::new("ROUTE"),
    Column::new("TIER"),
    Column::new("STATUS"),
];

/// One listed key: a decoded record, or the stored JSON when it is not one.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Record { key: String, record: Record },
    Raw { key: String, raw: String },
}

impl ListEntry {
    /// Build an entry from one `{"Key": .., "Record": ..}` element.
    pub fn from_value(element: &serde_json::Value) -> Self {
        let key = match &element["Key"] {
            serde_json::Value::String(key) => key.clone(),
            other => other.to_string(),
        };
        let value = &element["Record"];
        match serde_json::from_value::<Record>(value.clone()) {
            Ok(record) if value.is_object() => ListEntry::Record { key, record },
            _ => ListEntry::Raw {
                key,
                raw: value.to_string(),
            },
        }
    }

    fn row(&self) -> Vec<String> {
        match self {
            ListEntry::Record { key, record } => vec![
                key.clone(),
                record.name.clone(),
                record.category.clone(),
                record.route.clone(),
                record.tier.clone(),
                record.status.clone(),
            ],
            ListEntry::Raw { key, raw } => {
                let mut row = vec![key.clone(), raw.clone()];
                row.resize(RECORD_COLUMNS.len(), String::new());
                row
            }
        }
    }
}

/// Print a single record as key-value lines.
pub fn print_record(ctx: &UiContext, key: &str, record: &Record, quiet: bool) {
    if quiet {
        println!("{}", record.status);
        return;
    }
    println!("{}", kv(ctx, "Key", key));
    println!("{}", kv(ctx, "Name", &record.name));
    println!("{}", kv(ctx, "Category", &record.category));
    println!("{}", kv(ctx, "Route", &record.route));
    println!("{}", kv(ctx, "Tier", &record.tier));
    println!("{}", kv(ctx, "Status", &record.status));
}

/// Print list entries as a table, warning on stderr about raw rows.
pub fn print_record_list(ctx: &UiContext, entries: &[ListEntry], quiet: bool) {
    let rows: Vec<Vec<String>> = entries.iter().map(ListEntry::row).collect();
    println!("{}", simple_table(ctx, &RECORD_COLUMNS, &rows));

    let raw = entries
        .iter()
        .filter(|entry| matches!(entry, ListEntry::Raw { .. }))
        .count();
    if raw > 0 && !quiet {
        eprintln!(
            "{}",
            badge(
                ctx,
                Badge::Warn,
                &format!("{} stored value(s) are not booking records; shown as raw JSON", raw)
            )
        );
    }
}
