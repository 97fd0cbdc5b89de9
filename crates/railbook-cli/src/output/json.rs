//! JSON output formatting for records.

use railbook_core::Record;

/// Convert a keyed record to JSON for output.
pub fn record_json(key: &str, record: &Record) -> serde_json::Value {
    serde_json::json!({
        "Key": key,
        "Record": record,
    })
}

/// Pretty-print an operation payload if it is JSON, otherwise return it as text.
pub fn payload_json(payload: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(payload).into_owned()),
        Err(_) => String::from_utf8_lossy(payload).into_owned(),
    }
}
