//! Validation for `railbook create` input.
//!
//! `invoke createRecord` stays raw; these checks only guard the friendly
//! `create` command so every record it writes shows up in `list`.

use railbook_core::service::{RANGE_END, RANGE_START, SEED_KEY_PREFIX};

use crate::errors::CliError;

/// Longest numeric suffix accepted after the key prefix.
const MAX_KEY_DIGITS: usize = 3;

/// Require a key of the form `REC<n>` that falls inside the listed range.
pub fn validate_record_key(key: &str) -> Result<(), CliError> {
    let digits = key.strip_prefix(SEED_KEY_PREFIX).unwrap_or("");
    let well_formed = key.starts_with(SEED_KEY_PREFIX)
        && (1..=MAX_KEY_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit());

    if !well_formed || key < RANGE_START || key >= RANGE_END {
        return Err(CliError::InvalidInput(format!(
            "Invalid record key: {}\nHint: Keys are {}0 through {}998 so they appear in `railbook list`.",
            key, SEED_KEY_PREFIX, SEED_KEY_PREFIX
        )));
    }
    Ok(())
}

/// Require every named field to contain non-whitespace text.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), CliError> {
    let blank: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if blank.is_empty() {
        return Ok(());
    }
    Err(CliError::InvalidInput(format!(
        "Empty field(s): {}\nHint: All record fields must be filled in.",
        blank.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_listable_keys() {
        for key in ["REC0", "REC7", "REC10", "REC05", "REC998"] {
            assert!(validate_record_key(key).is_ok(), "{}", key);
        }
    }

    #[test]
    fn test_rejects_keys_outside_list_range() {
        for key in ["FOO", "REC", "REC999", "REC1000", "REC1a", "rec1", "TRAIN1", " REC1"] {
            let err = validate_record_key(key).unwrap_err();
            assert_eq!(
                err.exit_code(),
                crate::constants::exit_codes::INVALID_INPUT,
                "{}",
                key
            );
        }
    }

    #[test]
    fn test_key_error_carries_hint() {
        let err = validate_record_key("FOO").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid record key: FOO\nHint:"));
    }

    #[test]
    fn test_require_fields_names_blank_fields() {
        assert!(require_fields(&[("Name", "Asha"), ("Status", "RAC")]).is_ok());

        let err = require_fields(&[("Name", " "), ("Route", "A-B"), ("Status", "")]).unwrap_err();
        assert!(err.to_string().starts_with("Empty field(s): Name, Status\n"));
    }
}
