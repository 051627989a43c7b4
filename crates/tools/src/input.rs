//! Shared argument parsing for the fax tools.

use proto::ToolOutcome;
use serde::de::DeserializeOwned;

/// Message returned when the argument payload cannot be parsed.
pub(crate) const INVALID_JSON_MSG: &str =
    "Error: Invalid JSON input. Please provide a valid JSON object.";

/// Parses tool arguments into the expected shape.
///
/// Agents sometimes pass the argument object as an embedded JSON string;
/// a string payload is parsed as JSON first. Any parse or shape failure
/// becomes the invalid-input validation outcome.
pub(crate) fn parse_args<T: DeserializeOwned>(
    args: serde_json::Value,
) -> Result<T, ToolOutcome> {
    let value = match args {
        serde_json::Value::String(raw) => {
            serde_json::from_str(&raw).map_err(|_| ToolOutcome::validation(INVALID_JSON_MSG))?
        }
        other => other,
    };
    serde_json::from_value(value).map_err(|_| ToolOutcome::validation(INVALID_JSON_MSG))
}

/// Returns the field value when it is present and non-empty.
///
/// Absent, `null`, and `""` all count as missing, matching the remote
/// service's treatment of blank fields.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
