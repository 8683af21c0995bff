//! JSON Output Formatting

use serde::Serialize;

use super::MappingRow;

/// Format data as pretty JSON
pub fn format_json_pretty<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Format data as compact JSON (one line)
pub fn format_json_compact<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(data)
}

/// Format expanded mappings as JSON
pub fn format_mappings_json(
    rows: &[MappingRow],
    pretty: bool,
) -> Result<String, serde_json::Error> {
    if pretty {
        format_json_pretty(rows)
    } else {
        format_json_compact(rows)
    }
}
