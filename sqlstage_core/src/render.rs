//! Tab-separated rendering of JSON row sets.

use serde_json::Value as JsonValue;

/// Formats a SELECT result as a tab-separated table. Column order
/// follows the first row's key order; the header line is all that
/// remains when there are no rows.
pub fn format_rows(rows: &[JsonValue]) -> String {
    let Some(JsonValue::Object(first)) = rows.first() else {
        return String::new();
    };
    let header = first
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\t");

    let row_lines = rows
        .iter()
        .map(|row| {
            first
                .keys()
                .map(|name| cell_to_string(row.get(name).unwrap_or(&JsonValue::Null)))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, row_lines)
}

fn cell_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "NULL".to_string(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
