//! Rendering heterogeneous argument lists into display strings.

use serde_json::Value;

/// Renders one value for inclusion in a log line.
///
/// Strings pass through verbatim; every other value is deep-stringified to
/// compact JSON (nested objects and arrays included). Total over any
/// [`Value`]: never panics, never errors.
#[must_use]
pub fn inspect(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Joins a heterogeneous argument list into a single display string.
///
/// Each argument renders per [`inspect`]; results are joined with a single
/// space, preserving argument order. Deterministic and side-effect free.
#[must_use]
pub fn format_values(values: &[Value]) -> String {
    values.iter().map(inspect).collect::<Vec<_>>().join(" ")
}
