//! Textual rendering of values-document leaves.

use serde_yaml::Value;

/// Render a leaf the way it reads in the values file.
pub(super) fn render(value: &Value) -> Result<String, serde_yaml::Error> {
    let text = match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.is_empty() => "\"\"".to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) if items.is_empty() => "[]".to_string(),
        Value::Mapping(entries) if entries.is_empty() => "{}".to_string(),
        // Non-empty sequences, tagged values and anything else keep their
        // block YAML form; the table renderer escapes the newlines.
        other => serde_yaml::to_string(other)?.trim_end().to_string(),
    };
    Ok(text)
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
