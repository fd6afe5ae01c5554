use serde_json::{Map, Value};

use super::{json_kind, ChartInfo, DocInfo, DocumentError};

/// Template context: doc info with the `chart` section filled in.
pub fn build_context(
    doc: DocInfo,
    chart: &ChartInfo,
    values_table: String,
    values_example: Option<String>,
) -> Result<Value, DocumentError> {
    let mut fields = doc.into_fields();

    let section = fields
        .entry("chart")
        .or_insert_with(|| Value::Object(Map::new()));
    if section.is_null() {
        *section = Value::Object(Map::new());
    }
    let kind = json_kind(section);
    let Some(section) = section.as_object_mut() else {
        return Err(DocumentError::ChartSection { kind });
    };

    section.insert("name".to_string(), Value::String(chart.name.clone()));
    section.insert("version".to_string(), Value::String(chart.version.clone()));
    section.insert("values".to_string(), Value::String(values_table));
    section.insert(
        "valuesExample".to_string(),
        Value::String(values_example.unwrap_or_default()),
    );

    Ok(Value::Object(fields))
}
