//! Final document assembly.
//!
//! The doc-info file is free-form: its top-level keys are exposed to the
//! template as-is. The `chart` section is then filled in from the chart
//! descriptor (`name`, `version`), the rendered parameter table (`values`) and
//! the derived example (`valuesExample`).

mod context;
mod info;

pub use context::build_context;
pub use info::{ChartInfo, DocInfo};

use crate::error::DocGenResult;
use crate::example;
use crate::parameters::ParameterList;
use crate::table;
use crate::template_engine::DocumentTemplate;

/// Render the parameter table, derive the example and render `template`.
pub fn render_document(
    doc: DocInfo,
    chart: &ChartInfo,
    parameters: &ParameterList,
    template: &DocumentTemplate,
    extra_boring: &[String],
) -> DocGenResult<String> {
    let values_table = table::render_table(parameters);
    let values_example = example::derive_example(doc.values_example(), parameters, extra_boring);
    tracing::debug!(
        parameters = parameters.len(),
        example = values_example.as_deref().unwrap_or_default(),
        "Rendering document"
    );

    let context = build_context(doc, chart, values_table, values_example)?;
    Ok(template.render(&context)?)
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to decode doc info: {0}")]
    DocInfo(#[source] serde_yaml::Error),
    #[error("failed to decode chart descriptor: {0}")]
    Chart(#[source] serde_yaml::Error),
    #[error("doc info must be a mapping, got {kind}")]
    NotAMapping { kind: &'static str },
    #[error("doc info `chart` section must be a mapping, got {kind}")]
    ChartSection { kind: &'static str },
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::Parameter;
    use crate::template_engine::TemplateSource;

    fn template(contents: &str) -> DocumentTemplate {
        DocumentTemplate::parse(&TemplateSource::File {
            path: "test.tera".into(),
            contents: contents.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_render_document_fills_chart_section() {
        let doc = DocInfo::from_slice(b"project:\n  name: Demo Operator\n").unwrap();
        let chart = ChartInfo::from_slice(b"name: demo\nversion: 0.3.0\n").unwrap();
        let params: ParameterList = [Parameter::new("image.tag", "", "v1")].into_iter().collect();

        let rendered = render_document(
            doc,
            &chart,
            &params,
            &template("{{ project.name }}|{{ chart.name }}|{{ chart.version }}|{{ chart.valuesExample }}"),
            &[],
        )
        .unwrap();

        assert_eq!(rendered, "Demo Operator|demo|0.3.0|image.tag=v1");
    }

    #[test]
    fn test_supplied_example_survives() {
        let doc = DocInfo::from_slice(b"chart:\n  valuesExample: replicaCount=3\n").unwrap();
        let params: ParameterList = [Parameter::new("image.tag", "", "v1")].into_iter().collect();

        let rendered = render_document(
            doc,
            &ChartInfo::default(),
            &params,
            &template("{{ chart.valuesExample }}"),
            &[],
        )
        .unwrap();

        assert_eq!(rendered, "replicaCount=3");
    }

    #[test]
    fn test_table_is_exposed_as_chart_values() {
        let params: ParameterList = [Parameter::new("a", "", "x|y")].into_iter().collect();

        let rendered = render_document(
            DocInfo::default(),
            &ChartInfo::default(),
            &params,
            &template("{{ chart.values }}"),
            &[],
        )
        .unwrap();

        assert!(rendered.contains("| a         |             | <code>x&#124;y</code> |"));
    }
}
