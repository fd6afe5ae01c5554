//! The generate pipeline: read inputs, flatten, merge, render.

use std::path::{Path, PathBuf};

use chart_doc_tooling::document::{self, ChartInfo, DocInfo};
use chart_doc_tooling::template_engine::{DocumentTemplate, DEFAULT_TEMPLATE_FILE};
use chart_doc_tooling::{schema, values, DocGenError, DocGenResult};
use clap::Args;

use crate::cli_config::CliConfig;

const CHART_FILENAME: &str = "Chart.yaml";

/// Inputs of one generation run.
#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArgs {
    /// Path to a project's doc.{json|yaml} info file
    #[arg(short = 'd', long = "doc", value_name = "FILE")]
    pub doc: PathBuf,

    /// Path to Chart.yaml file (default: Chart.yaml next to the values file)
    #[arg(short = 'c', long = "chart", value_name = "FILE")]
    pub chart: Option<PathBuf>,

    /// Path to chart values file
    #[arg(short = 'v', long = "values", value_name = "FILE")]
    pub values: PathBuf,

    /// Path to values JSON Schema file
    #[arg(short = 's', long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Path to a doc template file (falls back to the built-in README template when missing)
    #[arg(short = 't', long = "template", value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl GenerateArgs {
    /// Directory holding the values file; empty when it is the working directory.
    pub(crate) fn chart_dir(&self) -> &Path {
        self.values.parent().unwrap_or_else(|| Path::new(""))
    }

    pub(crate) fn chart_path(&self) -> PathBuf {
        match &self.chart {
            Some(path) => path.clone(),
            None => self.chart_dir().join(CHART_FILENAME),
        }
    }

    /// `--template`, then the configured template, then the conventional filename.
    pub(crate) fn template_path(&self, config: &CliConfig) -> PathBuf {
        if let Some(path) = &self.template {
            return path.clone();
        }
        config
            .template_path()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE))
    }
}

/// Run the whole pipeline and return the rendered document.
pub(crate) fn generate(args: &GenerateArgs, config: &CliConfig) -> DocGenResult<String> {
    let doc = DocInfo::from_slice(&read(&args.doc)?)?;

    let mut parameters = values::load_from_values(&read(&args.values)?)?;
    if let Some(schema_path) = &args.schema {
        let schema_parameters = schema::load_from_json_schema(&read(schema_path)?)?;
        // Values-derived entries win over schema-derived ones.
        parameters = schema_parameters.merge(&parameters);
    }
    tracing::debug!(count = parameters.len(), "Collected parameters");

    let chart = ChartInfo::from_slice(&read(&args.chart_path())?)?;
    let template = DocumentTemplate::load(&args.template_path(config))?;

    document::render_document(
        doc,
        &chart,
        &parameters,
        &template,
        &config.example_skip_defaults,
    )
}

fn read(path: &Path) -> DocGenResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| DocGenError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &str) -> GenerateArgs {
        GenerateArgs {
            doc: PathBuf::from("doc.yaml"),
            chart: None,
            values: PathBuf::from(values),
            schema: None,
            template: None,
        }
    }

    #[test]
    fn test_chart_path_defaults_next_to_values() {
        assert_eq!(
            args("charts/kubedb/values.yaml").chart_path(),
            PathBuf::from("charts/kubedb/Chart.yaml")
        );
        assert_eq!(args("values.yaml").chart_path(), PathBuf::from("Chart.yaml"));
    }

    #[test]
    fn test_explicit_chart_path_wins() {
        let mut a = args("charts/kubedb/values.yaml");
        a.chart = Some(PathBuf::from("other/Chart.yaml"));
        assert_eq!(a.chart_path(), PathBuf::from("other/Chart.yaml"));
    }

    #[test]
    fn test_template_path_precedence() {
        let config = CliConfig {
            template: Some("hack/readme.tera".to_string()),
            ..CliConfig::default()
        };

        let mut a = args("values.yaml");
        assert_eq!(a.template_path(&CliConfig::default()), PathBuf::from(DEFAULT_TEMPLATE_FILE));
        assert_eq!(a.template_path(&config), PathBuf::from("hack/readme.tera"));

        let chart_config = CliConfig {
            source_dir: Some(PathBuf::from("charts/kubedb")),
            ..config.clone()
        };
        assert_eq!(
            a.template_path(&chart_config),
            PathBuf::from("charts/kubedb/hack/readme.tera")
        );

        a.template = Some(PathBuf::from("README.tera"));
        assert_eq!(a.template_path(&config), PathBuf::from("README.tera"));
    }

    #[test]
    fn test_missing_doc_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path().join("values.yaml").to_str().unwrap());
        a.doc = dir.path().join("doc.yaml");

        let err = generate(&a, &CliConfig::default()).unwrap_err();
        match err {
            DocGenError::Io { path, .. } => assert_eq!(path, dir.path().join("doc.yaml")),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
