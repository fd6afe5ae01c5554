//! Doc-info and chart descriptor inputs.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::{json_kind, DocumentError};

/// Free-form project metadata exposed to the template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocInfo {
    fields: Map<String, Value>,
}

impl DocInfo {
    /// Decode YAML or JSON doc info. An empty stream yields empty doc info.
    pub fn from_slice(data: &[u8]) -> Result<Self, DocumentError> {
        let Some(document) = serde_yaml::Deserializer::from_slice(data).next() else {
            return Ok(Self::default());
        };

        match Value::deserialize(document).map_err(DocumentError::DocInfo)? {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DocumentError::NotAMapping {
                kind: json_kind(&other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// `chart.valuesExample`, when present as a string.
    pub fn values_example(&self) -> Option<&str> {
        self.fields.get("chart")?.get("valuesExample")?.as_str()
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// The two fields of `Chart.yaml` the document uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChartInfo {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub version: String,
}

impl ChartInfo {
    pub fn from_slice(data: &[u8]) -> Result<Self, DocumentError> {
        let Some(document) = serde_yaml::Deserializer::from_slice(data).next() else {
            return Ok(Self::default());
        };

        let chart = Option::<ChartInfo>::deserialize(document).map_err(DocumentError::Chart)?;
        Ok(chart.unwrap_or_default())
    }
}

/// Accept unquoted numeric or boolean scalars (`version: 1.0`) as text.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        _ => Err(serde::de::Error::custom("expected a scalar")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_info_yaml() {
        let yaml = r#"
project:
  name: KubeDB Operator
  description: Run production-grade databases on Kubernetes
repository:
  url: https://charts.appscode.com/stable/
  name: appscode
chart:
  valuesExample: "-- generate from values file --"
prerequisites:
  - Kubernetes 1.21+
"#;
        let doc = DocInfo::from_slice(yaml.as_bytes()).unwrap();

        assert_eq!(doc.get("project").unwrap()["name"], "KubeDB Operator");
        assert_eq!(doc.values_example(), Some("-- generate from values file --"));
        assert_eq!(doc.get("prerequisites").unwrap()[0], "Kubernetes 1.21+");
    }

    #[test]
    fn test_doc_info_json() {
        let doc = DocInfo::from_slice(br#"{"release":{"name":"kubedb","namespace":"kubedb"}}"#).unwrap();
        assert_eq!(doc.get("release").unwrap()["namespace"], "kubedb");
        assert_eq!(doc.values_example(), None);
    }

    #[test]
    fn test_doc_info_empty() {
        assert_eq!(DocInfo::from_slice(b"").unwrap(), DocInfo::default());
        assert_eq!(DocInfo::from_slice(b"# nothing yet\n").unwrap(), DocInfo::default());
    }

    #[test]
    fn test_doc_info_rejects_sequence_root() {
        let err = DocInfo::from_slice(b"- a\n- b\n").unwrap_err();
        assert!(matches!(err, DocumentError::NotAMapping { kind: "sequence" }));
    }

    #[test]
    fn test_doc_info_rejects_malformed() {
        let err = DocInfo::from_slice(b"project: {name: [\n").unwrap_err();
        assert!(matches!(err, DocumentError::DocInfo(_)));
    }

    #[test]
    fn test_chart_info() {
        let yaml = r#"
apiVersion: v2
name: kubedb
description: KubeDB by AppsCode
type: application
version: v2024.1.31
appVersion: v2024.1.31
"#;
        let chart = ChartInfo::from_slice(yaml.as_bytes()).unwrap();
        assert_eq!(chart.name, "kubedb");
        assert_eq!(chart.version, "v2024.1.31");
    }

    #[test]
    fn test_chart_info_numeric_version_and_missing_fields() {
        let chart = ChartInfo::from_slice(b"version: 1.5\n").unwrap();
        assert_eq!(chart.name, "");
        assert_eq!(chart.version, "1.5");

        assert_eq!(ChartInfo::from_slice(b"").unwrap(), ChartInfo::default());
    }
}
