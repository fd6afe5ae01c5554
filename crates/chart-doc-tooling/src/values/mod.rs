//! Values document flattening.
//!
//! Walks a decoded values document and emits one [`Parameter`] per leaf, keyed
//! by the dot-joined path of mapping keys from the root. Sequences are leaves;
//! they are never expanded into indexed paths. An empty mapping is a leaf too,
//! rendered as `{}`.

mod leaf;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::parameters::{Parameter, ParameterList};

pub(crate) use leaf::value_kind;

/// Decode a values document (YAML or JSON) and flatten it.
///
/// Only the first document of a multi-document stream is used. A stream with
/// no document at all yields an empty list. `<<` merge keys are expanded
/// before flattening.
pub fn load_from_values(data: &[u8]) -> Result<ParameterList, ValuesError> {
    let Some(document) = serde_yaml::Deserializer::from_slice(data).next() else {
        return Ok(ParameterList::new());
    };
    let mut root = Value::deserialize(document)?;
    root.apply_merge()?;
    flatten(&root)
}

/// Flatten an already-decoded values document.
pub fn flatten(root: &Value) -> Result<ParameterList, ValuesError> {
    let mut parameters = ParameterList::new();
    match root {
        Value::Null => {}
        Value::Mapping(mapping) => walk(mapping, "", &mut parameters)?,
        other => {
            return Err(ValuesError::NotAMapping {
                kind: value_kind(other),
            })
        }
    }

    tracing::debug!(count = parameters.len(), "Flattened values document");
    Ok(parameters)
}

fn walk(mapping: &Mapping, prefix: &str, parameters: &mut ParameterList) -> Result<(), ValuesError> {
    for (key, value) in mapping {
        let key = key_text(key, prefix)?;
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Mapping(nested) if !nested.is_empty() => walk(nested, &path, parameters)?,
            leaf => {
                let default = leaf::render(leaf).map_err(|source| ValuesError::Render {
                    path: path.clone(),
                    source,
                })?;
                if let Some(previous) = parameters.insert(Parameter::new(path, "", default)) {
                    tracing::warn!(
                        parameter = %previous.name,
                        "Duplicate parameter path in values document, keeping the last one"
                    );
                }
            }
        }
    }
    Ok(())
}

fn key_text(key: &Value, parent: &str) -> Result<String, ValuesError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(ValuesError::UnsupportedKey {
            parent: parent.to_string(),
            kind: value_kind(other),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValuesError {
    #[error("failed to decode values document: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("values document root must be a mapping, got {kind}")]
    NotAMapping { kind: &'static str },
    #[error("unsupported {kind} key under '{parent}'")]
    UnsupportedKey { parent: String, kind: &'static str },
    #[error("failed to render default of '{path}': {source}")]
    Render {
        path: String,
        source: serde_yaml::Error,
    },
}
