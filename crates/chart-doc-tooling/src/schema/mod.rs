//! JSON Schema flattening.
//!
//! Converts a values JSON Schema into the same flat [`ParameterList`] the
//! values flattener produces. Object `properties` are walked recursively and
//! every node without properties or `$ref` becomes one parameter, carrying the
//! node's `description` and its declared `default`.
//!
//! `$ref` is resolved with the same registry `jsonschema` compiles against, so
//! nested `$id` scopes, anchors and relative references behave identically in
//! both. Chains of references are followed; a reference that re-enters itself
//! on the current path is reported as [`SchemaError::CyclicReference`].

mod reference;
mod walker;

use serde_json::Value;

use crate::parameters::ParameterList;
use reference::SchemaDocument;
use walker::SchemaWalker;

/// Decode, compile and flatten a values JSON Schema.
///
/// Input consisting only of whitespace yields an empty list.
pub fn load_from_json_schema(data: &[u8]) -> Result<ParameterList, SchemaError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(ParameterList::new());
    }

    let schema: Value = serde_json::from_slice(data)?;
    compile(&schema)?;
    flatten(&schema)
}

/// Check that `schema` is a valid JSON Schema whose references resolve.
pub fn compile(schema: &Value) -> Result<(), SchemaError> {
    jsonschema::options()
        .build(schema)
        .map(|_| ())
        .map_err(|err| SchemaError::Compile(err.to_string()))
}

/// Flatten an already-compiled schema document.
pub fn flatten(schema: &Value) -> Result<ParameterList, SchemaError> {
    let document = SchemaDocument::new(schema)?;
    let (root, resolver) = document.root()?;

    let mut walker = SchemaWalker::new(&document);
    walker.walk(root, "", &resolver)?;
    let parameters = walker.into_parameters();

    tracing::debug!(count = parameters.len(), "Flattened values schema");
    Ok(parameters)
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to decode JSON schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid JSON schema: {0}")]
    Compile(String),
    #[error("cannot resolve schema reference '{reference}': {source}")]
    UnresolvedReference {
        reference: String,
        source: referencing::Error,
    },
    #[error("cyclic schema reference: {chain}")]
    CyclicReference { chain: String },
}
