//! `$ref` resolution through the same `referencing` registry `jsonschema`
//! compiles against.
//!
//! Every subschema is entered through [`SchemaDocument::enter`], so a nested
//! `$id` moves the base URI exactly as it does during compilation. References
//! are then looked up relative to that base.

use referencing::{uri, Draft, Registry, Resolver};
use serde_json::Value;

use super::SchemaError;

/// Base URI of a schema document that declares no `$id`.
const DEFAULT_BASE_URI: &str = "json-schema:///";

/// A schema document registered for reference lookups.
pub(super) struct SchemaDocument {
    registry: Registry,
    base_uri: String,
    draft: Draft,
}

impl SchemaDocument {
    pub(super) fn new(schema: &Value) -> Result<Self, SchemaError> {
        let draft = Draft::default().detect(schema);
        let base_uri = uri::from_str(
            draft
                .create_resource_ref(schema)
                .id()
                .unwrap_or(DEFAULT_BASE_URI),
        )
        .map_err(compile_error)?
        .as_str()
        .to_string();

        let registry = Registry::options()
            .draft(draft)
            .build([(base_uri.as_str(), draft.create_resource(schema.clone()))])
            .map_err(compile_error)?;

        Ok(Self {
            registry,
            base_uri,
            draft,
        })
    }

    /// The registered root schema and a resolver scoped to it.
    pub(super) fn root(&self) -> Result<(&Value, Resolver<'_>), SchemaError> {
        let resolver = self
            .registry
            .try_resolver(&self.base_uri)
            .map_err(compile_error)?;
        let root = resolver
            .lookup("#")
            .map_err(|source| unresolved("#", source))?
            .contents();
        Ok((root, resolver))
    }

    /// Resolver for `node`, honouring a `$id` declared on it.
    pub(super) fn enter<'r>(
        &self,
        node: &Value,
        resolver: &Resolver<'r>,
    ) -> Result<Resolver<'r>, SchemaError> {
        let resource = self.draft.detect(node).create_resource_ref(node);
        resolver.in_subresource(resource).map_err(compile_error)
    }
}

/// A reference resolved against the current base URI.
pub(super) struct Target<'r> {
    /// Absolute URI of the reference, used to detect re-entry.
    pub(super) uri: String,
    pub(super) node: &'r Value,
    pub(super) resolver: Resolver<'r>,
}

pub(super) fn resolve<'r>(
    resolver: &Resolver<'r>,
    reference: &str,
) -> Result<Target<'r>, SchemaError> {
    let base = resolver.base_uri();
    let uri = if reference.starts_with('#') {
        format!("{}{reference}", base.as_str())
    } else {
        resolver
            .resolve_against(&base.borrow(), reference)
            .map_err(|source| unresolved(reference, source))?
            .as_str()
            .to_string()
    };

    let (node, resolver, _) = resolver
        .lookup(reference)
        .map_err(|source| unresolved(reference, source))?
        .into_inner();

    Ok(Target {
        uri,
        node,
        resolver,
    })
}

fn unresolved(reference: &str, source: referencing::Error) -> SchemaError {
    SchemaError::UnresolvedReference {
        reference: reference.to_string(),
        source,
    }
}

fn compile_error(err: referencing::Error) -> SchemaError {
    SchemaError::Compile(err.to_string())
}
