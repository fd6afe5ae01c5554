//! Recursive schema walk producing one parameter per leaf node.

use referencing::Resolver;
use serde_json::Value;

use super::reference::{self, SchemaDocument};
use super::SchemaError;
use crate::parameters::{Parameter, ParameterList};

/// Rendering of a leaf that declares no default.
const NO_DEFAULT: &str = "<nil>";

pub(super) struct SchemaWalker<'d> {
    document: &'d SchemaDocument,
    /// Absolute URIs of the references followed on the current recursion path.
    active: Vec<String>,
    parameters: ParameterList,
}

impl<'d> SchemaWalker<'d> {
    pub(super) fn new(document: &'d SchemaDocument) -> Self {
        Self {
            document,
            active: Vec::new(),
            parameters: ParameterList::new(),
        }
    }

    pub(super) fn into_parameters(self) -> ParameterList {
        self.parameters
    }

    /// Walk a subschema reached through `properties` (or the root).
    pub(super) fn walk<'r>(
        &mut self,
        node: &'r Value,
        prefix: &str,
        resolver: &Resolver<'r>,
    ) -> Result<(), SchemaError> {
        let resolver = self.document.enter(node, resolver)?;
        self.walk_scoped(node, prefix, &resolver)
    }

    /// Walk `node` with a resolver already scoped to it.
    fn walk_scoped<'r>(
        &mut self,
        node: &'r Value,
        prefix: &str,
        resolver: &Resolver<'r>,
    ) -> Result<(), SchemaError> {
        let properties = node
            .get("properties")
            .and_then(Value::as_object)
            .filter(|properties| !properties.is_empty());
        let reference = node.get("$ref").and_then(Value::as_str);

        if properties.is_none() && reference.is_none() {
            self.emit_leaf(node, prefix);
            return Ok(());
        }

        if let Some(reference) = reference {
            self.follow(reference, prefix, resolver)?;
        }

        if let Some(properties) = properties {
            let mut entries: Vec<(&String, &'r Value)> = properties.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            for (name, property) in entries {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                self.walk(property, &path, resolver)?;
            }
        }

        Ok(())
    }

    fn follow<'r>(
        &mut self,
        reference: &str,
        prefix: &str,
        resolver: &Resolver<'r>,
    ) -> Result<(), SchemaError> {
        let target = reference::resolve(resolver, reference)?;

        if self.active.contains(&target.uri) {
            let mut chain = self.active.clone();
            chain.push(target.uri);
            return Err(SchemaError::CyclicReference {
                chain: chain.join(" -> "),
            });
        }

        self.active.push(target.uri);
        // The lookup already scoped the resolver to the target's own `$id`.
        let result = self.walk_scoped(target.node, prefix, &target.resolver);
        self.active.pop();
        result
    }

    fn emit_leaf(&mut self, node: &Value, prefix: &str) {
        let description = node
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let default = format!("`{}`", render_default(node.get("default")));

        if let Some(previous) = self
            .parameters
            .insert(Parameter::new(prefix, description, default))
        {
            tracing::debug!(parameter = %previous.name, "Schema leaf redefined, keeping the last one");
        }
    }
}

fn render_default(default: Option<&Value>) -> String {
    match default {
        None | Some(Value::Null) => NO_DEFAULT.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
