//! Derivation of the `--set name=value` example shown in the document.

use crate::parameters::ParameterList;

/// Defaults that make a poor example.
pub const BORING_DEFAULTS: [&str; 7] = ["", "\"\"", "{}", "[]", "true", "false", "not-ca-cert"];

/// Placeholder prefix meaning "derive the example for me".
pub const GENERATE_MARKER: &str = "-- generate from values file --";

/// Whether `existing` already supplies an example.
pub fn is_supplied(existing: Option<&str>) -> bool {
    existing.is_some_and(|example| !example.is_empty() && !example.starts_with(GENERATE_MARKER))
}

/// Pick the example line for the document.
///
/// A supplied example is kept as is. Otherwise the first parameter, in table
/// order, whose default is neither in [`BORING_DEFAULTS`] nor in
/// `extra_boring` yields `name=default`. When nothing qualifies the existing
/// value (possibly `None`) is returned unchanged.
pub fn derive_example(
    existing: Option<&str>,
    parameters: &ParameterList,
    extra_boring: &[String],
) -> Option<String> {
    if is_supplied(existing) {
        return existing.map(str::to_string);
    }

    let is_boring = |default: &str| {
        BORING_DEFAULTS.contains(&default) || extra_boring.iter().any(|b| b == default)
    };

    parameters
        .iter()
        .find(|parameter| !is_boring(parameter.default.as_str()))
        .map(|parameter| format!("{}={}", parameter.name, parameter.default))
        .or_else(|| existing.map(str::to_string))
}
