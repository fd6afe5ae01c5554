//! The flat parameter list shared by the values and schema flatteners.
//!
//! Both flatteners produce a [`ParameterList`] keyed by dotted path. The lists
//! are combined with [`ParameterList::merge`], where the overlay wins on key
//! collision. Iteration is always in lexicographic key order, which is the
//! order the table renderer and example derivation rely on.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// One configurable setting of a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    /// Dotted path from the document root to the leaf (e.g. `image.repository`).
    pub name: String,
    /// Human-readable description, empty when none is known.
    pub description: String,
    /// Textual rendering of the default value.
    pub default: String,
    /// Usage example. Not populated by the flatteners.
    pub example: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: default.into(),
            example: String::new(),
        }
    }
}

/// Parameters keyed by their dotted path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterList {
    entries: BTreeMap<String, Parameter>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter under its own name, returning the entry it replaced.
    pub fn insert(&mut self, parameter: Parameter) -> Option<Parameter> {
        self.entries.insert(parameter.name.clone(), parameter)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameters in lexicographic order of their dotted path.
    pub fn iter(&self) -> btree_map::Values<'_, String, Parameter> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copy of `self` with every entry of `overlay` written on top.
    ///
    /// On a key present in both lists the overlay's entry is kept whole; no
    /// field-level merging happens.
    #[must_use]
    pub fn merge(&self, overlay: &ParameterList) -> ParameterList {
        let mut merged = self.clone();
        for parameter in overlay.iter() {
            merged.insert(parameter.clone());
        }
        merged
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut list = ParameterList::new();
        for parameter in iter {
            list.insert(parameter);
        }
        list
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = btree_map::Values<'a, String, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Free-function form of [`ParameterList::merge`].
pub fn merge(base: &ParameterList, overlay: &ParameterList) -> ParameterList {
    base.merge(overlay)
}
