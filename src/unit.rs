//! Build units: the nodes whose dependency attributes the resolver computes.

use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::base::Label;

/// Attribute holding compile-time dependencies.
pub const DEPS_ATTR: &str = "deps";
/// Attribute holding runtime/data dependencies.
pub const DATA_ATTR: &str = "data";

/// The kind of a build unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Untyped JavaScript module (`js_library`).
    Module,
    /// Typed module (`ts_project`); eligible for `@types` companions.
    TypedModule,
    /// Test target (`jest_test`); receives test-framework extras.
    Test,
    /// Any other rule kind; indexed but never specially treated.
    Other(String),
}

impl UnitKind {
    /// Map a build rule kind name to a unit kind.
    pub fn from_rule_kind(kind: &str) -> Self {
        match kind {
            "js_library" => Self::Module,
            "ts_project" => Self::TypedModule,
            "jest_test" => Self::Test,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Self::TypedModule)
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }

    /// Kinds whose source directories can be imported as folders.
    pub fn is_library(&self) -> bool {
        matches!(self, Self::Module | Self::TypedModule)
    }
}

/// A build unit with its sources, raw imports and attributes.
#[derive(Debug, Clone)]
pub struct BuildUnit {
    /// Absolute label; `label.pkg` is the unit's package directory.
    pub label: Label,
    pub kind: UnitKind,
    /// Source files, relative to the unit's package.
    pub srcs: Vec<String>,
    /// Distinct raw import identifiers found in the sources.
    pub imports: BTreeSet<String>,
    attrs: IndexMap<String, Vec<String>>,
}

impl BuildUnit {
    pub fn new(label: Label, kind: UnitKind) -> Self {
        Self {
            label,
            kind,
            srcs: Vec::new(),
            imports: BTreeSet::new(),
            attrs: IndexMap::new(),
        }
    }

    pub fn with_srcs<I, S>(mut self, srcs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.srcs.extend(srcs.into_iter().map(Into::into));
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// The unit's package directory (empty for the root package).
    pub fn pkg(&self) -> &str {
        &self.label.pkg
    }

    pub fn attr(&self, name: &str) -> Option<&[String]> {
        self.attrs.get(name).map(Vec::as_slice)
    }

    /// Replace an attribute's value wholesale.
    pub fn set_attr(&mut self, name: &str, values: Vec<String>) {
        self.attrs.insert(name.to_string(), values);
    }

    /// Remove an attribute, keeping the order of the remaining ones.
    pub fn del_attr(&mut self, name: &str) {
        self.attrs.shift_remove(name);
    }

    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }
}
