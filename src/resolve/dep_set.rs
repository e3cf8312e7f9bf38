//! Accumulation and rendering of a unit's dependency attributes.

use std::collections::BTreeSet;

use crate::base::constants::{
    MANIFEST_DATA_TARGET, TEST_FRAMEWORK_EXCLUDED, TEST_FRAMEWORK_PREFIX,
    TEST_FRAMEWORK_TYPES_PREFIX,
};
use crate::config::JsConfig;
use crate::unit::{BuildUnit, DATA_ATTR, DEPS_ATTR};

/// Compile-time (`deps`) and runtime/data (`data`) label sets of one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    deps: BTreeSet<String>,
    data: BTreeSet<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile-time only edge.
    pub fn add_dep(&mut self, label: impl Into<String>) {
        self.deps.insert(label.into());
    }

    /// Runtime/data only edge.
    pub fn add_data(&mut self, label: impl Into<String>) {
        self.data.insert(label.into());
    }

    /// Edge needed both to compile and at runtime.
    pub fn add_runtime(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.deps.insert(label.clone());
        self.data.insert(label);
    }

    /// Attach test-framework dev dependencies and the manifest data target.
    pub fn add_test_extras(&mut self, config: &JsConfig) {
        for (name, prefix) in config.deps.sorted_dev_dependencies() {
            if TEST_FRAMEWORK_EXCLUDED.contains(&name) {
                continue;
            }
            let label = format!("{prefix}{name}");
            if name.starts_with(TEST_FRAMEWORK_TYPES_PREFIX) {
                self.add_dep(label);
            } else if name.starts_with(TEST_FRAMEWORK_PREFIX) {
                self.add_runtime(label);
            }
        }
        self.add_data(format!("//{}:{MANIFEST_DATA_TARGET}", config.js_root_pkg()));
    }

    pub fn deps(&self) -> &BTreeSet<String> {
        &self.deps
    }

    pub fn data(&self) -> &BTreeSet<String> {
        &self.data
    }

    /// Sorted, deduplicated attribute values.
    pub fn render(self) -> RenderedDeps {
        RenderedDeps {
            deps: self.deps.into_iter().collect(),
            data: self.data.into_iter().collect(),
        }
    }
}

/// Final attribute values for one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDeps {
    pub deps: Vec<String>,
    pub data: Vec<String>,
}

impl RenderedDeps {
    /// Write both attributes onto `unit`, removing any that is empty.
    pub fn apply(&self, unit: &mut BuildUnit) {
        for (name, values) in [(DEPS_ATTR, &self.deps), (DATA_ATTR, &self.data)] {
            if values.is_empty() {
                unit.del_attr(name);
            } else {
                unit.set_attr(name, values.clone());
            }
        }
    }
}
