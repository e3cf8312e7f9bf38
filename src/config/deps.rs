//! External package tables (`dependencies` / `devDependencies`).

use rustc_hash::FxHashMap;

/// Maps package root names to the label prefix that provides them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTables {
    pub dependencies: FxHashMap<String, String>,
    pub dev_dependencies: FxHashMap<String, String>,
}

/// Result of looking a package root up in the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyHit<'a> {
    pub label_prefix: &'a str,
    pub dev: bool,
}

impl DependencyTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a runtime dependency.
    pub fn with_dependency(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), prefix.into());
        self
    }

    /// Add a dev (compile-time only) dependency.
    pub fn with_dev_dependency(
        mut self,
        name: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        self.dev_dependencies.insert(name.into(), prefix.into());
        self
    }

    /// Look up a package root, runtime table first.
    pub fn lookup(&self, root: &str) -> Option<DependencyHit<'_>> {
        if let Some(prefix) = self.dependencies.get(root) {
            return Some(DependencyHit {
                label_prefix: prefix,
                dev: false,
            });
        }
        self.dev_dependencies.get(root).map(|prefix| DependencyHit {
            label_prefix: prefix,
            dev: true,
        })
    }

    /// Dev dependencies sorted by name.
    pub fn sorted_dev_dependencies(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .dev_dependencies
            .iter()
            .map(|(name, prefix)| (name.as_str(), prefix.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}
