//! Manual import → label mappings that bypass classification.

use rustc_hash::FxHashMap;

use crate::base::{ImportSpec, Label, path};

/// Overrides registered per directory scope; a scope's entries apply to all
/// packages beneath it, and the nearest scope wins.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    scopes: FxHashMap<String, FxHashMap<ImportSpec, Label>>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scope: &str, spec: ImportSpec, label: Label) {
        self.scopes
            .entry(path::clean(scope))
            .or_default()
            .insert(spec, label);
    }

    pub fn with_override(mut self, scope: &str, spec: ImportSpec, label: Label) -> Self {
        self.insert(scope, spec, label);
        self
    }

    /// The override for `spec` visible from package `pkg`.
    pub fn find(&self, spec: &ImportSpec, pkg: &str) -> Option<&Label> {
        if self.scopes.is_empty() {
            return None;
        }
        let mut scope = path::clean(pkg);
        loop {
            if let Some(label) = self.scopes.get(&scope).and_then(|entries| entries.get(spec)) {
                return Some(label);
            }
            scope = path::parent(&scope)?;
        }
    }

    /// Number of overrides across all scopes.
    pub fn len(&self) -> usize {
        self.scopes.values().map(|entries| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
