//! Per-scope resolver configuration and the scope-keyed table holding it.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

use super::alias::AliasTable;
use super::deps::DependencyTables;
use crate::base::constants::{DEFAULT_NPM_LABEL, DEFAULT_WEB_ASSET_SUFFIXES};
use crate::base::path;

/// Resolver settings in effect for one directory scope.
#[derive(Debug, Clone)]
pub struct JsConfig {
    /// Alias rules applied before classification.
    pub aliases: AliasTable,
    /// Declared external packages.
    pub deps: DependencyTables,
    /// Project-local root; the ancestor walk never climbs past it.
    pub js_root: String,
    /// Attach `@types/...` companions to typed modules.
    pub lookup_types: bool,
    /// Index units by every directory containing one of their sources.
    pub collect_all: bool,
    /// Report every attempted candidate for unresolved imports.
    pub verbose: bool,
    /// Suppress unresolved-import warnings.
    pub quiet: bool,
    /// Label prefix for scoped packages missing from the tables.
    pub default_npm_label: String,
    /// Suffixes of non-code assets (resolved as data, not probed with extensions).
    pub web_asset_suffixes: BTreeSet<String>,
}

impl Default for JsConfig {
    fn default() -> Self {
        Self {
            aliases: AliasTable::default(),
            deps: DependencyTables::default(),
            js_root: ".".to_string(),
            lookup_types: true,
            collect_all: false,
            verbose: false,
            quiet: false,
            default_npm_label: DEFAULT_NPM_LABEL.to_string(),
            web_asset_suffixes: DEFAULT_WEB_ASSET_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl JsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_deps(mut self, deps: DependencyTables) -> Self {
        self.deps = deps;
        self
    }

    pub fn with_js_root(mut self, root: &str) -> Self {
        self.js_root = path::clean(root);
        self
    }

    pub fn with_lookup_types(mut self, enabled: bool) -> Self {
        self.lookup_types = enabled;
        self
    }

    pub fn with_collect_all(mut self, enabled: bool) -> Self {
        self.collect_all = enabled;
        self
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub fn with_quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    pub fn with_default_npm_label(mut self, label: impl Into<String>) -> Self {
        self.default_npm_label = label.into();
        self
    }

    pub fn with_web_asset_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.web_asset_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `target` names a non-code asset.
    pub fn is_web_asset(&self, target: &str) -> bool {
        self.web_asset_suffixes
            .iter()
            .any(|suffix| target.ends_with(suffix.as_str()))
    }

    /// Package path of the project-local root as written in labels.
    pub fn js_root_pkg(&self) -> &str {
        path::as_pkg(&self.js_root)
    }
}

/// Read-only table of scope configurations, keyed by package directory.
///
/// Built once before resolution; a lookup returns the configuration of the
/// nearest enclosing scope, falling back to the root configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigTable {
    root: JsConfig,
    scopes: FxHashMap<String, JsConfig>,
}

impl ConfigTable {
    /// Create a table whose root scope uses `root`.
    pub fn new(root: JsConfig) -> Self {
        Self {
            root,
            scopes: FxHashMap::default(),
        }
    }

    /// Register the configuration for `scope` and everything beneath it.
    pub fn insert(&mut self, scope: &str, config: JsConfig) {
        let key = path::clean(scope);
        if key == "." {
            self.root = config;
        } else {
            self.scopes.insert(key, config);
        }
    }

    pub fn with_scope(mut self, scope: &str, config: JsConfig) -> Self {
        self.insert(scope, config);
        self
    }

    /// Configuration in effect for `pkg`.
    pub fn for_pkg(&self, pkg: &str) -> &JsConfig {
        let mut current = path::clean(pkg);
        loop {
            if let Some(config) = self.scopes.get(&current) {
                return config;
            }
            match path::parent(&current) {
                Some(parent) => current = parent,
                None => return &self.root,
            }
        }
    }

    pub fn root(&self) -> &JsConfig {
        &self.root
    }
}
