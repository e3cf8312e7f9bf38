//! Import classification: manifest reference, builtin, external package or
//! local path. Classification is total; it never fails.

use crate::base::constants::{BUILTIN_SCHEME, BUILTINS, LOCAL_PREFIXES, MANIFEST_FILE, TYPES_SCOPE};
use crate::config::JsConfig;

/// The category of an (alias-translated) import identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportClass<'c> {
    /// `package` / `package.json`.
    Manifest,
    /// A runtime-provided module.
    Builtin,
    /// A declared (or assumed) external package.
    External(ExternalPackage<'c>),
    /// Anything else; resolved against the file tree.
    Local,
}

/// An external package an import resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPackage<'c> {
    /// Package root (`lodash`, `@scope/name`).
    pub root: String,
    /// Label prefix the root is appended to.
    pub label_prefix: &'c str,
    /// Dev dependencies are compile-time only.
    pub dev: bool,
}

impl ExternalPackage<'_> {
    /// The rendered label of the package.
    pub fn label(&self) -> String {
        format!("{}{}", self.label_prefix, self.root)
    }
}

/// Classify `imp`; first match wins.
pub fn classify<'c>(imp: &str, config: &'c JsConfig) -> ImportClass<'c> {
    if is_manifest_reference(imp) {
        return ImportClass::Manifest;
    }
    if is_builtin(imp, config) {
        return ImportClass::Builtin;
    }
    match external_package(imp, config) {
        Some(package) => ImportClass::External(package),
        None => ImportClass::Local,
    }
}

pub fn is_manifest_reference(imp: &str) -> bool {
    imp == "package" || imp == MANIFEST_FILE
}

/// `fs` and `node:anything` are builtins. A subpath such as `fs/promises` is
/// one only while its root is not a declared package (`process/browser`).
pub fn is_builtin(imp: &str, config: &JsConfig) -> bool {
    if imp.starts_with(BUILTIN_SCHEME) || BUILTINS.contains(&imp) {
        return true;
    }
    match imp.split_once('/') {
        Some((root, _)) => BUILTINS.contains(&root) && config.deps.lookup(root).is_none(),
        None => false,
    }
}

/// Whether `imp` starts with a prefix that rules out an external package.
pub fn has_local_prefix(imp: &str) -> bool {
    LOCAL_PREFIXES.iter().any(|prefix| imp.starts_with(prefix))
}

/// The package root of an import: its first segment, or its first two for
/// scoped (`@scope/name`) imports.
pub fn package_root(imp: &str) -> &str {
    let segments = if imp.starts_with('@') { 2 } else { 1 };
    match imp.match_indices('/').nth(segments - 1) {
        Some((idx, _)) => &imp[..idx],
        None => imp,
    }
}

/// Look the import's package root up in the dependency tables.
///
/// Scoped packages missing from the tables fall back to the configured
/// default label, except `@types/...` which are only ever declared explicitly.
pub fn external_package<'c>(imp: &str, config: &'c JsConfig) -> Option<ExternalPackage<'c>> {
    if has_local_prefix(imp) {
        return None;
    }

    let root = package_root(imp);
    if let Some(hit) = config.deps.lookup(root) {
        return Some(ExternalPackage {
            root: root.to_string(),
            label_prefix: hit.label_prefix,
            dev: hit.dev,
        });
    }

    if is_types_package(root) || !root.starts_with('@') {
        return None;
    }
    Some(ExternalPackage {
        root: root.to_string(),
        label_prefix: &config.default_npm_label,
        dev: false,
    })
}

pub fn is_types_package(root: &str) -> bool {
    root == TYPES_SCOPE
        || root
            .strip_prefix(TYPES_SCOPE)
            .is_some_and(|rest| rest.starts_with('/'))
}
