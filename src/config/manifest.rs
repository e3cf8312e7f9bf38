//! Loading dependency tables from a `package.json` manifest.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::deps::DependencyTables;
use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl DependencyTables {
    /// Build tables from `package.json` text. Every declared package maps to
    /// `label_prefix`; version ranges are ignored.
    pub fn from_package_json(text: &str, label_prefix: &str) -> Result<Self, ConfigError> {
        let manifest: PackageJson = serde_json::from_str(text)?;

        let mut tables = DependencyTables::new();
        for name in manifest.dependencies.into_keys() {
            tables.dependencies.insert(name, label_prefix.to_string());
        }
        for name in manifest.dev_dependencies.into_keys() {
            tables
                .dev_dependencies
                .insert(name, label_prefix.to_string());
        }
        Ok(tables)
    }
}

/// Read and parse a `package.json` file.
pub fn load_package_json(
    path: impl AsRef<Path>,
    label_prefix: &str,
) -> Result<DependencyTables, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let tables = DependencyTables::from_package_json(&text, label_prefix)?;
    tracing::debug!(
        "loaded {} dependencies and {} dev dependencies from {}",
        tables.dependencies.len(),
        tables.dev_dependencies.len(),
        path.display()
    );
    Ok(tables)
}
