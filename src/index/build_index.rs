//! The build index: which units provide which import specs.
//!
//! Each unit indexes itself under every source path it owns, under the
//! directory of any barrel file it owns, and (with directory aggregation) under
//! every directory containing one of its sources.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use crate::base::constants::{BARREL_NAME, JS_EXTENSIONS, LANG, TS_EXTENSIONS};
use crate::base::{ImportSpec, Label, path};
use crate::config::{ConfigTable, JsConfig};
use crate::unit::BuildUnit;

/// Result of querying the index for one spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexMatch<'a> {
    /// Nothing provides the spec.
    None,
    /// Exactly one other unit provides it.
    One(&'a Label),
    /// The only provider is the querying unit itself.
    SelfImport,
    /// Several units provide it.
    Many(Vec<Label>),
}

/// Read-only lookup from import specs to owning units.
pub trait ImportIndex {
    fn find(&self, spec: &ImportSpec, from: &Label) -> IndexMatch<'_>;
}

/// In-memory [`ImportIndex`] built from a set of units.
#[derive(Debug, Clone, Default)]
pub struct BuildIndex {
    owners: FxHashMap<ImportSpec, Vec<Label>>,
}

impl BuildIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every unit using the configuration of its scope.
    pub fn from_units<'a>(
        units: impl IntoIterator<Item = &'a BuildUnit>,
        configs: &ConfigTable,
    ) -> Self {
        let mut index = Self::new();
        for unit in units {
            for spec in import_specs(unit, configs.for_pkg(unit.pkg())) {
                index.add(spec, unit.label.clone());
            }
        }
        tracing::debug!("build index holds {} import specs", index.len());
        index
    }

    /// Record `label` as a provider of `spec`.
    pub fn add(&mut self, spec: ImportSpec, label: Label) {
        let owners = self.owners.entry(spec).or_default();
        if !owners.contains(&label) {
            owners.push(label);
        }
    }

    /// All providers of `spec`, in insertion order.
    pub fn owners(&self, spec: &ImportSpec) -> &[Label] {
        self.owners.get(spec).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl ImportIndex for BuildIndex {
    fn find(&self, spec: &ImportSpec, from: &Label) -> IndexMatch<'_> {
        match self.owners(spec) {
            [] => IndexMatch::None,
            [only] if only == from => IndexMatch::SelfImport,
            [only] => IndexMatch::One(only),
            many => IndexMatch::Many(many.to_vec()),
        }
    }
}

/// Whether a source file is a directory-level aggregation module (`index.ts`, …).
pub fn is_barrel_file(src: &str) -> bool {
    let name = path::base_name(src);
    TS_EXTENSIONS
        .iter()
        .chain(JS_EXTENSIONS)
        .any(|ext| name.strip_suffix(ext) == Some(BARREL_NAME))
}

/// The specs under which `unit` is indexed, deduplicated, in a stable order.
pub fn import_specs(unit: &BuildUnit, config: &JsConfig) -> Vec<ImportSpec> {
    let mut imports: IndexSet<String> = IndexSet::new();

    for src in &unit.srcs {
        imports.insert(path::join(unit.pkg(), src));
    }

    // barrels make their directory importable
    for src in unit.srcs.iter().filter(|src| is_barrel_file(src)) {
        imports.insert(path::dir(&path::join(unit.pkg(), src)));
    }

    if config.collect_all && unit.kind.is_library() {
        for src in &unit.srcs {
            imports.insert(path::join(unit.pkg(), &path::dir(src)));
        }
    }

    imports
        .into_iter()
        .map(|imp| ImportSpec::new(LANG, imp))
        .collect()
}
