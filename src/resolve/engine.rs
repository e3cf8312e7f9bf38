//! The resolution engine: turns a unit's raw imports into rendered
//! `deps` / `data` attributes.
//!
//! Per import: override lookup → alias translation → classification →
//! (local path walk | external/builtin handling) → type companion. Every
//! shared input is borrowed read-only, so units can be resolved in parallel.

use rayon::prelude::*;

use super::classify::{ImportClass, classify};
use super::dep_set::{DependencySet, RenderedDeps};
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::outcome::Outcome;
use super::types::{Companion, companion_label};
use crate::base::constants::{DEFAULT_MANIFEST_LABEL, LANG, MANIFEST_FILE};
use crate::base::{ImportSpec, Label};
use crate::config::{ConfigTable, JsConfig};
use crate::error::ResolveError;
use crate::index::{FileProbe, ImportIndex, IndexMatch, OverrideTable, import_specs};
use crate::unit::BuildUnit;

/// The contract an orchestrator drives: index units, then resolve each one.
pub trait DependencyResolver {
    /// Language tag of the specs this resolver indexes and queries.
    fn lang(&self) -> &'static str;

    /// The specs under which `unit` should be indexed.
    fn imports(&self, unit: &BuildUnit) -> Vec<ImportSpec>;

    /// Recompute and replace `unit`'s dependency attributes.
    ///
    /// On error the unit's attributes are left untouched.
    fn resolve_unit(&self, unit: &mut BuildUnit) -> Result<UnitReport, ResolveError>;

    /// Resolve many units in parallel; one result per unit, in order.
    fn resolve_all(&self, units: &mut [BuildUnit]) -> Vec<Result<UnitReport, ResolveError>>
    where
        Self: Sync,
    {
        units
            .par_iter_mut()
            .map(|unit| self.resolve_unit(unit))
            .collect()
    }
}

/// Result of a successful unit resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    pub unit: Label,
    pub rendered: RenderedDeps,
    /// Recoverable findings (unresolved imports).
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolver for JavaScript/TypeScript units.
#[derive(Debug, Clone, Copy)]
pub struct JsResolver<'a, I, F> {
    configs: &'a ConfigTable,
    index: &'a I,
    overrides: &'a OverrideTable,
    files: &'a F,
}

impl<'a, I: ImportIndex, F: FileProbe> JsResolver<'a, I, F> {
    pub fn new(
        configs: &'a ConfigTable,
        index: &'a I,
        overrides: &'a OverrideTable,
        files: &'a F,
    ) -> Self {
        Self {
            configs,
            index,
            overrides,
            files,
        }
    }

    /// Resolve `unit` without writing its attributes.
    pub fn resolve_only(&self, unit: &BuildUnit) -> Result<UnitReport, ResolveError> {
        let config = self.configs.for_pkg(unit.pkg());
        tracing::debug!(
            "resolving {} ({} imports)",
            unit.label,
            unit.imports.len()
        );

        let mut state = UnitResolution {
            index: self.index,
            overrides: self.overrides,
            files: self.files,
            unit,
            config,
            deps: DependencySet::new(),
            diagnostics: DiagnosticCollector::new(),
        };

        if let Err(err) = state.run() {
            tracing::error!("{}", fatal_message(&unit.label, &err));
            return Err(err);
        }

        Ok(UnitReport {
            unit: unit.label.clone(),
            rendered: state.deps.render(),
            diagnostics: state.diagnostics.into_diagnostics(),
        })
    }
}

impl<I: ImportIndex, F: FileProbe> DependencyResolver for JsResolver<'_, I, F> {
    fn lang(&self) -> &'static str {
        LANG
    }

    fn imports(&self, unit: &BuildUnit) -> Vec<ImportSpec> {
        import_specs(unit, self.configs.for_pkg(unit.pkg()))
    }

    fn resolve_unit(&self, unit: &mut BuildUnit) -> Result<UnitReport, ResolveError> {
        let report = self.resolve_only(unit)?;
        report.rendered.apply(unit);
        Ok(report)
    }
}

/// Log line for a fatal error, naming the unit it aborted.
fn fatal_message(unit: &Label, err: &ResolveError) -> String {
    match err {
        // already prefixed with the unit
        ResolveError::Manifest { .. } => err.to_string(),
        _ => format!("[{unit}] {err}"),
    }
}

/// Mutable state of one unit's resolution pass.
pub(super) struct UnitResolution<'r, I, F> {
    pub(super) index: &'r I,
    pub(super) overrides: &'r OverrideTable,
    pub(super) files: &'r F,
    pub(super) unit: &'r BuildUnit,
    pub(super) config: &'r JsConfig,
    pub(super) deps: DependencySet,
    pub(super) diagnostics: DiagnosticCollector,
}

impl<I: ImportIndex, F: FileProbe> UnitResolution<'_, I, F> {
    fn run(&mut self) -> Result<(), ResolveError> {
        let manifest = self.resolve_manifest()?;

        let unit = self.unit;
        for raw in &unit.imports {
            self.resolve_import(raw, manifest.as_deref())?;
        }

        if self.unit.kind.is_test() {
            self.deps.add_test_extras(self.config);
        }
        Ok(())
    }

    /// Label for manifest references; `None` when the unit owns the manifest.
    fn resolve_manifest(&self) -> Result<Option<String>, ResolveError> {
        let from = &self.unit.label;
        match self.try_resolve(MANIFEST_FILE) {
            Outcome::Resolved(label) => Ok(Some(label.abs(&from.repo, &from.pkg).to_string())),
            Outcome::SelfReferential => Ok(None),
            Outcome::FileOnDisk(_) | Outcome::Unresolved => {
                Ok(Some(DEFAULT_MANIFEST_LABEL.to_string()))
            }
            Outcome::Ambiguous(owners) => Err(ResolveError::manifest(
                from.clone(),
                ResolveError::ambiguous(MANIFEST_FILE, owners),
            )),
            Outcome::Error(reason) => Err(ResolveError::manifest(
                from.clone(),
                ResolveError::probe(MANIFEST_FILE, reason),
            )),
        }
    }

    fn resolve_import(&mut self, raw: &str, manifest: Option<&str>) -> Result<(), ResolveError> {
        let spec = ImportSpec::new(LANG, raw);
        if let Some(outcome) = self.override_outcome(&spec) {
            tracing::trace!("[{}] import {raw} overridden: {outcome:?}", self.unit.label);
            if let Some(label) = outcome.label() {
                let label = self.render(label);
                self.deps.add_dep(label);
            }
            return Ok(());
        }

        let name = self.config.aliases.translate(raw);
        match classify(&name, self.config) {
            ImportClass::Manifest => {
                if let Some(label) = manifest {
                    self.deps.add_dep(label);
                }
            }
            ImportClass::Builtin => self.add_companion(Companion::Builtin),
            ImportClass::External(package) => {
                if package.dev {
                    self.deps.add_dep(package.label());
                } else {
                    self.deps.add_runtime(package.label());
                }
                self.add_companion(Companion::Package(&package));
            }
            ImportClass::Local => self.resolve_local(raw, &name)?,
        }
        Ok(())
    }

    fn add_companion(&mut self, companion: Companion<'_, '_>) {
        if let Some(label) = companion_label(&self.unit.kind, self.config, companion) {
            self.deps.add_dep(label);
        }
    }

    /// The override for `spec`, with self-references detected.
    fn override_outcome(&self, spec: &ImportSpec) -> Option<Outcome> {
        let from = &self.unit.label;
        let label = self.overrides.find(spec, &from.pkg)?;

        let mut label = label.abs(&from.repo, &from.pkg);
        if label.repo.is_empty() {
            label.repo = from.repo.clone();
        }
        if label == *from {
            return Some(Outcome::SelfReferential);
        }
        Some(Outcome::Resolved(label))
    }

    /// Look `target` up: override table, then build index, then disk.
    pub(super) fn try_resolve(&self, target: &str) -> Outcome {
        let spec = ImportSpec::new(LANG, target);
        if let Some(outcome) = self.override_outcome(&spec) {
            return outcome;
        }

        match self.index.find(&spec, &self.unit.label) {
            IndexMatch::Many(owners) => Outcome::Ambiguous(owners),
            IndexMatch::SelfImport => Outcome::SelfReferential,
            IndexMatch::One(label) => Outcome::Resolved(label.clone()),
            IndexMatch::None => match self.files.file_name(target) {
                Ok(Some(name)) => Outcome::FileOnDisk(name),
                Ok(None) => Outcome::Unresolved,
                Err(e) => Outcome::Error(e.to_string()),
            },
        }
    }

    /// `label` as written on the importing unit.
    pub(super) fn render(&self, label: &Label) -> String {
        let from = &self.unit.label;
        label.rel(&from.repo, &from.pkg).to_string()
    }
}
