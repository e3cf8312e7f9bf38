//! Local path resolution: walk from the importing unit's directory towards
//! the project root, probing the target with each source extension.

use super::classify::has_local_prefix;
use super::engine::UnitResolution;
use super::outcome::Outcome;
use crate::base::constants::{BARREL_NAME, JS_EXTENSIONS, MANIFEST_FILE, TS_EXTENSIONS};
use crate::base::{Label, path};
use crate::config::JsConfig;
use crate::error::ResolveError;
use crate::index::{FileProbe, ImportIndex};

/// Normalize a local identifier before joining it to a directory.
pub fn normalize_local(name: &str) -> &str {
    match name {
        "package" => MANIFEST_FILE,
        "." => BARREL_NAME,
        other => other,
    }
}

/// Extensions to try for `target`, in probe order.
pub fn extension_candidates(config: &JsConfig, target: &str) -> Vec<&'static str> {
    let mut candidates = vec![""];
    if !config.is_web_asset(target) {
        candidates.extend(TS_EXTENSIONS);
        candidates.extend(JS_EXTENSIONS);
    }
    candidates
}

/// Every path the walk would probe for `name` from `pkg`, in order.
pub fn probe_paths(config: &JsConfig, pkg: &str, name: &str) -> Vec<String> {
    let name = normalize_local(name);
    let mut paths = Vec::new();
    let mut dir = path::clean(pkg);
    loop {
        let target = path::join(&dir, name);
        for ext in extension_candidates(config, &target) {
            paths.push(format!("{target}{ext}"));
        }
        if is_walk_boundary(config, &dir) {
            return paths;
        }
        match path::parent(&dir) {
            Some(parent) => dir = parent,
            None => return paths,
        }
    }
}

/// The walk stops at the configured project root and, independently, at the
/// repository root.
fn is_walk_boundary(config: &JsConfig, dir: &str) -> bool {
    dir == config.js_root || dir == "."
}

impl<I: ImportIndex, F: FileProbe> UnitResolution<'_, I, F> {
    /// Resolve a local-path import. `raw` is the identifier as written,
    /// `name` its alias-translated form.
    pub(super) fn resolve_local(&mut self, raw: &str, name: &str) -> Result<(), ResolveError> {
        // bare identifiers may be indexed as written
        if !has_local_prefix(name) {
            match self.try_resolve(name) {
                Outcome::Resolved(label) => {
                    let label = self.render(&label);
                    self.deps.add_dep(label);
                    return Ok(());
                }
                Outcome::SelfReferential => return Ok(()),
                Outcome::Ambiguous(owners) => return Err(ResolveError::ambiguous(name, owners)),
                Outcome::Error(reason) => return Err(ResolveError::probe(name, reason)),
                Outcome::FileOnDisk(_) | Outcome::Unresolved => {}
            }
        }

        self.walk_parents(raw, name)
    }

    fn walk_parents(&mut self, raw: &str, name: &str) -> Result<(), ResolveError> {
        let unit = self.unit;
        let from = &unit.label;
        let candidates = probe_paths(self.config, &from.pkg, name);

        for (attempt, file_path) in candidates.iter().enumerate() {
            let outcome = self.try_resolve(file_path);
            tracing::trace!("[{from}] probe {file_path}: {outcome:?}");
            if !outcome.is_terminal() {
                continue;
            }

            match outcome {
                Outcome::Unresolved | Outcome::SelfReferential => {}
                Outcome::Ambiguous(owners) => {
                    return Err(ResolveError::ambiguous(file_path.as_str(), owners));
                }
                Outcome::Error(reason) => {
                    return Err(ResolveError::probe(file_path.as_str(), reason));
                }
                Outcome::Resolved(label) => {
                    let label = self.render(&label);
                    if self.config.is_web_asset(file_path) {
                        self.deps.add_data(label);
                    } else {
                        self.deps.add_dep(label);
                    }
                }
                Outcome::FileOnDisk(file_name) => {
                    let owner_pkg = path::dir(file_path);
                    let label = self.render(&Label::new(path::as_pkg(&owner_pkg), file_name));
                    self.deps.add_data(label);
                }
            }
            tracing::trace!("[{from}] {raw} settled after {} probes", attempt + 1);
            return Ok(());
        }

        self.report_unresolved(raw, normalize_local(name), &candidates);
        Ok(())
    }

    fn report_unresolved(&mut self, raw: &str, name: &str, tried: &[String]) {
        let unit = self.unit;
        let from = &unit.label;
        let tried: Vec<String> = std::iter::once(format!("node_modules/{name}"))
            .chain(tried.iter().cloned())
            .collect();

        if self.config.verbose {
            for candidate in &tried {
                tracing::debug!("[{from}] tried {candidate}");
            }
        }
        if self.config.quiet {
            return;
        }

        tracing::warn!("[{from}] import {raw} not found");
        let listed: &[String] = if self.config.verbose { &tried } else { &[] };
        self.diagnostics.unresolved_import(from, raw, listed);
    }
}
