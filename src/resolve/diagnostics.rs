//! Diagnostics: resolution findings reported per build unit.
//!
//! Fatal outcomes abort a unit and surface as [`ResolveError`]; everything
//! recoverable is recorded here and returned alongside the rendered
//! attributes. [`DiagnosticCollector::fatal`] converts an error for callers
//! that want a single report stream.

use std::sync::Arc;

use crate::base::Label;
use crate::error::ResolveError;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

/// A diagnostic message attached to a build unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The unit being resolved.
    pub unit: Label,
    /// The import identifier concerned, if any.
    pub import: Option<Arc<str>>,
    /// Severity level.
    pub severity: Severity,
    /// Diagnostic code (e.g., "E0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Additional notes, e.g. every candidate path that was tried.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: Arc<str>,
}

impl RelatedInfo {
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Diagnostic {
    fn new(unit: &Label, severity: Severity, message: impl Into<Arc<str>>) -> Self {
        Self {
            unit: unit.clone(),
            import: None,
            severity,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(unit: &Label, message: impl Into<Arc<str>>) -> Self {
        Self::new(unit, Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(unit: &Label, message: impl Into<Arc<str>>) -> Self {
        Self::new(unit, Severity::Warning, message)
    }

    /// Set the import identifier.
    pub fn with_import(mut self, import: impl Into<Arc<str>>) -> Self {
        self.import = Some(import.into());
        self
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable diagnostic codes.
pub mod codes {
    /// Import could not be resolved to any unit or file.
    pub const UNRESOLVED_IMPORT: &str = "E0001";
    /// Several units provide the same import.
    pub const AMBIGUOUS_IMPORT: &str = "E0002";
    /// The manifest owner could not be determined.
    pub const MANIFEST_LOOKUP: &str = "E0003";
    /// A filesystem probe failed.
    pub const PROBE_FAILURE: &str = "E0004";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics while resolving one unit.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an unresolved import warning, listing `tried` candidates when given.
    pub fn unresolved_import(&mut self, unit: &Label, import: &str, tried: &[String]) {
        let mut diag = Diagnostic::warning(unit, format!("[{unit}] import {import} not found"))
            .with_import(import)
            .with_code(codes::UNRESOLVED_IMPORT);
        for candidate in tried {
            diag = diag.with_related(RelatedInfo::new(format!("tried {candidate}")));
        }
        self.add(diag);
    }

    /// Record a fatal resolution error for `unit`.
    pub fn fatal(&mut self, unit: &Label, error: &ResolveError) {
        let (code, import) = match error {
            ResolveError::Ambiguous { import, .. } => (codes::AMBIGUOUS_IMPORT, Some(import)),
            ResolveError::Manifest { .. } => (codes::MANIFEST_LOOKUP, None),
            ResolveError::Probe { path, .. } => (codes::PROBE_FAILURE, Some(path)),
        };
        let mut diag = Diagnostic::error(unit, error.to_string()).with_code(code);
        if let Some(import) = import {
            diag = diag.with_import(import.as_str());
        }
        for owner in error.conflicting_owners() {
            diag = diag.with_related(RelatedInfo::new(format!("provided by {owner}")));
        }
        self.add(diag);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Diagnostics concerning a specific import.
    pub fn diagnostics_for_import(&self, import: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.import.as_deref() == Some(import))
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
