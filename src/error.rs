//! Error types for configuration and resolution.

use thiserror::Error;

use crate::base::Label;

/// Failures that abort the resolution of a single build unit.
///
/// Recoverable findings (unresolved imports) are not errors; they are
/// reported as diagnostics on a successful resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// More than one unit provides the same import.
    #[error("multiple rules ({}) provide {import}", join_labels(.owners))]
    Ambiguous { import: String, owners: Vec<Label> },

    /// The manifest (`package.json`) owner could not be determined.
    #[error("[{unit}] unable to resolve package.json: {source}")]
    Manifest {
        unit: Label,
        #[source]
        source: Box<ResolveError>,
    },

    /// A filesystem probe failed for a reason other than the file missing.
    #[error("failed to probe {path}: {reason}")]
    Probe { path: String, reason: String },
}

impl ResolveError {
    /// Create an ambiguity error.
    pub fn ambiguous(import: impl Into<String>, owners: Vec<Label>) -> Self {
        Self::Ambiguous {
            import: import.into(),
            owners,
        }
    }

    /// Wrap an error raised while resolving the manifest.
    pub fn manifest(unit: Label, source: ResolveError) -> Self {
        Self::Manifest {
            unit,
            source: Box::new(source),
        }
    }

    /// Create a probe error.
    pub fn probe(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Probe {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Owners named by an ambiguity error, looking through manifest wrapping.
    pub fn conflicting_owners(&self) -> &[Label] {
        match self {
            Self::Ambiguous { owners, .. } => owners,
            Self::Manifest { source, .. } => source.conflicting_owners(),
            Self::Probe { .. } => &[],
        }
    }
}

fn join_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Errors raised while building configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The combined alias pattern could not be compiled.
    #[error("invalid import alias pattern: {0}")]
    AliasPattern(#[from] regex::Error),

    /// An alias rule is malformed.
    #[error("invalid import alias {from:?} -> {to:?}: {message}")]
    Alias {
        from: String,
        to: String,
        message: &'static str,
    },

    /// JSON parsing error.
    #[cfg(feature = "manifest")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading configuration input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
