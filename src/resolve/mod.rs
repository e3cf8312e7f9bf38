//! Import resolution: turning raw import identifiers into dependency edges.
//!
//! ## Pipeline
//!
//! ```text
//! raw import
//!     │  override table (manual mapping)   → label, or self-reference
//!     ▼
//! alias translation                        ~/x → src/x
//!     │
//!     ▼
//! classification ── manifest  → package.json owner
//!     │          ├─ builtin   → (types companion)
//!     │          ├─ external  → "{prefix}{root}" (+ types companion)
//!     │          └─ local     → ancestor walk with extension probing
//!     ▼
//! dependency set ── deps (compile-time) / data (runtime) → sorted attributes
//! ```
//!
//! Fatal outcomes (ambiguity, manifest failure, probe failure) abort the
//! unit with a [`ResolveError`](crate::error::ResolveError); unresolved
//! imports are recorded as [`Diagnostic`]s.

mod classify;
mod dep_set;
mod diagnostics;
mod engine;
mod local;
mod outcome;
mod types;

pub use classify::{
    ExternalPackage, ImportClass, classify, external_package, has_local_prefix, is_builtin,
    is_manifest_reference, package_root,
};
pub use dep_set::{DependencySet, RenderedDeps};
pub use diagnostics::{Diagnostic, DiagnosticCollector, RelatedInfo, Severity, codes};
pub use engine::{DependencyResolver, JsResolver, UnitReport};
pub use local::{extension_candidates, normalize_local, probe_paths};
pub use outcome::Outcome;
pub use types::{Companion, companion_label, types_package_name};
