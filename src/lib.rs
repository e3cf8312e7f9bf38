//! # jsdep-base
//!
//! Import-to-dependency resolution for JavaScript/TypeScript build graphs.
//!
//! Given the raw import identifiers of a build unit (`"./utils"`, `"lodash"`,
//! `"@app/ui"`, `"fs"`), decide which build unit or external package provides
//! each one and render the unit's `deps` and `data` attributes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → Classification, ancestor walk, dependency sets, diagnostics
//!   ↓
//! index     → Build index, override table, filesystem probes
//!   ↓
//! config    → Alias rules, dependency tables, per-scope configuration
//!   ↓
//! unit      → Build units and their attributes
//!   ↓
//! base      → Primitives (Label, ImportSpec, path helpers, constants)
//! ```
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use jsdep::{BuildIndex, BuildUnit, ConfigTable, DependencyResolver, DependencyTables,
//!             JsConfig, JsResolver, Label, OverrideTable, UnitKind};
//!
//! let configs = ConfigTable::new(
//!     JsConfig::new().with_deps(DependencyTables::new().with_dependency("lodash", "@npm//")),
//! );
//! let utils = BuildUnit::new(Label::new("app", "utils"), UnitKind::TypedModule)
//!     .with_srcs(["utils.ts"]);
//! let mut main = BuildUnit::new(Label::new("app", "main"), UnitKind::TypedModule)
//!     .with_srcs(["main.ts"])
//!     .with_imports(["./utils", "lodash"]);
//!
//! let index = BuildIndex::from_units([&utils, &main], &configs);
//! let overrides = OverrideTable::new();
//! let files: BTreeSet<String> = BTreeSet::new();
//! let resolver = JsResolver::new(&configs, &index, &overrides, &files);
//!
//! resolver.resolve_unit(&mut main).unwrap();
//! assert_eq!(main.attr("deps").unwrap(), &[":utils", "@npm//lodash"]);
//! assert_eq!(main.attr("data").unwrap(), &["@npm//lodash"]);
//! ```

/// Foundation types: Label, ImportSpec, path helpers, constants
pub mod base;

/// Configuration: alias rules, dependency tables, per-scope settings
pub mod config;

/// Error types
pub mod error;

/// Lookup structures: build index, overrides, file probes
pub mod index;

/// Resolution engine
pub mod resolve;

/// Build units
pub mod unit;

pub use base::{ImportSpec, Label};
pub use config::{AliasRule, AliasTable, ConfigTable, DependencyTables, JsConfig};
pub use error::{ConfigError, ResolveError};
pub use index::{BuildIndex, DiskProbe, FileProbe, ImportIndex, IndexMatch, OverrideTable};
pub use resolve::{DependencyResolver, Diagnostic, JsResolver, Outcome, Severity, UnitReport};
pub use unit::{BuildUnit, UnitKind};
