//! Resolver configuration: alias rules, dependency tables and per-scope settings.
//!
//! Configuration is assembled once, before any unit is resolved, and is only
//! read afterwards.

mod alias;
mod deps;
#[cfg(feature = "manifest")]
mod manifest;
mod scope;

pub use alias::{AliasRule, AliasTable};
pub use deps::{DependencyHit, DependencyTables};
#[cfg(feature = "manifest")]
pub use manifest::load_package_json;
pub use scope::{ConfigTable, JsConfig};
