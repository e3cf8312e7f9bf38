//! Foundation types for the jsdep resolver.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Label`] - Build labels (`@repo//pkg:name`) with relative/absolute forms
//! - [`ImportSpec`] - (language, identifier) keys for the build index
//! - [`path`] - Lexical, `/`-separated path helpers
//! - Domain constants (builtins, extensions, exempt prefixes)
//!
//! This module has NO dependencies on other jsdep modules.

pub mod constants;
mod import_spec;
mod label;
pub mod path;

pub use import_spec::ImportSpec;
pub use label::{Label, LabelError};
