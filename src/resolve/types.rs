//! Companion type-declaration packages (`@types/...`) for typed modules.

use super::classify::{ExternalPackage, is_types_package};
use crate::base::constants::{BUILTIN_TYPES_PACKAGE, TYPES_SCOPE};
use crate::config::JsConfig;
use crate::unit::UnitKind;

/// What a companion is being looked for.
#[derive(Debug, Clone, Copy)]
pub enum Companion<'a, 'c> {
    Builtin,
    Package(&'a ExternalPackage<'c>),
}

/// Name of the package declaring types for `root` (`@types/react`,
/// `@types/babel__core` for `@babel/core`). Type packages have none.
pub fn types_package_name(root: &str) -> Option<String> {
    if is_types_package(root) {
        return None;
    }
    Some(match root.strip_prefix('@') {
        Some(scoped) => format!("{TYPES_SCOPE}/{}", scoped.replacen('/', "__", 1)),
        None => format!("{TYPES_SCOPE}/{root}"),
    })
}

/// The compile-time label of the companion, if the unit wants one and the
/// dependency tables declare it. Absence is never an error.
pub fn companion_label(kind: &UnitKind, config: &JsConfig, companion: Companion<'_, '_>) -> Option<String> {
    if !kind.is_typed() || !config.lookup_types {
        return None;
    }
    let name = match companion {
        Companion::Builtin => BUILTIN_TYPES_PACKAGE.to_string(),
        Companion::Package(package) => types_package_name(&package.root)?,
    };
    let hit = config.deps.lookup(&name)?;
    Some(format!("{}{}", hit.label_prefix, name))
}
