//! External packages, builtins and type-declaration companions.

use crate::helpers::attr_assertions::*;
use crate::helpers::workspace::Workspace;
use jsdep::{DependencyTables, JsConfig, UnitKind};
use rstest::rstest;

fn tables() -> DependencyTables {
    DependencyTables::new()
        .with_dependency("lodash", "@npm//")
        .with_dependency("react", "@npm//")
        .with_dependency("@babel/core", "@npm//")
        .with_dev_dependency("typescript", "@npm//")
        .with_dev_dependency("prettier", "@npm//")
        .with_dev_dependency("@types/react", "@npm//")
        .with_dev_dependency("@types/babel__core", "@npm//")
        .with_dev_dependency("@types/node", "@npm//")
}

fn workspace(config: JsConfig) -> Workspace {
    Workspace::new(config.with_deps(tables()))
        .with_unit("app", "typed", UnitKind::TypedModule, &["main.ts"])
        .with_unit("app", "plain", UnitKind::Module, &["main.js"])
}

#[test]
fn test_runtime_dependency_is_in_deps_and_data() {
    let (unit, result) = workspace(JsConfig::new()).resolve("app", "plain", &["lodash"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@npm//lodash"]);
    assert_eq!(data(&unit), vec!["@npm//lodash"]);
}

#[test]
fn test_subpath_import_uses_package_root() {
    let (unit, result) = workspace(JsConfig::new()).resolve("app", "plain", &["lodash/fp/map"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@npm//lodash"]);
}

#[rstest]
#[case("typescript")]
#[case("prettier/standalone")]
fn test_dev_dependency_never_reaches_data(#[case] import: &str) {
    for kind_unit in ["typed", "plain"] {
        let (unit, result) =
            workspace(JsConfig::new()).resolve("app", kind_unit, &[import, "lodash"]);
        assert_resolved(result);

        let dev_label = format!("@npm//{}", import.split('/').next().unwrap());
        assert!(deps(&unit).contains(&dev_label.as_str()));
        assert!(!data(&unit).contains(&dev_label.as_str()));
    }
}

#[test]
fn test_undeclared_scoped_package_uses_default_label() {
    let config = JsConfig::new().with_default_npm_label("@deps//");
    let (unit, result) = workspace(config).resolve("app", "plain", &["@acme/ui/button"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@deps//@acme/ui"]);
    assert_eq!(data(&unit), vec!["@deps//@acme/ui"]);
}

#[test]
fn test_undeclared_types_package_has_no_fallback() {
    let config = JsConfig::new().with_quiet(true);
    let (unit, result) = workspace(config).resolve("app", "typed", &["@types/lodash"]);
    assert_resolved(result);

    assert_eq!(unit.attr("deps"), None);
    assert_eq!(unit.attr("data"), None);
}

// =============================================================================
// BUILTINS
// =============================================================================

#[rstest]
#[case("fs")]
#[case("fs/promises")]
#[case("node:test")]
#[case("events")]
fn test_builtin_in_typed_module_adds_node_types(#[case] import: &str) {
    let (unit, result) = workspace(JsConfig::new()).resolve("app", "typed", &[import]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@npm//@types/node"]);
    assert!(data(&unit).is_empty());
}

#[test]
fn test_declared_polyfill_subpaths_keep_their_edge() {
    let tables = DependencyTables::new()
        .with_dependency("process", "@npm//")
        .with_dependency("buffer", "@npm//");
    let ws = Workspace::new(JsConfig::new().with_deps(tables))
        .with_unit("app", "plain", UnitKind::Module, &["main.js"]);

    let (unit, result) = ws.resolve("app", "plain", &["process/browser", "buffer/", "fs/promises"]);
    let report = assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@npm//buffer", "@npm//process"]);
    assert_eq!(data(&unit), vec!["@npm//buffer", "@npm//process"]);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_builtin_in_untyped_module_adds_nothing() {
    let (unit, result) = workspace(JsConfig::new()).resolve("app", "plain", &["path", "node:url"]);
    let report = assert_resolved(result);

    assert_eq!(unit.attr("deps"), None);
    assert_eq!(unit.attr("data"), None);
    assert!(report.diagnostics.is_empty());
}

// =============================================================================
// TYPE COMPANIONS
// =============================================================================

#[test]
fn test_typed_module_gets_declared_companion() {
    let (unit, result) = workspace(JsConfig::new()).resolve("app", "typed", &["react", "lodash"]);
    assert_resolved(result);

    // @types/lodash is not declared, so lodash gets no companion
    assert_eq!(
        deps(&unit),
        vec!["@npm//@types/react", "@npm//lodash", "@npm//react"]
    );
    assert_eq!(data(&unit), vec!["@npm//lodash", "@npm//react"]);
}

#[test]
fn test_scoped_package_companion_name() {
    let (unit, result) = workspace(JsConfig::new()).resolve("app", "typed", &["@babel/core"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@npm//@babel/core", "@npm//@types/babel__core"]);
}

#[test]
fn test_companions_disabled() {
    let config = JsConfig::new().with_lookup_types(false);
    let (unit, result) = workspace(config).resolve("app", "typed", &["react", "fs"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@npm//react"]);
}

#[test]
fn test_untyped_module_gets_no_companion() {
    let (unit, result) = workspace(JsConfig::new()).resolve("app", "plain", &["react"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["@npm//react"]);
}

// =============================================================================
// SCOPED CONFIGURATION
// =============================================================================

#[test]
fn test_nested_scope_uses_its_own_tables() {
    let scoped = JsConfig::new().with_deps(DependencyTables::new().with_dependency("vue", "@web_npm//"));
    let ws = workspace(JsConfig::new())
        .with_scope("web", scoped)
        .with_unit("web/src", "app", UnitKind::Module, &["app.js"]);

    let (unit, result) = ws.resolve("web/src", "app", &["vue"]);
    assert_resolved(result);
    assert_eq!(deps(&unit), vec!["@web_npm//vue"]);

    // the root tables no longer apply under the nested scope
    let (_, result) = ws.resolve("app", "plain", &["vue"]);
    let report = assert_resolved(result);
    assert_eq!(report.diagnostics.len(), 1);
}
