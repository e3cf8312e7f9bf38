//! Local path resolution: ancestor walk, extension probing, barrels, assets.

use crate::helpers::attr_assertions::*;
use crate::helpers::workspace::Workspace;
use jsdep::{JsConfig, ResolveError, UnitKind};

fn workspace() -> Workspace {
    Workspace::new(JsConfig::new())
        .with_unit("app", "main", UnitKind::TypedModule, &["main.ts", "helpers.ts"])
        .with_unit("app/sub", "page", UnitKind::TypedModule, &["page.tsx"])
        .with_unit("app", "utils", UnitKind::TypedModule, &["utils.ts"])
        .with_unit("lib", "lib", UnitKind::TypedModule, &["index.ts", "format.ts"])
        .with_unit("", "root", UnitKind::Module, &["index.js"])
        .with_unit("assets", "assets", UnitKind::Other("filegroup".into()), &["logo.svg"])
}

// =============================================================================
// DIRECT AND CLIMBING MATCHES
// =============================================================================

#[test]
fn test_sibling_module_resolves_relative() {
    let (unit, result) = workspace().resolve("app", "main", &["./utils"]);
    let report = assert_resolved(result);

    assert_eq!(deps(&unit), vec![":utils"]);
    assert!(data(&unit).is_empty());
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_walk_climbs_to_parent_directory() {
    // "./utils" from app/sub is not in app/sub, but is found one level up
    let (unit, result) = workspace().resolve("app/sub", "page", &["./utils"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["//app:utils"]);
}

#[test]
fn test_parent_relative_import() {
    let (unit, result) = workspace().resolve("app/sub", "page", &["../helpers"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["//app:main"]);
}

#[test]
fn test_own_source_yields_no_edge() {
    let (unit, result) = workspace().resolve("app", "main", &["./helpers"]);
    let report = assert_resolved(result);

    assert_no_edge(&unit, ":main");
    assert_eq!(unit.attr("deps"), None);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_repo_relative_identifier_resolves_through_walk() {
    let (unit, result) = workspace().resolve("app/sub", "page", &["lib/format"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["//lib"]);
}

// =============================================================================
// BARRELS
// =============================================================================

#[test]
fn test_directory_import_resolves_to_barrel_owner() {
    let (unit, result) = workspace().resolve("app", "main", &["../lib"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["//lib"]);
}

#[test]
fn test_dot_import_resolves_to_index_file() {
    let (unit, result) = workspace().resolve("app/sub", "page", &["."]);
    assert_resolved(result);

    // no index in app/sub or app; the root index.js is found last
    assert_eq!(deps(&unit), vec!["//:root"]);
}

#[test]
fn test_parent_directory_import_resolves_root_barrel() {
    let (unit, result) = workspace().resolve("app", "main", &[".."]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["//:root"]);
}

#[test]
fn test_collect_all_indexes_source_directories() {
    let build = |collect_all| {
        Workspace::new(JsConfig::new().with_collect_all(collect_all).with_quiet(true))
            .with_unit("lib/ui", "ui", UnitKind::Module, &["button/Button.jsx"])
            .with_unit("app", "main", UnitKind::Module, &["main.js"])
    };

    let (unit, result) = build(true).resolve("app", "main", &["../lib/ui/button"]);
    assert_resolved(result);
    assert_eq!(deps(&unit), vec!["//lib/ui"]);

    let (unit, result) = build(false).resolve("app", "main", &["../lib/ui/button"]);
    assert_resolved(result);
    assert_eq!(unit.attr("deps"), None);
}

// =============================================================================
// WEB ASSETS AND LOOSE FILES
// =============================================================================

#[test]
fn test_owned_asset_is_data_only() {
    let (unit, result) = workspace().resolve("app", "main", &["../assets/logo.svg"]);
    assert_resolved(result);

    assert!(deps(&unit).is_empty());
    assert_eq!(data(&unit), vec!["//assets"]);
}

#[test]
fn test_unowned_file_on_disk_is_data() {
    let ws = workspace().with_file("app/styles.css");
    let (unit, result) = ws.resolve("app/sub", "page", &["../styles.css"]);
    assert_resolved(result);

    assert!(deps(&unit).is_empty());
    assert_eq!(data(&unit), vec!["//app:styles.css"]);
}

#[test]
fn test_unowned_file_in_own_package_renders_relative() {
    let ws = workspace().with_file("app/theme.json");
    let (unit, result) = ws.resolve("app", "main", &["./theme.json"]);
    assert_resolved(result);

    assert_eq!(data(&unit), vec![":theme.json"]);
}

// =============================================================================
// WALK BOUNDARIES
// =============================================================================

#[test]
fn test_walk_stops_at_js_root() {
    let build = |config: JsConfig| {
        Workspace::new(config.with_quiet(true))
            .with_unit("apps", "shared", UnitKind::Module, &["shared.js"])
            .with_unit("apps/web/src", "main", UnitKind::Module, &["main.js"])
    };

    let (unit, result) = build(JsConfig::new()).resolve("apps/web/src", "main", &["./shared"]);
    assert_resolved(result);
    assert_eq!(deps(&unit), vec!["//apps:shared"]);

    let (unit, result) = build(JsConfig::new().with_js_root("apps/web")).resolve(
        "apps/web/src",
        "main",
        &["./shared"],
    );
    assert_resolved(result);
    assert_eq!(unit.attr("deps"), None);
}

#[test]
fn test_walk_stops_at_repo_root_when_js_root_is_elsewhere() {
    let ws = Workspace::new(JsConfig::new().with_js_root("other"))
        .with_unit("", "top", UnitKind::Module, &["top.js"])
        .with_unit("a/b", "main", UnitKind::Module, &["main.js"]);

    let (unit, result) = ws.resolve("a/b", "main", &["./top"]);
    assert_resolved(result);

    assert_eq!(deps(&unit), vec!["//:top"]);
}

// =============================================================================
// AMBIGUITY
// =============================================================================

#[test]
fn test_ambiguous_owners_abort_the_unit() {
    let ws = workspace()
        .with_unit("shared", "one", UnitKind::Module, &["util.js"])
        .with_unit("shared", "two", UnitKind::Module, &["util.js"]);

    let (_, result) = ws.resolve("app", "main", &["../shared/util"]);
    let err = result.unwrap_err();

    match &err {
        ResolveError::Ambiguous { import, owners } => {
            assert_eq!(import, "shared/util.js");
            assert_eq!(owners.len(), 2);
        }
        other => panic!("expected Ambiguous, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("//shared:one"), "{message}");
    assert!(message.contains("//shared:two"), "{message}");
}

#[test]
fn test_fatal_error_leaves_attributes_untouched() {
    let ws = workspace()
        .with_unit("shared", "one", UnitKind::Module, &["util.js"])
        .with_unit("shared", "two", UnitKind::Module, &["util.js"]);

    let mut unit = ws.unit("app", "main", &["./utils", "../shared/util"]);
    unit.set_attr("deps", vec!["//stale".to_string()]);

    assert!(ws.resolve_unit(&mut unit).is_err());
    assert_eq!(deps(&unit), vec!["//stale"]);
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn test_empty_result_removes_attributes() {
    let mut unit = workspace().unit("app", "main", &[]);
    unit.set_attr("deps", vec!["//stale".to_string()]);
    unit.set_attr("data", vec!["//stale:data".to_string()]);
    unit.set_attr("visibility", vec!["//visibility:public".to_string()]);

    assert_resolved(workspace().resolve_unit(&mut unit));

    assert_eq!(unit.attr("deps"), None);
    assert_eq!(unit.attr("data"), None);
    assert_eq!(unit.attr_names().collect::<Vec<_>>(), vec!["visibility"]);
}

#[test]
fn test_attributes_are_sorted_and_replaced() {
    let mut unit = workspace().unit("app/sub", "page", &["../utils", "../../lib", "../helpers"]);
    unit.set_attr("deps", vec!["//stale".to_string()]);

    assert_resolved(workspace().resolve_unit(&mut unit));

    assert_eq!(deps(&unit), vec!["//app:main", "//app:utils", "//lib"]);
}
