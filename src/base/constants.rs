//! Domain constants: language tag, runtime builtins, extensions and prefixes.

/// Language tag used for every import spec this crate indexes or queries.
pub const LANG: &str = "js";

/// Sentinel identifier used to look up the manifest owner.
pub const MANIFEST_FILE: &str = "package.json";

/// Label used for manifest references when no unit owns `package.json`.
pub const DEFAULT_MANIFEST_LABEL: &str = "//:package";

/// Name of the data target holding the manifest, attached to test units.
pub const MANIFEST_DATA_TARGET: &str = "package_json";

/// Default label prefix for external packages.
pub const DEFAULT_NPM_LABEL: &str = "@npm//";

/// Canonical name of a directory-level aggregation (barrel) module.
pub const BARREL_NAME: &str = "index";

/// Scheme prefix that always denotes a runtime builtin.
pub const BUILTIN_SCHEME: &str = "node:";

/// Package providing type declarations for every runtime builtin.
pub const BUILTIN_TYPES_PACKAGE: &str = "@types/node";

/// Scope holding type-declaration companion packages.
pub const TYPES_SCOPE: &str = "@types";

/// Prefixes that can never name an external package.
pub const LOCAL_PREFIXES: &[&str] = &[".", "/", "../", "~/", "@/", "~~/"];

/// Source extensions of typed modules, probed first.
pub const TS_EXTENSIONS: &[&str] = &[".ts", ".tsx"];

/// Source extensions of untyped modules, probed after the typed ones.
pub const JS_EXTENSIONS: &[&str] = &[".js", ".jsx", ".mjs", ".cjs"];

/// Suffixes treated as non-code assets unless a scope overrides them.
pub const DEFAULT_WEB_ASSET_SUFFIXES: &[&str] = &[
    ".json", ".css", ".scss", ".sass", ".less", ".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp",
    ".ico", ".woff", ".woff2", ".ttf", ".html",
];

/// Prefix of dev dependencies attached to test units.
pub const TEST_FRAMEWORK_PREFIX: &str = "jest";

/// Prefix of test-framework type packages attached to test units (compile-time only).
pub const TEST_FRAMEWORK_TYPES_PREFIX: &str = "@types/jest";

/// Test-framework packages that are never attached automatically.
pub const TEST_FRAMEWORK_EXCLUDED: &[&str] = &["jest-cli", "jest-junit"];

/// Runtime-provided modules requiring no dependency edge.
pub const BUILTINS: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];
