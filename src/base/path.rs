//! Lexical path helpers for repository-relative, `/`-separated paths.
//!
//! These never touch the filesystem. The repository root is spelled `"."`.

/// Lexically clean a path: collapse `//`, drop `.` segments and fold `..`
/// against preceding segments. Leading `..` segments that escape the root are
/// kept. An empty result is `"."`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join two path fragments and clean the result.
pub fn join(base: &str, rest: &str) -> String {
    if base.is_empty() {
        return clean(rest);
    }
    if rest.is_empty() {
        return clean(base);
    }
    clean(&format!("{base}/{rest}"))
}

/// The directory part of a path (`"."` when there is none).
pub fn dir(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => clean(&path[..idx]),
        None => ".".to_string(),
    }
}

/// The last segment of a path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// The parent directory of a cleaned path, or `None` at the root.
pub fn parent(path: &str) -> Option<String> {
    if path == "." || path.is_empty() || path == "/" {
        return None;
    }
    Some(dir(path))
}

/// Whether a cleaned relative path climbs out of the repository root.
pub fn escapes_root(path: &str) -> bool {
    path == ".." || path.starts_with("../") || path.starts_with('/')
}

/// Package path as stored on labels: the root package is the empty string.
pub fn as_pkg(dir: &str) -> &str {
    if dir == "." { "" } else { dir }
}
