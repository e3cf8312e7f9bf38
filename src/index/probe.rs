//! Filesystem existence probes for files no unit owns.

use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

use crate::base::path;

/// Answers whether a repository-relative path is a regular file.
pub trait FileProbe {
    /// The file's name if `rel` is an existing regular file, `None` if it is
    /// missing or a directory.
    fn file_name(&self, rel: &str) -> io::Result<Option<String>>;
}

/// Probes the real filesystem under a repository root.
#[derive(Debug, Clone)]
pub struct DiskProbe {
    root: PathBuf,
}

impl DiskProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileProbe for DiskProbe {
    fn file_name(&self, rel: &str) -> io::Result<Option<String>> {
        let rel = path::clean(rel);
        if path::escapes_root(&rel) {
            return Ok(None);
        }
        match std::fs::metadata(self.root.join(&rel)) {
            Ok(meta) if meta.is_file() => Ok(Some(path::base_name(&rel).to_string())),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // a path component is a regular file
            Err(e) if e.kind() == io::ErrorKind::NotADirectory => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// An in-memory set of repository-relative file paths.
impl FileProbe for BTreeSet<String> {
    fn file_name(&self, rel: &str) -> io::Result<Option<String>> {
        let rel = path::clean(rel);
        Ok(self
            .contains(&rel)
            .then(|| path::base_name(&rel).to_string()))
    }
}
