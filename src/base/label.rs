//! Build labels.
//!
//! A label names a build unit: `@repo//pkg/path:name`. Labels printed onto a
//! unit are made relative to that unit's package (`:name`) or repository
//! (`//pkg:name`) where possible.

use smol_str::SmolStr;
use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a label string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("empty label")]
    Empty,

    #[error("label {0:?} must start with '//', '@' or ':'")]
    MissingRoot(String),

    #[error("label {0:?} has an empty target name")]
    EmptyName(String),
}

/// A build label.
///
/// `repo` is empty for the main repository. A `relative` label only carries a
/// name and is interpreted against the package it is written in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    pub repo: SmolStr,
    pub pkg: SmolStr,
    pub name: SmolStr,
    pub relative: bool,
}

impl Label {
    /// Create an absolute label in the main repository.
    pub fn new(pkg: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            repo: SmolStr::default(),
            pkg: pkg.into(),
            name: name.into(),
            relative: false,
        }
    }

    /// Set the repository.
    pub fn with_repo(mut self, repo: impl Into<SmolStr>) -> Self {
        self.repo = repo.into();
        self
    }

    /// Create a package-relative label (`:name`).
    pub fn relative(name: impl Into<SmolStr>) -> Self {
        Self {
            repo: SmolStr::default(),
            pkg: SmolStr::default(),
            name: name.into(),
            relative: true,
        }
    }

    /// Parse `@repo//pkg:name`, `//pkg:name`, `//pkg` or `:name`.
    pub fn parse(s: &str) -> Result<Self, LabelError> {
        if s.is_empty() {
            return Err(LabelError::Empty);
        }
        if let Some(name) = s.strip_prefix(':') {
            if name.is_empty() {
                return Err(LabelError::EmptyName(s.to_string()));
            }
            return Ok(Self::relative(name));
        }

        let (repo, rest) = match s.strip_prefix('@') {
            Some(stripped) => match stripped.find("//") {
                Some(idx) => (&stripped[..idx], &stripped[idx..]),
                None => return Err(LabelError::MissingRoot(s.to_string())),
            },
            None => ("", s),
        };
        let rest = rest
            .strip_prefix("//")
            .ok_or_else(|| LabelError::MissingRoot(s.to_string()))?;

        let (pkg, name) = match rest.split_once(':') {
            Some((pkg, name)) => (pkg, name),
            // `//foo/bar` is shorthand for `//foo/bar:bar`
            None => (rest, rest.rsplit('/').next().unwrap_or(rest)),
        };
        if name.is_empty() {
            return Err(LabelError::EmptyName(s.to_string()));
        }

        Ok(Self::new(pkg, name).with_repo(repo))
    }

    /// Make this label absolute, interpreting a relative label against `repo`/`pkg`.
    pub fn abs(&self, repo: &str, pkg: &str) -> Label {
        if !self.relative {
            return self.clone();
        }
        Label::new(pkg, self.name.clone()).with_repo(repo)
    }

    /// Shorten this label for printing inside `repo`/`pkg`.
    pub fn rel(&self, repo: &str, pkg: &str) -> Label {
        if self.relative || self.repo != repo {
            return self.clone();
        }
        if self.pkg == pkg {
            return Label::relative(self.name.clone());
        }
        Label::new(self.pkg.clone(), self.name.clone())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            return write!(f, ":{}", self.name);
        }
        if !self.repo.is_empty() {
            write!(f, "@{}", self.repo)?;
        }
        let base = self.pkg.rsplit('/').next().unwrap_or(&self.pkg);
        if !self.pkg.is_empty() && base == self.name {
            write!(f, "//{}", self.pkg)
        } else {
            write!(f, "//{}:{}", self.pkg, self.name)
        }
    }
}
