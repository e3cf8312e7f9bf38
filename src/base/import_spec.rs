use smol_str::SmolStr;
use std::fmt;

/// A key in the build index: an identifier in a given language namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportSpec {
    pub lang: SmolStr,
    pub imp: SmolStr,
}

impl ImportSpec {
    pub fn new(lang: impl Into<SmolStr>, imp: impl Into<SmolStr>) -> Self {
        Self {
            lang: lang.into(),
            imp: imp.into(),
        }
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lang, self.imp)
    }
}
