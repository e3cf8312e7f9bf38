//! Import alias rewriting (`~/*` → `src/*`, `@app` → `packages/app`, …).

use regex::Regex;

use crate::error::ConfigError;

/// A single alias rule: a matched prefix and its replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    pub from: String,
    pub to: String,
}

impl AliasRule {
    /// Create a rule. A trailing `*` on both sides (tsconfig `paths` style)
    /// is stripped, so `~/*` → `src/*` behaves like `~/` → `src/`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Result<Self, ConfigError> {
        let from = from.into();
        let to = to.into();

        let (from_trimmed, to_trimmed) = match (from.strip_suffix('*'), to.strip_suffix('*')) {
            (Some(f), Some(t)) => (f.to_string(), t.to_string()),
            (None, None) => (from.clone(), to.clone()),
            _ => {
                return Err(ConfigError::Alias {
                    from,
                    to,
                    message: "wildcard must appear on both sides",
                });
            }
        };

        if from_trimmed.is_empty() {
            return Err(ConfigError::Alias {
                from,
                to,
                message: "alias prefix must not be empty",
            });
        }

        Ok(Self {
            from: from_trimmed,
            to: to_trimmed,
        })
    }
}

/// Ordered alias rules plus the combined, anchored pattern matching any of them.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
    pattern: Option<Regex>,
}

impl AliasTable {
    pub fn new(rules: Vec<AliasRule>) -> Result<Self, ConfigError> {
        let pattern = if rules.is_empty() {
            None
        } else {
            let alternation = rules
                .iter()
                .map(|rule| regex::escape(&rule.from))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!("^({alternation})"))?)
        };
        Ok(Self { rules, pattern })
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrite the matched prefix of `imp`, or return it unchanged.
    pub fn translate<'a>(&self, imp: &'a str) -> std::borrow::Cow<'a, str> {
        let Some(pattern) = &self.pattern else {
            return imp.into();
        };
        let Some(matched) = pattern.find(imp) else {
            return imp.into();
        };

        let prefix = matched.as_str();
        let to = self
            .rules
            .iter()
            .find(|rule| rule.from == prefix)
            .map(|rule| rule.to.as_str())
            .unwrap_or_default();

        format!("{to}{}", &imp[prefix.len()..]).into()
    }
}
