use crate::base::Label;

/// What a single lookup (override, index, then disk) produced for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one other unit provides the target.
    Resolved(Label),
    /// The importing unit provides the target itself.
    SelfReferential,
    /// No unit provides the target but a plain file with this name exists.
    FileOnDisk(String),
    /// Nothing provides the target.
    Unresolved,
    /// Several units provide the target.
    Ambiguous(Vec<Label>),
    /// The lookup itself failed.
    Error(String),
}

impl Outcome {
    /// Whether the lookup settled the target (successfully or not) and
    /// probing should stop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Unresolved)
    }

    pub fn label(&self) -> Option<&Label> {
        match self {
            Outcome::Resolved(label) => Some(label),
            _ => None,
        }
    }
}
