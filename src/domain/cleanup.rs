use std::fmt;
use std::path::PathBuf;

/// What happened to one persisted path during cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Deleted,
    AlreadyAbsent,
    Failed(String),
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupOutcome::Deleted => f.write_str("deleted"),
            CleanupOutcome::AlreadyAbsent => f.write_str("already absent"),
            CleanupOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Per-path outcomes of a cleanup pass, in the order the paths were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub entries: Vec<(PathBuf, CleanupOutcome)>,
}

impl CleanupReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn deleted(&self) -> usize {
        self.count(|o| matches!(o, CleanupOutcome::Deleted))
    }

    pub fn already_absent(&self) -> usize {
        self.count(|o| matches!(o, CleanupOutcome::AlreadyAbsent))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CleanupOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&CleanupOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, outcome)| pred(outcome)).count()
    }
}
