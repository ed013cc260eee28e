// src/models/outcome.rs

/// The result of linting one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LintOutcome {
    /// The filename was already clean; no rename was attempted.
    Unchanged,
    /// The file was renamed.
    Renamed { old: String, new: String },
    /// The rename failed, most likely because a file with the new name
    /// already exists. The original file is untouched.
    Conflict { old: String, new: String },
    /// The rewrite stripped every character; the file was left untouched.
    EmptyName { old: String },
}

impl LintOutcome {
    /// User-facing report line. `Unchanged` stays quiet.
    #[must_use]
    pub fn report(&self) -> Option<String> {
        match self {
            Self::Unchanged => None,
            Self::Renamed { old, new } => Some(format!("\"{old}\" renamed to \"{new}\"")),
            Self::Conflict { old, new } => Some(format!(
                "Unable to rename \"{old}\" to \"{new}\". There probably already exists a file with this name"
            )),
            Self::EmptyName { old } => Some(format!(
                "Unable to rename \"{old}\": the configured replacements would leave an empty filename"
            )),
        }
    }
}

/// Counters over a batch of lint outcomes.
#[derive(Debug, Default)]
pub struct LintSummary {
    pub unchanged: u64,
    pub renamed: u64,
    pub conflicts: u64,
    pub emptied: u64,
}

impl LintSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unchanged: 0,
            renamed: 0,
            conflicts: 0,
            emptied: 0,
        }
    }

    pub fn record(&mut self, outcome: &LintOutcome) {
        match outcome {
            LintOutcome::Unchanged => self.unchanged = self.unchanged.saturating_add(1),
            LintOutcome::Renamed { .. } => self.renamed = self.renamed.saturating_add(1),
            LintOutcome::Conflict { .. } => self.conflicts = self.conflicts.saturating_add(1),
            LintOutcome::EmptyName { .. } => self.emptied = self.emptied.saturating_add(1),
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.unchanged
            .saturating_add(self.renamed)
            .saturating_add(self.conflicts)
            .saturating_add(self.emptied)
    }
}
