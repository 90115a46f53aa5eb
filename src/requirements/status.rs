//! Check outcome types.
//!
//! Each probed item produces a `CheckOutcome`; outcomes are grouped into
//! sections and sections into a `VerifyReport`.

use std::path::PathBuf;

/// The result of checking a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Artifact present at the given path.
    Found {
        /// The candidate that matched
        path: PathBuf,
    },

    /// Artifact absent but something else can stand in for it.
    Degraded {
        /// What the fallback means for the user
        note: Option<String>,
    },

    /// Artifact absent and nothing replaces it.
    Missing,

    /// Library loaded.
    Imported,

    /// Library could not be loaded.
    Unavailable {
        /// Why loading failed (for diagnostics only)
        reason: String,
    },
}

impl CheckStatus {
    /// Whether the item is available.
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Found { .. } | CheckStatus::Imported)
    }

    /// Whether the item is absent but has a fallback.
    pub fn is_degraded(&self) -> bool {
        matches!(self, CheckStatus::Degraded { .. })
    }

    /// Whether the item is absent with no fallback.
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckStatus::Missing | CheckStatus::Unavailable { .. })
    }
}

/// The status of one named item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Display name of the checked item
    pub subject: String,
    /// What the check found
    pub status: CheckStatus,
}

impl CheckOutcome {
    /// Create an outcome.
    pub fn new(subject: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            subject: subject.into(),
            status,
        }
    }

    /// Human-readable status line (without glyph).
    pub fn message(&self) -> String {
        match &self.status {
            CheckStatus::Found { .. } => format!("{} found", self.subject),
            CheckStatus::Degraded { note: Some(note) } => {
                format!("{} not found ({})", self.subject, note)
            }
            CheckStatus::Degraded { note: None } | CheckStatus::Missing => {
                format!("{} not found", self.subject)
            }
            CheckStatus::Imported => format!("{} imported successfully", self.subject),
            CheckStatus::Unavailable { .. } => format!("{} not available", self.subject),
        }
    }
}

/// A titled group of outcomes (planners, analyzer, libraries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading printed above the outcomes
    pub heading: String,
    /// Outcomes in check order
    pub outcomes: Vec<CheckOutcome>,
}

/// Every section of a completed verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Sections in the order they were checked
    pub sections: Vec<Section>,
}

impl VerifyReport {
    /// Iterate every outcome across sections.
    pub fn outcomes(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.sections.iter().flat_map(|s| s.outcomes.iter())
    }

    /// Number of available items.
    pub fn successes(&self) -> usize {
        self.outcomes().filter(|o| o.status.is_ok()).count()
    }

    /// Number of degraded items.
    pub fn warnings(&self) -> usize {
        self.outcomes().filter(|o| o.status.is_degraded()).count()
    }

    /// Number of hard failures.
    pub fn failures(&self) -> usize {
        self.outcomes().filter(|o| o.status.is_failure()).count()
    }

    /// Whether any hard failure was reported.
    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }
}
