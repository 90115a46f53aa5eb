//! Status vocabulary for report lines.
//!
//! `StatusKind` is the single set of status glyphs used in the report.
//! Every check outcome maps to exactly one kind.

use super::theme::Theme;
use crate::requirements::CheckStatus;

/// Canonical status kinds used in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Item is available.
    Success,
    /// Item is absent but a fallback exists.
    Warning,
    /// Item is absent with no fallback.
    Failed,
}

impl StatusKind {
    /// Glyph printed before the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Failed => "❌",
        }
    }

    /// Styled glyph using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Padding after the glyph. The warning sign with its emoji variation
    /// selector renders one column narrow in most terminals, so it gets an
    /// extra space to keep messages aligned.
    pub fn padding(self) -> &'static str {
        match self {
            Self::Warning => "  ",
            Self::Success | Self::Failed => " ",
        }
    }

    /// Format a status line: styled glyph + padding + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{}{}{}", self.styled(theme), self.padding(), msg)
    }
}

impl From<&CheckStatus> for StatusKind {
    fn from(status: &CheckStatus) -> Self {
        match status {
            CheckStatus::Found { .. } | CheckStatus::Imported => Self::Success,
            CheckStatus::Degraded { .. } => Self::Warning,
            CheckStatus::Missing | CheckStatus::Unavailable { .. } => Self::Failed,
        }
    }
}
