//! Visual theme and styling.

use console::Style;

/// Report colors.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success glyphs (green).
    pub success: Style,
    /// Style for warning glyphs (orange).
    pub warning: Style,
    /// Style for failure glyphs and errors (red bold).
    pub error: Style,
    /// Style for the banner (bold).
    pub header: Style,
    /// Style for section headings (bold).
    pub heading: Style,
    /// Style for the banner rule (dim).
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            heading: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            heading: Style::new(),
            border: Style::new(),
        }
    }

    /// Pick the theme for the current terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
