//! Report writer.

use std::io::{self, Stdout, Write};

use super::icons::StatusKind;
use super::theme::Theme;
use crate::requirements::{CheckOutcome, Section};

/// Width of the rule under the banner.
pub const RULE_WIDTH: usize = 50;

/// Line printed once every check has run.
pub const COMPLETE_MESSAGE: &str = "Test complete!";

/// Writes report lines to any `Write` sink.
#[derive(Debug)]
pub struct Output<W: Write> {
    writer: W,
    theme: Theme,
}

impl Output<Stdout> {
    /// Write to standard output.
    pub fn stdout(theme: Theme) -> Self {
        Self::new(io::stdout(), theme)
    }
}

impl<W: Write> Output<W> {
    /// Create a writer over `writer`.
    pub fn new(writer: W, theme: Theme) -> Self {
        Self { writer, theme }
    }

    /// Write one line.
    pub fn println(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", msg)
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Banner title followed by a rule.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        let title = self.theme.header.apply_to(title).to_string();
        let rule = self.theme.border.apply_to("=".repeat(RULE_WIDTH)).to_string();
        self.println(&title)?;
        self.println(&rule)
    }

    /// A status line for one outcome.
    pub fn outcome(&mut self, outcome: &CheckOutcome) -> io::Result<()> {
        let line = StatusKind::from(&outcome.status).format(&self.theme, &outcome.message());
        self.println(&line)
    }

    /// A section heading and all of its outcomes.
    pub fn section(&mut self, section: &Section) -> io::Result<()> {
        let heading = self.theme.heading.apply_to(&section.heading).to_string();
        self.println(&heading)?;
        for outcome in &section.outcomes {
            self.outcome(outcome)?;
        }
        self.writer.flush()
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
