//! Terminal output for the verification report.
//!
//! This module provides:
//! - [`StatusKind`] glyphs for success, warning and failure lines
//! - [`Theme`] colors, disabled for non-TTY output or `NO_COLOR`
//! - [`Output`] a line writer over any `Write` sink
//!
//! # Example
//!
//! ```
//! use installcheck::requirements::{CheckOutcome, CheckStatus};
//! use installcheck::ui::{Output, Theme};
//!
//! let mut out = Output::new(Vec::new(), Theme::plain());
//! out.outcome(&CheckOutcome::new("yaml", CheckStatus::Imported)).unwrap();
//! let text = String::from_utf8(out.into_inner()).unwrap();
//! assert_eq!(text, "✅ yaml imported successfully\n");
//! ```

pub mod icons;
pub mod output;
pub mod theme;

pub use icons::StatusKind;
pub use output::{Output, COMPLETE_MESSAGE, RULE_WIDTH};
pub use theme::{should_use_colors, Theme};
