//! installcheck - Verify that the threat modelling toolchain is installed.
//!
//! installcheck probes for the PDDL planners, the plan validator, the Alloy
//! analyzer and the Python libraries the toolchain depends on, and prints
//! one pass/warn/fail line per item.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the verification run
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - What to verify: built-in table and YAML manifests
//! - [`requirements`] - Probes, check outcomes and the verifier
//! - [`ui`] - Status glyphs, theme and report writer
//!
//! # Example
//!
//! ```
//! use installcheck::requirements::first_match;
//! use std::path::{Path, PathBuf};
//!
//! let candidates = vec![PathBuf::from("val/validate"), PathBuf::from("val/build/Validate")];
//! let hit = first_match(&candidates, |p| p == Path::new("val/build/Validate"));
//! assert_eq!(hit, Some(&candidates[1]));
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod requirements;
pub mod ui;

pub use error::{Result, VerifyError};
