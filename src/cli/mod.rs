//! Command-line interface for installcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`verify`] - The verification run and its command wrapper

pub mod args;
pub mod verify;

pub use args::Cli;
pub use verify::{run_verification, CommandResult, VerifyCommand};
