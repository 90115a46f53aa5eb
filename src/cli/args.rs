//! CLI argument definitions.
//!
//! Invoked without arguments, installcheck verifies the current directory
//! against the built-in table and always exits 0.

use clap::Parser;
use std::path::PathBuf;

/// installcheck - Verify the threat modelling toolchain is installed.
#[derive(Debug, Parser)]
#[command(name = "installcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a manifest file (overrides .installcheck.yml in the root)
    #[arg(short, long, env = "INSTALLCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory relative tool paths resolve against (defaults to current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Exit with status 1 when a required item is missing
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
