//! The verification run.
//!
//! Prints the banner, the planner, analyzer and library sections separated
//! by blank lines, and the completion line. Missing items only change the
//! exit code when strict mode is on.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::manifest::{discover_manifest, Manifest};
use crate::requirements::{InstallationVerifier, LibraryLoader, PythonImporter, VerifyReport};
use crate::ui::{Output, COMPLETE_MESSAGE};

/// Result of a verification command.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,

    /// Outcomes of every check.
    pub report: VerifyReport,
}

/// Run every check and write the report.
///
/// The report is written section by section as checks complete.
pub fn run_verification<W: Write>(
    manifest: &Manifest,
    root: &Path,
    loader: &dyn LibraryLoader,
    output: &mut Output<W>,
) -> Result<VerifyReport> {
    let verifier = InstallationVerifier::new(manifest, root, loader);
    let mut report = VerifyReport::default();

    output.banner(&manifest.title)?;

    let planners = verifier.check_planners();
    output.section(&planners)?;
    report.sections.push(planners);
    output.blank()?;

    let analyzer = verifier.check_analyzer();
    output.section(&analyzer)?;
    report.sections.push(analyzer);
    output.blank()?;

    let libraries = verifier.check_libraries();
    output.section(&libraries)?;
    report.sections.push(libraries);

    output.blank()?;
    output.println(COMPLETE_MESSAGE)?;

    tracing::debug!(
        "Verification finished: {} ok, {} warnings, {} failures",
        report.successes(),
        report.warnings(),
        report.failures()
    );

    Ok(report)
}

/// The `installcheck` command: resolve inputs, then run the verification.
#[derive(Debug, Clone)]
pub struct VerifyCommand {
    root: PathBuf,
    config: Option<PathBuf>,
    strict: bool,
}

impl VerifyCommand {
    /// Create a command for the given verification root.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            config: None,
            strict: false,
        }
    }

    /// Build the command from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to read the current directory")?,
        };

        Ok(Self {
            root,
            config: cli.config.clone(),
            strict: cli.strict,
        })
    }

    /// Use an explicit manifest file.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Exit non-zero when a required item is missing.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load the manifest and run the verification.
    pub fn execute<W: Write>(&self, output: &mut Output<W>) -> Result<CommandResult> {
        let manifest = discover_manifest(&self.root, self.config.as_deref())?;
        let importer = PythonImporter::new(manifest.libraries.interpreter.clone())
            .with_args(manifest.libraries.interpreter_args.iter().cloned());
        let report = run_verification(&manifest, &self.root, &importer, output)?;

        let exit_code = if self.strict && report.has_failures() {
            1
        } else {
            0
        };

        Ok(CommandResult {
            success: exit_code == 0,
            exit_code,
            report,
        })
    }
}
