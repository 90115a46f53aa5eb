//! The installation verifier.
//!
//! `InstallationVerifier` runs the three check groups against a manifest.
//! No check can fail the run: absent artifacts and unloadable libraries
//! become outcomes, and each item is probed on its own.

use crate::manifest::{Manifest, OnMissing, ToolSpec};
use crate::requirements::library::LibraryLoader;
use crate::requirements::probe::{first_existing, resolve_candidate};
use crate::requirements::status::{CheckOutcome, CheckStatus, Section, VerifyReport};
use std::path::{Path, PathBuf};

/// Heading for the planner section.
pub const PLANNERS_HEADING: &str = "Testing PDDL planners...";
/// Heading for the analyzer section.
pub const ANALYZER_HEADING: &str = "Testing Alloy...";
/// Heading for the library section.
pub const LIBRARIES_HEADING: &str = "Testing Python dependencies...";

/// Checks a manifest's planners, analyzer and libraries.
pub struct InstallationVerifier<'a> {
    manifest: &'a Manifest,
    root: PathBuf,
    loader: &'a dyn LibraryLoader,
}

impl<'a> InstallationVerifier<'a> {
    /// Create a verifier resolving relative paths against `root`.
    pub fn new(manifest: &'a Manifest, root: &Path, loader: &'a dyn LibraryLoader) -> Self {
        Self {
            manifest,
            root: root.to_path_buf(),
            loader,
        }
    }

    /// Check every planner and validator, in manifest order.
    pub fn check_planners(&self) -> Section {
        Section {
            heading: PLANNERS_HEADING.to_string(),
            outcomes: self
                .manifest
                .planners
                .iter()
                .map(|tool| self.check_tool(tool))
                .collect(),
        }
    }

    /// Check a single tool against its candidate paths.
    pub fn check_tool(&self, tool: &ToolSpec) -> CheckOutcome {
        let status = match first_existing(&self.root, &tool.paths) {
            Some(path) => CheckStatus::Found { path },
            None => match tool.severity() {
                OnMissing::Degrade => CheckStatus::Degraded {
                    note: tool.note.clone(),
                },
                OnMissing::Fail => CheckStatus::Missing,
            },
        };
        tracing::debug!("{}: {:?}", tool.name, status);
        CheckOutcome::new(&tool.name, status)
    }

    /// Check the analyzer artifact.
    pub fn check_analyzer(&self) -> Section {
        let analyzer = &self.manifest.analyzer;
        let path = resolve_candidate(&self.root, &analyzer.path);
        tracing::debug!("Probe {}", path.display());

        let status = if path.exists() {
            CheckStatus::Found { path }
        } else {
            CheckStatus::Missing
        };

        Section {
            heading: ANALYZER_HEADING.to_string(),
            outcomes: vec![CheckOutcome::new(&analyzer.name, status)],
        }
    }

    /// Try to load every library; one failure never stops the rest.
    pub fn check_libraries(&self) -> Section {
        let outcomes = self
            .manifest
            .libraries
            .modules
            .iter()
            .map(|module| {
                let status = match self.loader.load(module) {
                    Ok(()) => CheckStatus::Imported,
                    Err(e) => CheckStatus::Unavailable {
                        reason: e.to_string(),
                    },
                };
                CheckOutcome::new(module, status)
            })
            .collect();

        Section {
            heading: LIBRARIES_HEADING.to_string(),
            outcomes,
        }
    }

    /// Run planners, analyzer and libraries, in that order.
    pub fn run_all(&self) -> VerifyReport {
        VerifyReport {
            sections: vec![
                self.check_planners(),
                self.check_analyzer(),
                self.check_libraries(),
            ],
        }
    }
}
