//! Manifest schema types.
//!
//! Every top-level section falls back to the built-in table when omitted,
//! so a manifest only needs to spell out what differs.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults;

/// Root manifest structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Banner printed at the top of the report.
    pub title: String,

    /// Planners and validators, checked in order.
    pub planners: Vec<ToolSpec>,

    /// The model-checking analyzer.
    pub analyzer: AnalyzerSpec,

    /// Runtime libraries expected to be importable.
    pub libraries: LibrarySpec,
}

impl Default for Manifest {
    fn default() -> Self {
        defaults::builtin_manifest()
    }
}

/// What a missing tool means for the rest of the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnMissing {
    /// Another tool can stand in; report a warning.
    Degrade,
    /// Nothing replaces it; report a failure.
    Fail,
}

/// A planner or validator located by one or more candidate paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSpec {
    /// Display name (e.g., "FF planner").
    pub name: String,

    /// Candidate install locations, highest priority first.
    pub paths: Vec<PathBuf>,

    /// Severity when no candidate exists. Defaults to `degrade` for tools
    /// with several candidate layouts and `fail` otherwise.
    #[serde(default)]
    pub on_missing: Option<OnMissing>,

    /// Explanation appended to the warning line.
    #[serde(default)]
    pub note: Option<String>,
}

impl ToolSpec {
    /// Severity applied when none of the candidates exist.
    pub fn severity(&self) -> OnMissing {
        match self.on_missing {
            Some(explicit) => explicit,
            None if self.paths.len() > 1 => OnMissing::Degrade,
            None => OnMissing::Fail,
        }
    }
}

/// The analyzer artifact (single path, no fallback).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerSpec {
    /// Display name (e.g., "Alloy Analyzer").
    pub name: String,
    /// Path to the analyzer artifact.
    pub path: PathBuf,
}

impl Default for AnalyzerSpec {
    fn default() -> Self {
        defaults::builtin_analyzer()
    }
}

/// Libraries to import through an interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibrarySpec {
    /// Interpreter executable used to attempt each import. Taken as a
    /// single path, spaces included.
    pub interpreter: PathBuf,
    /// Arguments passed to the interpreter before `-c "import ..."`
    /// (e.g., `[run, python]` with `interpreter: uv`).
    pub interpreter_args: Vec<String>,
    /// Module names, checked in order.
    pub modules: Vec<String>,
}

impl Default for LibrarySpec {
    fn default() -> Self {
        defaults::builtin_libraries()
    }
}
