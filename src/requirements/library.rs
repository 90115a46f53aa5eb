//! Library loading through an external interpreter.
//!
//! The libraries the toolchain depends on are Python modules, so a library
//! is "resolvable" when the configured interpreter can import it. The
//! [`LibraryLoader`] trait keeps the checker independent of how loading is
//! actually attempted.

use crate::error::{Result, VerifyError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Something that can attempt to load a library by name.
pub trait LibraryLoader {
    /// Attempt to load `module`.
    ///
    /// Returns `DependencyUnresolved` when the library is not available.
    fn load(&self, module: &str) -> Result<()>;
}

/// Loads libraries by running `<interpreter> [args...] -c "import <module>"`.
///
/// The interpreter is passed to the OS as one program path and its
/// arguments as separate argv entries; neither is split on whitespace.
#[derive(Debug, Clone)]
pub struct PythonImporter {
    interpreter: PathBuf,
    args: Vec<String>,
}

impl PythonImporter {
    /// Create an importer for the given interpreter executable.
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before `-c` (e.g., `run python` for `uv`).
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// The interpreter executable.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Arguments placed before `-c`.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn unresolved(module: &str, message: String) -> VerifyError {
        VerifyError::DependencyUnresolved {
            module: module.to_string(),
            message,
        }
    }
}

impl LibraryLoader for PythonImporter {
    fn load(&self, module: &str) -> Result<()> {
        if self.interpreter.as_os_str().is_empty() {
            return Err(Self::unresolved(module, "no interpreter configured".into()));
        }

        tracing::debug!(
            "Importing {} with {} {:?}",
            module,
            self.interpreter.display(),
            self.args
        );

        let output = Command::new(&self.interpreter)
            .args(&self.args)
            .arg("-c")
            .arg(format!("import {}", module))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                tracing::warn!(
                    "Could not run interpreter {}: {}",
                    self.interpreter.display(),
                    e
                );
                Self::unresolved(
                    module,
                    format!("failed to run {}: {}", self.interpreter.display(), e),
                )
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map(|line| line.trim().to_string())
            .unwrap_or_else(|| {
                format!("{} exited with {}", self.interpreter.display(), output.status)
            });
        tracing::debug!("Import of {} failed: {}", module, reason);

        Err(Self::unresolved(module, reason))
    }
}
