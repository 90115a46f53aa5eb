//! Error types for installcheck operations.
//!
//! This module defines [`VerifyError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Individual probes never surface errors to the user; a missing artifact
//!   or an unresolvable dependency becomes a status line in the report
//! - `VerifyError` covers setup failures (manifest loading, working directory)
//! - Use `anyhow::Error` (via `VerifyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installcheck operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Manifest file not found at the given location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Manifest parsed but describes an invalid table.
    #[error("Invalid manifest: {message}")]
    ManifestValidationError { message: String },

    /// A library could not be loaded by the interpreter.
    #[error("Dependency '{module}' could not be resolved: {message}")]
    DependencyUnresolved { module: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installcheck operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
