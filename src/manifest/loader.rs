//! Manifest discovery and loading.
//!
//! Priority order (first match wins):
//! 1. An explicit path (`--config` / `INSTALLCHECK_CONFIG`)
//! 2. `.installcheck.yml` in the verification root
//! 3. The built-in table

use crate::error::{Result, VerifyError};
use crate::manifest::schema::Manifest;
use crate::manifest::validator::validate_manifest;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the verification root.
pub const MANIFEST_FILE_NAME: &str = ".installcheck.yml";

/// Find and load the manifest for a verification root.
///
/// # Errors
///
/// Returns `ManifestNotFound` if `explicit` is given but doesn't exist.
/// Returns `ManifestParseError` or `ManifestValidationError` for bad files.
pub fn discover_manifest(root: &Path, explicit: Option<&Path>) -> Result<Manifest> {
    if let Some(path) = explicit {
        tracing::info!("Using manifest {}", path.display());
        return load_manifest_file(path);
    }

    let local = root.join(MANIFEST_FILE_NAME);
    if local.is_file() {
        tracing::info!("Using manifest {}", local.display());
        return load_manifest_file(&local);
    }

    tracing::debug!("No manifest at {}, using built-in table", local.display());
    Ok(Manifest::default())
}

/// Load a single manifest file, then validate it.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
/// Returns `ManifestParseError` if the YAML is invalid.
/// Returns `ManifestValidationError` if the table breaks a rule.
pub fn load_manifest_file(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse and validate YAML manifest content.
///
/// `source_path` is only used for error reporting.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    // An empty file means "all defaults"; serde_yaml reads it as null.
    let manifest: Manifest = if content.trim().is_empty() {
        Manifest::default()
    } else {
        serde_yaml::from_str(content).map_err(|e| VerifyError::ManifestParseError {
            path: PathBuf::from(source_path),
            message: e.to_string(),
        })?
    };

    let errors = validate_manifest(&manifest);
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(VerifyError::ManifestValidationError { message });
    }

    Ok(manifest)
}
