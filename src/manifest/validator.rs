//! Manifest validation rules.
//!
//! This module validates a manifest for correctness:
//! - Tools must have a name and at least one candidate path
//! - Tools with several candidate layouts may only degrade, never fail
//! - The analyzer must name a path
//! - Library names must be dotted identifiers

use super::schema::{Manifest, OnMissing};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a manifest and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_manifest(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_tools(manifest));
    errors.extend(validate_analyzer(manifest));
    errors.extend(validate_libraries(manifest));

    errors
}

fn validate_tools(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (idx, tool) in manifest.planners.iter().enumerate() {
        if tool.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-name",
                format!("Planner #{} has an empty name", idx + 1),
            ));
        }

        if tool.paths.is_empty() {
            errors.push(ValidationError::new(
                "missing-paths",
                format!("Tool '{}' has no candidate paths", tool.name),
            ));
        }

        if tool.paths.len() > 1 && tool.on_missing == Some(OnMissing::Fail) {
            errors.push(ValidationError::new(
                "multi-candidate-fail",
                format!(
                    "Tool '{}' lists {} candidate paths and must use 'on_missing: degrade'",
                    tool.name,
                    tool.paths.len()
                ),
            ));
        }
    }

    errors
}

fn validate_analyzer(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if manifest.analyzer.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "missing-name",
            "Analyzer has an empty name".to_string(),
        ));
    }

    if manifest.analyzer.path.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "missing-paths",
            format!("Analyzer '{}' has no path", manifest.analyzer.name),
        ));
    }

    errors
}

fn validate_libraries(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if manifest.libraries.interpreter.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "missing-interpreter",
            "Library interpreter must not be empty".to_string(),
        ));
    }

    for module in &manifest.libraries.modules {
        if !is_module_name(module) {
            errors.push(ValidationError::new(
                "invalid-module",
                format!("'{}' is not a valid module name", module),
            ));
        }
    }

    errors
}

/// Whether `name` is a dotted identifier such as `yaml` or `matplotlib.pyplot`.
pub fn is_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
