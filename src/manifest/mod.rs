//! Declarative description of what to verify.
//!
//! A [`Manifest`] lists the planners, the analyzer and the runtime
//! libraries the toolchain depends on. The built-in table mirrors the
//! standard `tools/` layout; a YAML manifest can replace any part of it.
//!
//! # Modules
//!
//! - [`schema`] - Manifest types deserialized from YAML
//! - [`defaults`] - Built-in table used when no manifest file exists
//! - [`loader`] - Manifest discovery and loading
//! - [`validator`] - Structural validation rules

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::builtin_manifest;
pub use loader::{discover_manifest, load_manifest_file, parse_manifest, MANIFEST_FILE_NAME};
pub use schema::{AnalyzerSpec, LibrarySpec, Manifest, OnMissing, ToolSpec};
pub use validator::{validate_manifest, ValidationError};
