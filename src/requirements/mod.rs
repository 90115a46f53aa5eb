//! Installation checks.
//!
//! This module answers one question per item: is this planner, analyzer
//! or library available on the machine? Every probe is independent; a
//! missing item is reported, never raised.
//!
//! # Modules
//!
//! - [`probe`] - Ordered candidate search over filesystem paths
//! - [`library`] - Library loading through an external interpreter
//! - [`status`] - Check outcome and report types
//! - [`checker`] - The verifier running the three check groups

pub mod checker;
pub mod library;
pub mod probe;
pub mod status;

pub use checker::InstallationVerifier;
pub use library::{LibraryLoader, PythonImporter};
pub use probe::{first_existing, first_match, resolve_candidate};
pub use status::{CheckOutcome, CheckStatus, Section, VerifyReport};
