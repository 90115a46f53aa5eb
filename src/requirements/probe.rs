//! Ordered search over candidate install locations.
//!
//! A tool may live in one of several layouts depending on how it was
//! built (e.g., `val/validate` vs `val/build/Validate`). Candidates are
//! listed highest priority first and the first existing one wins.
//!
//! # Example
//!
//! ```no_run
//! use installcheck::requirements::probe::first_existing;
//! use std::path::{Path, PathBuf};
//!
//! let candidates = vec![
//!     PathBuf::from("tools/planners/val/validate"),
//!     PathBuf::from("tools/planners/val/build/validate"),
//! ];
//! if let Some(found) = first_existing(Path::new("."), &candidates) {
//!     println!("validator at {}", found.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Resolve a candidate against the verification root.
///
/// Absolute candidates are returned unchanged.
pub fn resolve_candidate(root: &Path, candidate: &Path) -> PathBuf {
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

/// Return the first candidate accepted by `exists`, in order.
///
/// Candidates after the first match are never passed to `exists`.
pub fn first_match<'a, F>(candidates: &'a [PathBuf], mut exists: F) -> Option<&'a PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    candidates.iter().find(|candidate| exists(candidate))
}

/// Return the resolved path of the first candidate present on disk.
pub fn first_existing(root: &Path, candidates: &[PathBuf]) -> Option<PathBuf> {
    first_match(candidates, |candidate| {
        let resolved = resolve_candidate(root, candidate);
        let present = resolved.exists();
        tracing::debug!("Probe {}: {}", resolved.display(), present);
        present
    })
    .map(|candidate| resolve_candidate(root, candidate))
}
