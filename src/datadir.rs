//! Data directory confinement module
//!
//! All client-supplied paths resolve under the configured data directory.
//! Resolution canonicalizes the candidate path and rejects anything that
//! escapes the root, so traversal attempts fail regardless of surface form.

use std::path::{Path, PathBuf};

use crate::logger;

/// Resolve a client-supplied path inside the data directory.
///
/// Accepts paths relative to the data directory, optionally spelled with a
/// leading `data/` or `/data/` alias. Returns `None` when the file does not
/// exist or the resolved path escapes the root. `data_dir` must already be
/// canonical (see `AppState::new`).
pub fn resolve(data_dir: &Path, raw: &str) -> Option<PathBuf> {
    let relative = raw
        .strip_prefix("/data/")
        .or_else(|| raw.strip_prefix("data/"))
        .unwrap_or(raw)
        .trim_start_matches('/');

    let candidate = data_dir.join(relative);

    // Canonicalization fails for missing files; that is a normal 404-class
    // outcome, not worth a warning.
    let canonical = candidate.canonicalize().ok()?;

    if canonical.starts_with(data_dir) {
        Some(canonical)
    } else {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {raw} -> {}",
            canonical.display()
        ));
        None
    }
}
