//! Content-pattern helpers.
//!
//! Content patterns are plain glob strings ("./src/**/*.{rs,html}"). This
//! module checks their syntax and extracts the literal directory prefix a
//! pattern scans under, so validators can catch typo'd roots early.

use std::path::PathBuf;

use globset::Glob;

use crate::error::ValidationError;

/// Check that a content pattern is a non-empty, well-formed glob.
pub fn check_syntax(pattern: &str) -> Result<(), ValidationError> {
    if pattern.trim().is_empty() {
        return Err(ValidationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "pattern is empty".to_string(),
        });
    }

    Glob::new(pattern).map_err(|e| ValidationError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.kind().to_string(),
    })?;

    Ok(())
}

/// Return the literal (pre-wildcard) directory prefix of a pattern.
///
/// `./src/**/*.rs` scans under `src`; `assets/img/*.png` under
/// `assets/img`. Returns `None` when the pattern has no literal prefix
/// (e.g. `**/*.rs`), in which case the scan root is the project root
/// itself and there is nothing to check.
pub fn scan_root(pattern: &str) -> Option<PathBuf> {
    let normalized = pattern.trim_start_matches("./");

    let mut root = PathBuf::new();
    for component in normalized.split('/') {
        if component.contains(['*', '?', '[', '{']) {
            break;
        }
        root.push(component);
    }

    // The last component may be a plain filename ("./index.html"); it is
    // still a valid filesystem prefix, so keep it.
    if root.as_os_str().is_empty() {
        None
    } else {
        Some(root)
    }
}
