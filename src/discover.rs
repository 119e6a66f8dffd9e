//! Config-file discovery for directory mode.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Collect `.conf` files under a directory, recursively. Sorted and
/// deduplicated for deterministic output.
pub fn conf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("**").join("*.conf");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-unicode path: {}", dir.display()))?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("invalid glob pattern: {pattern}"))?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files.dedup();
    Ok(files)
}
