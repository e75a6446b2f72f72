//! Directory creation and file copies.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create `path` and all of its parents.
///
/// # Errors
///
/// Fails if the directory cannot be created or `path` exists and is not a
/// directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| {
            format!(
                "Failed to create directory: {}\n\nCheck directory permissions and path validity",
                path.display()
            )
        })?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Create the parent directory of a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

/// Copy a single file, replacing the destination.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    ensure_parent_dir(to)?;
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}
