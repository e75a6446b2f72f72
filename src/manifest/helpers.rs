//! Locating `doclink.toml`.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::constants::MANIFEST_FILE_NAME;
use crate::core::DoclinkError;

/// Find the manifest in the current directory or one of its parents.
///
/// # Errors
///
/// [`DoclinkError::ManifestNotFound`] when the filesystem root is reached
/// without finding one.
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory. This may indicate a permission issue or corrupted filesystem")?;
    find_manifest_from(current)
}

/// Use `explicit_path` if given, otherwise search from the current directory.
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.exists() {
                Ok(path)
            } else {
                Err(DoclinkError::FileSystemError {
                    operation: "locating manifest".to_string(),
                    path: path.display().to_string(),
                }
                .into())
            }
        }
        None => find_manifest(),
    }
}

/// Search `current` and its parents for the manifest.
pub fn find_manifest_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        let manifest_path = current.join(MANIFEST_FILE_NAME);
        if manifest_path.exists() {
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(DoclinkError::ManifestNotFound.into());
        }
    }
}
