//! Atomic file writes using a temp-and-rename strategy.

use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Atomically write a string to a file.
///
/// Convenience wrapper around [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically write bytes to a file.
///
/// The content goes to a sibling temporary file first, is synced to disk and
/// then renamed over `path`. Parent directories are created as needed.
///
/// ```rust,no_run
/// use doclink_cli::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("target/javadoc-map.properties"), b"java.util=https://docs.oracle.com/\n")?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = fs::File::create(&temp_path).with_context(|| {
            format!(
                "Failed to create temp file: {}\n\nCheck file permissions and that directory exists",
                temp_path.display()
            )
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
