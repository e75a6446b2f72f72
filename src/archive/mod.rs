//! Read access to javadoc jars.
//!
//! [`JarArchive`] is a thin wrapper around a [`zip::ZipArchive`] that offers
//! the three operations output assembly needs: list entry names matching a
//! pattern, copy an entry to a file, and read an entry as text lines.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};
use tracing::warn;
use zip::ZipArchive;

use crate::core::DoclinkError;
use crate::utils::atomic_write;

/// An opened jar (zip) file.
pub struct JarArchive {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
}

impl std::fmt::Debug for JarArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JarArchive").field("path", &self.path).finish_non_exhaustive()
    }
}

impl JarArchive {
    /// Open `path` for reading.
    ///
    /// # Errors
    ///
    /// [`DoclinkError::ArchiveError`] if the file cannot be opened or is not a
    /// zip archive.
    pub fn open(path: &Path) -> Result<Self> {
        let archive_error = |reason: String| DoclinkError::ArchiveError {
            path: path.display().to_string(),
            reason,
        };

        let file = File::open(path).map_err(|e| archive_error(e.to_string()))?;
        let archive = ZipArchive::new(BufReader::new(file)).map_err(|e| archive_error(e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// Names of top-level file entries whose full name matches `pattern`, in
    /// archive order.
    ///
    /// A matching entry whose path is not a single component, or that would
    /// escape the extraction directory, is skipped with a warning.
    pub fn list_entries(&mut self, pattern: &Regex) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for index in 0..self.archive.len() {
            let entry = self.archive.by_index_raw(index).map_err(|e| DoclinkError::ArchiveError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
            if entry.is_dir() || !pattern.is_match(entry.name()) {
                continue;
            }

            let top_level = entry.enclosed_name().is_some_and(|path| {
                let mut components = path.components();
                matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
            });
            if top_level {
                names.push(entry.name().to_string());
            } else {
                warn!("Ignoring nested entry '{}' in {}", entry.name(), self.path.display());
            }
        }
        Ok(names)
    }

    /// Whether the archive has an entry called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Read an entry completely.
    pub fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let path = self.path.display().to_string();
        let mut entry = self.archive.by_name(name).map_err(|e| DoclinkError::ArchiveError {
            path: path.clone(),
            reason: format!("entry '{name}': {e}"),
        })?;

        let mut content = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or_default());
        entry
            .read_to_end(&mut content)
            .with_context(|| format!("Failed to read entry '{name}' of {path}"))?;
        Ok(content)
    }

    /// Copy an entry to `destination`, replacing an existing file.
    pub fn copy_entry(&mut self, name: &str, destination: &Path) -> Result<()> {
        let content = self.read_entry(name)?;
        atomic_write(destination, &content)
            .with_context(|| format!("Failed to extract '{name}' from {}", self.path.display()))
    }

    /// An entry decoded as UTF-8 (lossily) and split into lines.
    pub fn read_entry_lines(&mut self, name: &str) -> Result<Vec<String>> {
        let content = self.read_entry(name)?;
        Ok(String::from_utf8_lossy(&content).lines().map(str::to_string).collect())
    }
}
