//! Options file emission and offline index extraction.
//!
//! ```text
//! -link https://docs.example.com/lib-a/1.2.3/
//! -linkoffline https://www.slf4j.org/apidocs/ target/javadoc-options/org.slf4j:slf4j-api
//! ```
//!
//! `-link` lines come first, in link set order. `-linkoffline` lines follow,
//! grouped by URL; every artifact gets its own directory named after its
//! versionless key, holding the index files extracted from its javadoc jar.

use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

use super::plain_links;
use crate::archive::JarArchive;
use crate::constants::{ELEMENT_LIST, INDEX_ENTRY_PATTERN, PACKAGE_LIST};
use crate::links::LinkSet;
use crate::models::ResolvedArtifact;
use crate::resolver::ResolvedOfflineMap;
use crate::utils::fs::{copy_file, ensure_dir};
use crate::utils::safe_write;

/// One line of the options file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `-link <url>`
    Link(Url),
    /// `-linkoffline <url> <directory>`
    LinkOffline { url: Url, directory: PathBuf },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(url) => write!(f, "-link {url}"),
            Self::LinkOffline { url, directory } => {
                write!(f, "-linkoffline {url} {}", quote_path(directory))
            }
        }
    }
}

fn quote_path(path: &Path) -> String {
    let text = path.display().to_string();
    if text.chars().any(char::is_whitespace) {
        format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
    } else {
        text
    }
}

/// Extracts index files from javadoc jars into per-artifact directories.
#[derive(Debug, Clone)]
pub struct OfflineExtractor {
    root: PathBuf,
    pattern: Regex,
}

impl OfflineExtractor {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            pattern: Regex::new(INDEX_ENTRY_PATTERN).context("Invalid index entry pattern")?,
        })
    }

    /// Directory of one artifact's extracted index.
    pub fn directory_for(&self, artifact: &ResolvedArtifact) -> PathBuf {
        self.root.join(artifact.coordinate.versionless_key().as_str())
    }

    /// Extract the index entries of `artifact` and return their directory.
    ///
    /// Returns `None`, after a warning, when the jar holds neither
    /// `element-list` nor `package-list`. When only one of the two is present
    /// it is copied under the other name as well.
    ///
    /// # Errors
    ///
    /// Archive and filesystem errors are returned; they abort the run.
    pub fn extract(&self, artifact: &ResolvedArtifact) -> Result<Option<PathBuf>> {
        let mut archive = JarArchive::open(&artifact.file)?;
        let entries = archive.list_entries(&self.pattern)?;

        if entries.is_empty() {
            warn!(
                "{} does not contain a package-list or element-list; skipping",
                artifact.file.display()
            );
            return Ok(None);
        }
        if !entries.iter().any(|e| e == ELEMENT_LIST || e == PACKAGE_LIST) {
            warn!(
                "{} only contains {}; skipping",
                artifact.file.display(),
                entries.join(", ")
            );
            return Ok(None);
        }

        let directory = self.directory_for(artifact);
        ensure_dir(&directory)?;
        for entry in &entries {
            debug!("Extracting {entry} from {}", artifact.file.display());
            archive.copy_entry(entry, &directory.join(entry))?;
        }

        let element_list = directory.join(ELEMENT_LIST);
        let package_list = directory.join(PACKAGE_LIST);
        match (element_list.exists(), package_list.exists()) {
            (true, false) => copy_file(&element_list, &package_list)?,
            (false, true) => copy_file(&package_list, &element_list)?,
            _ => {}
        }

        Ok(Some(directory))
    }
}

/// Build the directives for a link set and an offline map.
///
/// URLs the offline map resolves are dropped from the `-link` lines. Index
/// files are extracted as a side effect.
pub fn assemble_options(
    links: &LinkSet,
    offline: &ResolvedOfflineMap,
    extractor: &OfflineExtractor,
) -> Result<Vec<Directive>> {
    let mut directives: Vec<Directive> =
        plain_links(links, offline).iter().cloned().map(Directive::Link).collect();

    for (url, artifacts) in offline.group_by_url() {
        for artifact in artifacts {
            if let Some(directory) = extractor.extract(artifact)? {
                directives.push(Directive::LinkOffline {
                    url: url.clone(),
                    directory,
                });
            }
        }
    }

    Ok(directives)
}

/// One directive per line.
pub fn render_options(directives: &[Directive]) -> String {
    directives.iter().map(|d| format!("{d}\n")).collect()
}

/// Write the options file, replacing an existing one.
pub fn write_options(path: &Path, directives: &[Directive]) -> Result<()> {
    safe_write(path, &render_options(directives))
        .with_context(|| format!("Failed to write options file {}", path.display()))
}
