//! Reading javadoc index files.
//!
//! A javadoc site publishes its package (or module) index as `element-list`
//! (javadoc 10 and later) or `package-list` (older). Lines starting with
//! `module:` switch the module the following package names belong to.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::debug;
use url::Url;

use crate::archive::JarArchive;
use crate::constants::{HTTP_TIMEOUT, INDEX_NAMES, MODULE_PREFIX};
use crate::core::DoclinkError;
use crate::utils::redact_url;

/// One package (or module) name from an index, with its module if declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub module: Option<String>,
}

/// Parse index lines. Blank lines are ignored.
pub fn parse_index<S: AsRef<str>>(lines: &[S]) -> Vec<IndexEntry> {
    let mut module = None;
    let mut entries = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix(MODULE_PREFIX) {
            module = Some(name.trim().to_string());
            continue;
        }
        entries.push(IndexEntry {
            name: line.to_string(),
            module: module.clone(),
        });
    }

    entries
}

/// `element-list` or `package-list` below `base`.
pub fn index_url(base: &Url, name: &str) -> Result<Url> {
    let base = base.as_str();
    let joined =
        if base.ends_with('/') { format!("{base}{name}") } else { format!("{base}/{name}") };
    Url::parse(&joined).map_err(|e| {
        DoclinkError::InvalidUrl {
            url: redact_url(&joined),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Reads index files from jars, `file:` URLs and `http(s):` URLs.
#[derive(Debug, Clone)]
pub struct IndexReader {
    client: reqwest::Client,
}

impl IndexReader {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!("doclink/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// The index inside a javadoc jar, `element-list` first.
    ///
    /// # Errors
    ///
    /// [`DoclinkError::IndexNotFound`] when the jar has neither file; archive
    /// errors as returned by [`JarArchive`].
    pub fn read_jar(&self, path: &Path) -> Result<Vec<IndexEntry>> {
        let mut archive = JarArchive::open(path)?;
        for name in INDEX_NAMES {
            if archive.contains(name) {
                debug!("Reading {name} from {}", path.display());
                return Ok(parse_index(&archive.read_entry_lines(name)?));
            }
        }
        Err(DoclinkError::IndexNotFound {
            location: path.display().to_string(),
        }
        .into())
    }

    /// The index published below `base`, `element-list` first.
    ///
    /// # Errors
    ///
    /// [`DoclinkError::IndexNotFound`] when neither file can be read.
    pub async fn read_url(&self, base: &Url) -> Result<Vec<IndexEntry>> {
        for name in INDEX_NAMES {
            let url = index_url(base, name)?;
            match self.fetch(&url).await {
                Ok(content) => {
                    let lines: Vec<&str> = content.lines().collect();
                    return Ok(parse_index(&lines));
                }
                Err(e) => debug!("Could not read {}: {e:#}", redact_url(url.as_str())),
            }
        }
        Err(DoclinkError::IndexNotFound {
            location: redact_url(base.as_str()),
        }
        .into())
    }

    async fn fetch(&self, url: &Url) -> Result<String> {
        match url.scheme() {
            "file" => {
                let path =
                    url.to_file_path().map_err(|()| anyhow!("Not a local file URL: {url}"))?;
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))
            }
            "http" | "https" => {
                let response = self.client.get(url.clone()).send().await.map_err(|e| {
                    DoclinkError::NetworkError {
                        operation: format!("fetching {}", redact_url(url.as_str())),
                        reason: e.without_url().to_string(),
                    }
                })?;
                let response = response.error_for_status().map_err(|e| DoclinkError::NetworkError {
                    operation: format!("fetching {}", redact_url(url.as_str())),
                    reason: e.without_url().to_string(),
                })?;
                Ok(response.text().await?)
            }
            scheme => Err(anyhow!("Unsupported URL scheme '{scheme}'")),
        }
    }
}
