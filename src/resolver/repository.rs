//! Maven-layout artifact repositories.
//!
//! [`MavenRepository`] is the [`ArtifactResolver`] used by the CLI. It looks
//! an artifact up in the local repository first and otherwise downloads it
//! from the configured remotes into the local repository.
//!
//! # Layout
//!
//! ```text
//! <groupId with '.' as '/'>/<artifactId>/<baseVersion>/<artifactId>-<version>[-<classifier>].<type>
//! ```
//!
//! so `org.slf4j:slf4j-api:jar:javadoc:2.0.13` lives at
//! `org/slf4j/slf4j-api/2.0.13/slf4j-api-2.0.13-javadoc.jar`.
//!
//! # Remotes
//!
//! Each declared repository is replaced by the first mirror that covers its
//! id, and repositories collapsing onto one mirror are tried once. Basic-auth
//! credentials are looked up by the id of the effective repository. Remotes
//! are tried in order; the first successful response wins. Requests are not
//! retried. In offline mode the network is never used.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, trace};
use url::Url;

use super::ArtifactResolver;
use crate::config::{GlobalConfig, ServerCredentials};
use crate::constants::HTTP_TIMEOUT;
use crate::coordinate::ArtifactCoordinate;
use crate::core::DoclinkError;
use crate::models::ResolvedArtifact;
use crate::utils::{atomic_write, redact_url};

/// A remote repository as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct EffectiveRemote {
    id: String,
    base: Url,
    credentials: Option<ServerCredentials>,
}

/// Local repository plus remotes.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    local: PathBuf,
    remotes: Vec<EffectiveRemote>,
    offline: bool,
    client: reqwest::Client,
}

impl MavenRepository {
    /// A repository with only a local directory.
    pub fn new(local: impl Into<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!("doclink/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            local: local.into(),
            remotes: Vec::new(),
            offline: false,
            client,
        })
    }

    /// The repository described by the global configuration and the
    /// manifest's repositories.
    pub fn from_config(
        config: &GlobalConfig,
        repositories: &[RemoteRepository],
        offline: bool,
    ) -> Result<Self> {
        let mut repository = Self::new(config.local_repository_path()?)?.offline(offline || config.offline);

        for declared in repositories {
            let (id, url) = match config.mirror_for(&declared.id) {
                Some(mirror) => {
                    debug!("Repository '{}' is mirrored by '{}'", declared.id, mirror.id);
                    (mirror.id.as_str(), mirror.url.as_str())
                }
                None => (declared.id.as_str(), declared.url.as_str()),
            };

            if repository.remotes.iter().any(|r| r.id == id) {
                continue;
            }
            let credentials = config.credentials_for(id).cloned();
            repository = repository.with_remote(id, url, credentials)?;
        }

        Ok(repository)
    }

    /// Append a remote.
    pub fn with_remote(
        mut self,
        id: impl Into<String>,
        url: &str,
        credentials: Option<ServerCredentials>,
    ) -> Result<Self> {
        let id = id.into();
        let mut base = Url::parse(url).map_err(|e| DoclinkError::InvalidUrl {
            url: redact_url(url),
            reason: format!("repository '{id}': {e}"),
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        self.remotes.push(EffectiveRemote {
            id,
            base,
            credentials,
        });
        Ok(self)
    }

    #[must_use]
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Ids of the effective remotes, in lookup order.
    pub fn remote_ids(&self) -> impl Iterator<Item = &str> {
        self.remotes.iter().map(|r| r.id.as_str())
    }

    /// Where `coordinate` lives in the local repository.
    pub fn local_path(&self, coordinate: &ArtifactCoordinate) -> PathBuf {
        self.local.join(layout_path(coordinate))
    }

    async fn download(&self, remote: &EffectiveRemote, coordinate: &ArtifactCoordinate) -> Result<Option<Vec<u8>>> {
        let url = remote.base.join(&layout_path(coordinate)).map_err(|e| DoclinkError::InvalidUrl {
            url: redact_url(remote.base.as_str()),
            reason: e.to_string(),
        })?;
        trace!("GET {}", redact_url(url.as_str()));

        let mut request = self.client.get(url.clone());
        if let Some(credentials) = &remote.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request.send().await.map_err(|e| DoclinkError::NetworkError {
            operation: format!("downloading {}", redact_url(url.as_str())),
            reason: e.without_url().to_string(),
        })?;

        match response.status() {
            status if status.is_success() => {
                let bytes = response.bytes().await.map_err(|e| DoclinkError::NetworkError {
                    operation: format!("reading {}", redact_url(url.as_str())),
                    reason: e.without_url().to_string(),
                })?;
                Ok(Some(bytes.to_vec()))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(DoclinkError::NetworkError {
                operation: format!("downloading {}", redact_url(url.as_str())),
                reason: format!("HTTP {status}"),
            }
            .into()),
        }
    }
}

impl ArtifactResolver for MavenRepository {
    async fn resolve(&self, coordinate: &ArtifactCoordinate) -> Result<ResolvedArtifact> {
        let file = self.local_path(coordinate);
        if file.is_file() {
            debug!("{coordinate} found in local repository");
            return Ok(ResolvedArtifact {
                coordinate: coordinate.clone(),
                file,
            });
        }

        if self.offline {
            return Err(DoclinkError::ArtifactResolutionFailed {
                coordinate: coordinate.to_string(),
                reason: format!("not in local repository {} and offline mode is on", self.local.display()),
            }
            .into());
        }

        let mut tried = Vec::new();
        let mut errors = Vec::new();

        for remote in &self.remotes {
            match self.download(remote, coordinate).await {
                Ok(Some(content)) => {
                    atomic_write(&file, &content).with_context(|| {
                        format!("Failed to store {coordinate} in local repository")
                    })?;
                    debug!("Downloaded {coordinate} from '{}'", remote.id);
                    return Ok(ResolvedArtifact {
                        coordinate: coordinate.clone(),
                        file,
                    });
                }
                Ok(None) => tried.push(format!("{} ({})", remote.id, redact_url(remote.base.as_str()))),
                Err(e) => errors.push(format!("{}: {e}", remote.id)),
            }
        }

        if errors.is_empty() {
            Err(DoclinkError::ArtifactNotFound {
                coordinate: coordinate.to_string(),
                tried,
            }
            .into())
        } else {
            Err(DoclinkError::ArtifactResolutionFailed {
                coordinate: coordinate.to_string(),
                reason: errors.join("; "),
            }
            .into())
        }
    }
}

/// Repository-relative path of a coordinate, always with `/` separators.
pub fn layout_path(coordinate: &ArtifactCoordinate) -> String {
    let mut file_name = format!("{}-{}", coordinate.artifact_id, coordinate.version);
    if !coordinate.classifier.is_empty() {
        file_name.push('-');
        file_name.push_str(&coordinate.classifier);
    }
    file_name.push('.');
    file_name.push_str(&coordinate.artifact_type);

    format!(
        "{}/{}/{}/{}",
        coordinate.group_id.replace('.', "/"),
        coordinate.artifact_id,
        coordinate.base_version,
        file_name
    )
}
