//! User-wide configuration.
//!
//! Settings that belong to the machine rather than the project live in
//! `~/.doclink/config.toml` (`%LOCALAPPDATA%\doclink\config.toml` on
//! Windows): where the local repository is, whether the network may be used,
//! repository credentials and mirrors.
//!
//! ```toml
//! local-repository = "~/.m2/repository"
//! offline = false
//!
//! [servers.internal]
//! username = "deploy"
//! password = "s3cret"
//!
//! [[mirrors]]
//! id = "corporate"
//! url = "https://nexus.example.com/repository/maven-public/"
//! mirror-of = "*"
//! ```
//!
//! A missing file means defaults. Credentials are looked up by repository id;
//! when a mirror applies, the mirror's id is used instead.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::DEFAULT_LOCAL_REPOSITORY;
use crate::utils::platform::resolve_path;

fn default_local_repository() -> String {
    DEFAULT_LOCAL_REPOSITORY.to_string()
}

fn is_default_local_repository(value: &String) -> bool {
    value == DEFAULT_LOCAL_REPOSITORY
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Global doclink configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Local repository root, `~` and variables expanded on use
    #[serde(
        default = "default_local_repository",
        skip_serializing_if = "is_default_local_repository"
    )]
    pub local_repository: String,

    /// Never touch the network
    #[serde(default, skip_serializing_if = "is_false")]
    pub offline: bool,

    /// Credentials by repository id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub servers: BTreeMap<String, ServerCredentials>,

    /// Mirrors, first match wins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mirrors: Vec<Mirror>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            local_repository: default_local_repository(),
            offline: false,
            servers: BTreeMap::new(),
            mirrors: Vec::new(),
        }
    }
}

/// Basic-auth credentials for one repository id.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerCredentials {
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for ServerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A repository that stands in for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Mirror {
    pub id: String,
    pub url: String,
    /// `*`, or a comma-separated list of repository ids; `!id` excludes one
    pub mirror_of: String,
}

impl Mirror {
    /// Whether this mirror replaces the repository `repository_id`.
    pub fn mirrors(&self, repository_id: &str) -> bool {
        let mut matched = false;
        for token in self.mirror_of.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if let Some(excluded) = token.strip_prefix('!') {
                if excluded == repository_id {
                    return false;
                }
            } else if token == "*" || token == repository_id {
                matched = true;
            }
        }
        matched
    }
}

impl GlobalConfig {
    /// Load from the default location, or defaults if there is no file.
    pub async fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load from `path` when given, otherwise from the default location.
    ///
    /// A given path that does not exist is an error; a missing default file
    /// is not.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(&path).await,
            Some(path) => Err(crate::core::DoclinkError::ConfigError {
                message: format!("Config file {} does not exist", path.display()),
            }
            .into()),
            None => Self::load().await,
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config from {}", path.display()))
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("doclink")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".doclink")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// The local repository with `~` and variables expanded.
    pub fn local_repository_path(&self) -> Result<PathBuf> {
        resolve_path(&self.local_repository).with_context(|| {
            format!("Invalid local-repository setting '{}'", self.local_repository)
        })
    }

    /// The first mirror that replaces `repository_id`.
    pub fn mirror_for(&self, repository_id: &str) -> Option<&Mirror> {
        self.mirrors.iter().find(|m| m.mirrors(repository_id))
    }

    pub fn credentials_for(&self, repository_id: &str) -> Option<&ServerCredentials> {
        self.servers.get(repository_id)
    }
}
