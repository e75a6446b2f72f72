//! Project manifest (`doclink.toml`) parsing and validation.
//!
//! The manifest declares the link rules of a project, optional extra remote
//! repositories, generation settings and, unless it is passed separately with
//! `--project`, the project model itself.
//!
//! # Format
//!
//! ```toml
//! [settings]
//! include-dependency-management = true
//! skip = false
//! output-directory = "target"
//!
//! [[link]]
//! artifact = "com.example:*"
//! url = "https://docs.example.com/{a}/{v}/"
//!
//! [[offlinelink]]
//! artifact = "org.slf4j:*, ch.qos.logback:*"
//! url = "https://www.slf4j.org/apidocs/"
//!
//! [[repositories]]
//! id = "internal"
//! url = "https://repo.example.com/maven2/"
//!
//! [project]
//! dependencies = [
//!     { group-id = "com.example", artifact-id = "lib-a", version = "1.2.3" },
//! ]
//! ```
//!
//! Rules keep their declaration order; it decides link order in the output
//! and which offline rule wins for an artifact matched by several.
//!
//! When no `[[repositories]]` are declared, Maven Central is used.

mod helpers;

pub use helpers::{find_manifest, find_manifest_from, find_manifest_with_optional};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use url::Url;

use crate::constants::{DEFAULT_OUTPUT_DIRECTORY, MAVEN_CENTRAL_ID, MAVEN_CENTRAL_URL};
use crate::core::DoclinkError;
use crate::links::{LinkRule, RuleKind};
use crate::models::ProjectModel;
use crate::resolver::RemoteRepository;

fn default_true() -> bool {
    true
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
}

/// The parsed `doclink.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
    #[serde(default)]
    pub settings: Settings,

    /// `[[link]]` rules, in declaration order
    #[serde(default, rename = "link", skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<RuleConfig>,

    /// `[[offlinelink]]` rules, in declaration order
    #[serde(default, rename = "offlinelink", skip_serializing_if = "Vec::is_empty")]
    pub offlinelinks: Vec<RuleConfig>,

    /// Remote repositories consulted for javadoc jars
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RemoteRepository>,

    /// Inline project model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectModel>,

    /// Directory containing the manifest file, set by [`Manifest::load`]
    #[serde(skip)]
    pub manifest_dir: Option<PathBuf>,
}

/// `[settings]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Also match dependency-management entries
    #[serde(default = "default_true")]
    pub include_dependency_management: bool,

    /// Generate nothing
    #[serde(default)]
    pub skip: bool,

    /// Base directory of all outputs, relative to the manifest
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include_dependency_management: true,
            skip: false,
            output_directory: default_output_directory(),
        }
    }
}

/// One `[[link]]` or `[[offlinelink]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Comma/whitespace separated artifact patterns
    pub artifact: String,
    /// URL template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a manifest file.
    ///
    /// # Errors
    ///
    /// [`DoclinkError::ManifestParseError`] for invalid TOML, or a validation
    /// error from [`Manifest::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DoclinkError::FileSystemError {
            operation: format!("reading manifest file: {e}"),
            path: path.display().to_string(),
        })?;

        let mut manifest: Self = toml::from_str(&content)
            .map_err(|e| DoclinkError::ManifestParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Invalid TOML syntax in manifest file: {}", path.display()))?;

        manifest.manifest_dir = path.parent().map(Path::to_path_buf);
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check rule and repository declarations.
    ///
    /// Pattern lists must not be blank, URL templates must not be blank, and
    /// repository ids must be unique with absolute URLs. Individual malformed
    /// patterns are not rejected here; they match nothing.
    pub fn validate(&self) -> Result<()> {
        for (kind, rules) in [("link", &self.links), ("offlinelink", &self.offlinelinks)] {
            for (index, rule) in rules.iter().enumerate() {
                if rule.artifact.trim().is_empty() {
                    return Err(config_error(format!(
                        "[[{kind}]] #{} has an empty 'artifact' pattern list",
                        index + 1
                    )));
                }
                if rule.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
                    return Err(config_error(format!(
                        "[[{kind}]] '{}' has an empty 'url'",
                        rule.artifact
                    )));
                }
            }
        }

        let mut ids = HashSet::new();
        for repository in &self.repositories {
            if !ids.insert(repository.id.as_str()) {
                return Err(config_error(format!(
                    "Repository id '{}' is declared more than once",
                    repository.id
                )));
            }
            Url::parse(&repository.url).map_err(|e| DoclinkError::InvalidUrl {
                url: crate::utils::redact_url(&repository.url),
                reason: format!("repository '{}': {e}", repository.id),
            })?;
        }

        Ok(())
    }

    /// Compiled `[[link]]` rules.
    pub fn link_rules(&self) -> Vec<LinkRule> {
        compile(RuleKind::Link, &self.links)
    }

    /// Compiled `[[offlinelink]]` rules.
    pub fn offline_rules(&self) -> Vec<LinkRule> {
        compile(RuleKind::Offlinelink, &self.offlinelinks)
    }

    /// Declared repositories, or Maven Central when there are none.
    pub fn effective_repositories(&self) -> Vec<RemoteRepository> {
        if self.repositories.is_empty() {
            vec![RemoteRepository::new(MAVEN_CENTRAL_ID, MAVEN_CENTRAL_URL)]
        } else {
            self.repositories.clone()
        }
    }

    /// `settings.output-directory` resolved against the manifest directory.
    pub fn output_directory(&self) -> PathBuf {
        resolve_against(self.manifest_dir.as_deref(), &self.settings.output_directory)
    }
}

fn resolve_against(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

fn compile(kind: RuleKind, rules: &[RuleConfig]) -> Vec<LinkRule> {
    rules.iter().map(|r| LinkRule::new(kind, r.artifact.clone(), r.url.clone())).collect()
}

fn config_error(message: String) -> anyhow::Error {
    DoclinkError::ConfigError { message }.into()
}
