//! Shared data models for doclink operations
//!
//! The project model is what the build tool hands to doclink: the declared
//! dependencies, the dependency-management entries, and the resolved artifact
//! set (each with its local file). It can be written inline in `doclink.toml`
//! or exported to a separate JSON/TOML file.
//!
//! The three views the resolution engine consumes are derived here:
//! - [`ProjectModel::link_candidates`] for plain `link` rules
//! - [`ProjectModel::javadoc_candidates`] for `offlinelink` rules
//! - [`ProjectModel::resolved_javadocs`] for javadoc jars the build already resolved

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::parse_config;
use crate::constants::JAR_TYPE;
use crate::coordinate::ArtifactCoordinate;

fn default_type() -> String {
    JAR_TYPE.to_string()
}

/// A dependency record as exported by the build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dependency {
    /// Group identifier
    pub group_id: String,
    /// Artifact identifier
    pub artifact_id: String,
    /// Version; dependency-management imports may leave it out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Packaging type
    #[serde(rename = "type", default = "default_type")]
    pub artifact_type: String,
    /// Classifier, absent for the main artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Local file; only meaningful in the resolved artifact set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Dependency {
    fn has_blank_classifier(&self) -> bool {
        self.classifier.as_deref().is_none_or(|c| c.trim().is_empty())
    }

    fn has_version(&self) -> bool {
        self.version.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// An artifact together with its file in the local repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Coordinate of the artifact that was resolved
    pub coordinate: ArtifactCoordinate,
    /// Location of the artifact on disk
    pub file: PathBuf,
}

/// The dependency data of one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectModel {
    /// Declared (direct) dependencies
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// Dependency-management entries
    #[serde(default)]
    pub dependency_management: Vec<Dependency>,
    /// Resolved artifact set, transitive dependencies included
    #[serde(default)]
    pub artifacts: Vec<Dependency>,
}

impl ProjectModel {
    /// Load a project model from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if !is_json {
            return parse_config(path);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project model: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse project model: {}", path.display()))
    }

    /// Whether the model carries no dependency data at all.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
            && self.dependency_management.is_empty()
            && self.artifacts.is_empty()
    }

    /// Coordinates that plain `link` rules are matched against.
    ///
    /// The resolved artifact set and the declared dependencies, followed by the
    /// dependency-management entries when `include_dependency_management` is
    /// set. Duplicates (same full coordinate) are dropped, first one wins.
    pub fn link_candidates(&self, include_dependency_management: bool) -> Vec<ArtifactCoordinate> {
        let management: &[Dependency] = if include_dependency_management {
            &self.dependency_management
        } else {
            &[]
        };

        let mut seen = HashSet::new();
        self.artifacts
            .iter()
            .chain(&self.dependencies)
            .chain(management)
            .map(ArtifactCoordinate::from_dependency)
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }

    /// Javadoc coordinates eligible for offline resolution.
    ///
    /// Declared dependencies (plus dependency management when requested) of
    /// type `jar`, without classifier and with a version, each turned into
    /// its `javadoc` classifier view. Order is first appearance.
    pub fn javadoc_candidates(
        &self,
        include_dependency_management: bool,
    ) -> Vec<ArtifactCoordinate> {
        let management: &[Dependency] = if include_dependency_management {
            &self.dependency_management
        } else {
            &[]
        };

        let mut seen = HashSet::new();
        self.dependencies
            .iter()
            .chain(management)
            .filter(|d| d.has_blank_classifier())
            .filter(|d| d.artifact_type.trim() == JAR_TYPE)
            .filter(|d| d.has_version())
            .map(|d| ArtifactCoordinate::from_dependency(d).as_javadoc())
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }

    /// Javadoc jars already present in the resolved artifact set.
    pub fn resolved_javadocs(&self) -> Vec<ResolvedArtifact> {
        self.artifacts
            .iter()
            .filter_map(|d| {
                let coordinate = ArtifactCoordinate::from_dependency(d);
                match (&d.file, coordinate.is_javadoc_jar()) {
                    (Some(file), true) => Some(ResolvedArtifact {
                        coordinate,
                        file: file.clone(),
                    }),
                    _ => None,
                }
            })
            .collect()
    }
}
