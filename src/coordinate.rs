//! Artifact coordinates and versionless keys.
//!
//! An [`ArtifactCoordinate`] identifies one artifact of a Maven-style
//! repository: `groupId:artifactId:version` plus the packaging `type` and an
//! optional `classifier`. Every shape the rest of the crate receives (raw
//! `g:a:v` strings, project dependency records, already-built coordinates) is
//! normalized into this single value type by one of the constructors below.
//!
//! # Identity
//!
//! For merging and deduplication the crate uses the *versionless key*
//! `groupId:artifactId` ([`VersionlessKey`]). Two coordinates that differ only
//! by version, type or classifier share a key, and collections keyed by it are
//! ordered lexicographically by the key.
//!
//! # Snapshot versions
//!
//! A timestamped snapshot such as `1.0-20240102.030405-7` has the base version
//! `1.0-SNAPSHOT`. Every other version is its own base version. URL templates
//! substitute the base version, and the repository layout uses it for the
//! version directory.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::constants::{JAR_TYPE, JAVADOC_CLASSIFIER, SNAPSHOT_SUFFIX};
use crate::models::Dependency;

static TIMESTAMPED_SNAPSHOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)-([0-9]{8}\.[0-9]{6})-([0-9]+)$").expect("static regex is valid")
});

/// The `groupId:artifactId` identity of an artifact.
///
/// Ordering is lexicographic over the rendered key so that maps keyed by it
/// iterate in the same order as the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionlessKey(String);

impl VersionlessKey {
    /// Build the key from its two parts.
    pub fn new(group_id: &str, artifact_id: &str) -> Self {
        Self(format!("{group_id}:{artifact_id}"))
    }

    /// The rendered `groupId:artifactId` text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionlessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully-specified artifact coordinate.
///
/// ```
/// use doclink_cli::coordinate::ArtifactCoordinate;
///
/// let coordinate = ArtifactCoordinate::from_gav("org.slf4j:slf4j-api:2.0.13");
/// assert_eq!(coordinate.versionless_key().as_str(), "org.slf4j:slf4j-api");
/// assert_eq!(coordinate.to_string(), "org.slf4j:slf4j-api:jar:2.0.13");
///
/// let javadoc = coordinate.as_javadoc();
/// assert_eq!(javadoc.to_string(), "org.slf4j:slf4j-api:jar:javadoc:2.0.13");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    /// Group identifier, e.g. `org.slf4j`
    pub group_id: String,
    /// Artifact identifier, e.g. `slf4j-api`
    pub artifact_id: String,
    /// Version as declared (may be a timestamped snapshot)
    pub version: String,
    /// Version with snapshot timestamps folded back to `-SNAPSHOT`
    pub base_version: String,
    /// Packaging type, `jar` unless stated otherwise
    pub artifact_type: String,
    /// Classifier; empty when the artifact has none
    pub classifier: String,
}

impl ArtifactCoordinate {
    /// Create a plain `jar` coordinate without classifier.
    pub fn from_parts(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let version = version.into();
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            base_version: base_version_of(&version),
            version,
            artifact_type: JAR_TYPE.to_string(),
            classifier: String::new(),
        }
    }

    /// Parse a colon-separated `groupId:artifactId[:...]:version` string.
    ///
    /// Missing parts are left empty. When more than two parts are present the
    /// *last* part is the version, so `g:a:jar:1.0` and `g:a:1.0` parse to the
    /// same coordinate.
    pub fn from_gav(gav: &str) -> Self {
        let parts: Vec<&str> = gav.split(':').collect();
        let group_id = parts.first().copied().unwrap_or_default();
        let artifact_id = parts.get(1).copied().unwrap_or_default();
        let version = if parts.len() > 2 {
            parts[parts.len() - 1]
        } else {
            ""
        };
        Self::from_parts(group_id.trim(), artifact_id.trim(), version.trim())
    }

    /// Build a coordinate from a project dependency record.
    pub fn from_dependency(dependency: &Dependency) -> Self {
        Self::from_parts(
            dependency.group_id.trim(),
            dependency.artifact_id.trim(),
            dependency.version.as_deref().unwrap_or_default().trim(),
        )
        .with_type(dependency.artifact_type.trim())
        .with_classifier(dependency.classifier.as_deref().unwrap_or_default().trim())
    }

    /// The same coordinate with a different classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    /// The same coordinate with a different packaging type.
    #[must_use]
    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    /// The javadoc jar that documents this artifact.
    ///
    /// Group, artifact and version are kept; type becomes `jar` and the
    /// classifier `javadoc`.
    #[must_use]
    pub fn as_javadoc(&self) -> Self {
        Self::from_parts(&self.group_id, &self.artifact_id, &self.version)
            .with_classifier(JAVADOC_CLASSIFIER)
    }

    /// `groupId:artifactId`, the merge and ordering key.
    pub fn versionless_key(&self) -> VersionlessKey {
        VersionlessKey::new(&self.group_id, &self.artifact_id)
    }

    /// Whether this is a `jar` with classifier `javadoc`.
    pub fn is_javadoc_jar(&self) -> bool {
        self.artifact_type == JAR_TYPE && self.classifier == JAVADOC_CLASSIFIER
    }
}

impl fmt::Display for ArtifactCoordinate {
    /// `groupId:artifactId:type[:classifier]:version`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.artifact_type)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// Fold a timestamped snapshot version back to its `-SNAPSHOT` form.
pub fn base_version_of(version: &str) -> String {
    match TIMESTAMPED_SNAPSHOT.captures(version) {
        Some(captures) => format!("{}{SNAPSHOT_SUFFIX}", &captures[1]),
        None => version.to_string(),
    }
}
