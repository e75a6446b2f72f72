//! Coordinate pattern matching for link rules.
//!
//! Every link rule names the artifacts it applies to with a pattern list such
//! as `"com.example:*, org.slf4j:slf4j-api"`. This module compiles those lists
//! into an [`ArtifactFilter`] once and answers `include(coordinate)` queries.
//!
//! # Pattern Syntax
//!
//! A pattern list is split on commas and whitespace. Each pattern has the form
//! `groupId[:artifactId[:version]]` and every present segment is a glob:
//!
//! - `*` matches any segment value
//! - `?` matches any single character, `[abc]` any character in the set
//! - any other text must match the segment exactly
//!
//! Segments missing from the pattern are not checked, so `com.example` and
//! `com.example:*` are equivalent. The version segment is compared against
//! both the declared version and the base version, so `1.0-SNAPSHOT` also
//! matches a timestamped snapshot of it.
//!
//! # Malformed Patterns
//!
//! A pattern that is empty, has more than three segments, has an empty segment
//! or an invalid glob is reported once when the filter is built and then
//! matches nothing. It never fails the run.
//!
//! # Examples
//!
//! ```rust
//! use doclink_cli::coordinate::ArtifactCoordinate;
//! use doclink_cli::pattern::ArtifactFilter;
//!
//! let filter = ArtifactFilter::new("com.example:*, org.slf4j:slf4j-api:2.*");
//!
//! assert!(filter.include(&ArtifactCoordinate::from_gav("com.example:lib-a:1.0")));
//! assert!(filter.include(&ArtifactCoordinate::from_gav("org.slf4j:slf4j-api:2.0.13")));
//! assert!(!filter.include(&ArtifactCoordinate::from_gav("org.slf4j:slf4j-api:1.7.36")));
//! ```

use anyhow::Result;
use glob::Pattern;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{trace, warn};

use crate::coordinate::ArtifactCoordinate;
use crate::core::DoclinkError;

static PATTERN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("static regex is valid"));

const MAX_SEGMENTS: usize = 3;

/// One compiled `groupId[:artifactId[:version]]` pattern.
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    segments: Vec<Pattern>,
    original_pattern: String,
}

impl ArtifactPattern {
    /// Compile a single pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DoclinkError::InvalidPattern`] if the pattern is empty, has
    /// more than three segments, has an empty segment, or a segment is not a
    /// valid glob.
    pub fn new(pattern_str: &str) -> Result<Self> {
        let invalid = |reason: String| DoclinkError::InvalidPattern {
            pattern: pattern_str.to_string(),
            reason,
        };

        let trimmed = pattern_str.trim();
        if trimmed.is_empty() {
            return Err(invalid("pattern is empty".to_string()).into());
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() > MAX_SEGMENTS {
            return Err(invalid(format!(
                "expected at most {MAX_SEGMENTS} segments (groupId:artifactId:version), found {}",
                parts.len()
            ))
            .into());
        }

        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            if part.is_empty() {
                return Err(invalid("segment is empty".to_string()).into());
            }
            let segment =
                Pattern::new(part).map_err(|e| invalid(format!("segment '{part}': {e}")))?;
            segments.push(segment);
        }

        Ok(Self {
            segments,
            original_pattern: trimmed.to_string(),
        })
    }

    /// Whether every present segment matches the coordinate.
    pub fn matches(&self, coordinate: &ArtifactCoordinate) -> bool {
        self.segments.iter().enumerate().all(|(index, segment)| match index {
            0 => segment.matches(&coordinate.group_id),
            1 => segment.matches(&coordinate.artifact_id),
            _ => {
                segment.matches(&coordinate.version) || segment.matches(&coordinate.base_version)
            }
        })
    }

    /// The pattern text as written.
    pub fn pattern(&self) -> &str {
        &self.original_pattern
    }
}

/// A compiled pattern list.
///
/// The list is compiled when the filter is created; `include` never
/// re-parses it.
#[derive(Debug, Clone)]
pub struct ArtifactFilter {
    source: String,
    patterns: Vec<ArtifactPattern>,
}

impl ArtifactFilter {
    /// Compile a comma/whitespace separated pattern list.
    ///
    /// Malformed patterns are logged and dropped; see the module docs.
    pub fn new(pattern_list: &str) -> Self {
        let mut patterns = Vec::new();

        for raw in PATTERN_SEPARATOR.split(pattern_list).filter(|p| !p.is_empty()) {
            match ArtifactPattern::new(raw) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!("{e}; the pattern matches nothing"),
            }
        }

        if patterns.is_empty() {
            warn!("Artifact pattern list '{pattern_list}' has no usable pattern");
        }

        Self {
            source: pattern_list.to_string(),
            patterns,
        }
    }

    /// Whether at least one pattern matches the coordinate.
    pub fn include(&self, coordinate: &ArtifactCoordinate) -> bool {
        let included = self.patterns.iter().any(|p| p.matches(coordinate));
        trace!("{} {} '{}'", coordinate, if included { "matches" } else { "does not match" }, self.source);
        included
    }

    /// The usable patterns, in configured order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(ArtifactPattern::pattern)
    }

    /// Whether no usable pattern survived compilation.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
