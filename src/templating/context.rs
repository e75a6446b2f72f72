//! Variable tables for URL template substitution.
//!
//! A [`VariableTable`] is built per artifact and holds the names a URL
//! template may reference. Keys are stored lowercased and kept in insertion
//! order; lookup is a pure function returning a [`Lookup`] tag.

use std::fmt;

use crate::coordinate::ArtifactCoordinate;

/// Names of the version segments, in parse order.
pub const SEGMENT_NAMES: [&str; 4] = ["major", "minor", "micro", "patch"];

/// Outcome of a case-insensitive table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Exactly one value answers the name.
    Found(String),
    /// No key equals or starts with the name.
    NotFound,
    /// Several keys start with the name and their values differ.
    Ambiguous(Vec<String>),
}

/// Leading numeric segments of a version string.
///
/// Parsing consumes a run of digits, then requires a `.` before the next run.
/// The first non-digit or missing separator ends the scan; segments that were
/// not reached stay `None`.
///
/// ```
/// use doclink_cli::templating::VersionSegments;
///
/// let segments = VersionSegments::parse("12.3.4-beta");
/// assert_eq!(segments.major.as_deref(), Some("12"));
/// assert_eq!(segments.micro.as_deref(), Some("4"));
/// assert_eq!(segments.patch, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSegments {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub micro: Option<String>,
    pub patch: Option<String>,
}

impl VersionSegments {
    pub fn parse(version: &str) -> Self {
        let mut found: Vec<String> = Vec::with_capacity(SEGMENT_NAMES.len());
        let mut rest = version;

        while found.len() < SEGMENT_NAMES.len() {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                break;
            }
            found.push(rest[..digits].to_string());
            rest = &rest[digits..];

            match rest.strip_prefix('.') {
                Some(next) => rest = next,
                None => break,
            }
        }

        let mut segments = found.into_iter();
        Self {
            major: segments.next(),
            minor: segments.next(),
            micro: segments.next(),
            patch: segments.next(),
        }
    }

    /// Present segments as `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        SEGMENT_NAMES
            .into_iter()
            .zip([&self.major, &self.minor, &self.micro, &self.patch])
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    }
}

/// Ordered, case-insensitive name → value table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables of one artifact.
    ///
    /// `groupid`, `artifactid` and `version` (the base version), the short
    /// aliases `g`, `a` and `v`, then whichever of `major`, `minor`, `micro`
    /// and `patch` the version yields.
    pub fn for_coordinate(coordinate: &ArtifactCoordinate) -> Self {
        let mut table = Self::new();
        table.insert("groupId", &coordinate.group_id);
        table.insert("artifactId", &coordinate.artifact_id);
        table.insert("version", &coordinate.base_version);
        table.insert("g", &coordinate.group_id);
        table.insert("a", &coordinate.artifact_id);
        table.insert("v", &coordinate.base_version);

        for (name, value) in VersionSegments::parse(&coordinate.base_version).iter() {
            table.insert(name, value);
        }
        table
    }

    /// Add or replace a variable. The name is stored lowercased.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let key = name.to_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Resolve a placeholder name.
    ///
    /// An exact (case-insensitive) key wins. Otherwise every key starting with
    /// the name is a candidate, and the name resolves only if the candidates
    /// share one value.
    pub fn lookup(&self, name: &str) -> Lookup {
        let wanted = name.to_lowercase();

        if let Some((_, value)) = self.entries.iter().find(|(k, _)| *k == wanted) {
            return Lookup::Found(value.clone());
        }

        let mut values: Vec<&str> = Vec::new();
        for (key, value) in &self.entries {
            if key.starts_with(&wanted) && !values.contains(&value.as_str()) {
                values.push(value);
            }
        }

        match values.as_slice() {
            [] => Lookup::NotFound,
            [single] => Lookup::Found((*single).to_string()),
            _ => Lookup::Ambiguous(
                self.entries
                    .iter()
                    .filter(|(k, _)| k.starts_with(&wanted))
                    .map(|(k, _)| k.clone())
                    .collect(),
            ),
        }
    }

    /// Variable names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for VariableTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}
