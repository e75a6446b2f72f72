//! Link rules and the plain link URL set.
//!
//! A [`LinkRule`] pairs an artifact pattern list with a URL template. Rules
//! come in two kinds:
//!
//! - [`RuleKind::Link`]: the documentation is published on a live site and the
//!   generated options simply point at it.
//! - [`RuleKind::Offlinelink`]: the documentation index has to be taken from
//!   the artifact's javadoc jar, because the site is not reachable from the
//!   build or not configured at all.
//!
//! The pattern list is compiled into an [`ArtifactFilter`] when the rule is
//! created, so matching a rule against many artifacts costs no re-parsing.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;
use url::Url;

use crate::coordinate::ArtifactCoordinate;
use crate::core::DoclinkError;
use crate::pattern::ArtifactFilter;
use crate::templating::resolve_template;

/// The two rule kinds of the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// `[[link]]`
    Link,
    /// `[[offlinelink]]`
    Offlinelink,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => f.write_str("link"),
            Self::Offlinelink => f.write_str("offlinelink"),
        }
    }
}

/// A pattern list plus URL template.
#[derive(Debug, Clone)]
pub struct LinkRule {
    kind: RuleKind,
    artifact: String,
    url: Option<String>,
    filter: ArtifactFilter,
}

impl LinkRule {
    pub fn new(kind: RuleKind, artifact: impl Into<String>, url: Option<String>) -> Self {
        let artifact = artifact.into();
        let filter = ArtifactFilter::new(&artifact);
        Self {
            kind,
            artifact,
            url,
            filter,
        }
    }

    /// A `link` rule with a URL template.
    pub fn link(artifact: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(RuleKind::Link, artifact, Some(url.into()))
    }

    /// An `offlinelink` rule with a URL template.
    pub fn offline(artifact: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(RuleKind::Offlinelink, artifact, Some(url.into()))
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// The pattern list as configured.
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// The URL template, if the rule has one.
    pub fn url_template(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn filter(&self) -> &ArtifactFilter {
        &self.filter
    }

    /// Whether the rule applies to `coordinate`.
    pub fn include(&self, coordinate: &ArtifactCoordinate) -> bool {
        self.filter.include(coordinate)
    }

    /// The documentation URL of `coordinate` under this rule.
    ///
    /// `Ok(None)` when the rule has no URL template.
    ///
    /// # Errors
    ///
    /// [`DoclinkError::TemplateSubstitution`] when a placeholder has no unique
    /// value, [`DoclinkError::InvalidUrl`] when the expanded template is not
    /// an absolute URL.
    pub fn url_for(&self, coordinate: &ArtifactCoordinate) -> Result<Option<Url>> {
        let Some(template) = self.url.as_deref() else {
            return Ok(None);
        };

        let expanded = resolve_template(template, coordinate)?;
        let url = Url::parse(&expanded).map_err(|e| DoclinkError::InvalidUrl {
            url: expanded.clone(),
            reason: format!("{e} (from template '{template}' for {coordinate})"),
        })?;
        Ok(Some(url))
    }

    /// Candidates this rule includes, in candidate order.
    pub fn matching<'a>(
        &'a self,
        candidates: &'a [ArtifactCoordinate],
    ) -> impl Iterator<Item = &'a ArtifactCoordinate> + 'a {
        candidates.iter().filter(move |c| self.include(c))
    }
}

impl fmt::Display for LinkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(artifact={}, url=", self.kind, self.artifact)?;
        match &self.url {
            Some(url) => write!(f, "{url})"),
            None => f.write_str("none)"),
        }
    }
}

/// Insertion-ordered set of link URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    urls: Vec<Url>,
    seen: HashSet<Url>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a URL; returns `false` if it was already present.
    pub fn insert(&mut self, url: Url) -> bool {
        if self.seen.insert(url.clone()) {
            self.urls.push(url);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.seen.contains(url)
    }

    /// Drop every URL contained in `urls`, keeping the order of the rest.
    pub fn remove_all<'a>(&mut self, urls: impl IntoIterator<Item = &'a Url>) {
        for url in urls {
            self.seen.remove(url);
        }
        let seen = &self.seen;
        self.urls.retain(|u| seen.contains(u));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Url> {
        self.urls.iter()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a Url;
    type IntoIter = std::slice::Iter<'a, Url>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}

/// Evaluate link rules against the candidate coordinates.
///
/// Rules are visited in declaration order and candidates in their given
/// order; each URL is kept once, at its first position.
///
/// # Errors
///
/// The first template or URL error aborts the collection.
pub fn collect_link_set(rules: &[LinkRule], candidates: &[ArtifactCoordinate]) -> Result<LinkSet> {
    let mut set = LinkSet::new();

    for rule in rules {
        let mut matched = 0usize;
        for coordinate in rule.matching(candidates) {
            matched += 1;
            if let Some(url) = rule.url_for(coordinate)? {
                set.insert(url);
            }
        }
        debug!("{rule} matched {matched} artifact(s)");
    }

    Ok(set)
}
