//! Offline link resolution.
//!
//! The engine in this module decides which project artifacts are documented
//! through an *offline* link, fetches their javadoc jars through an
//! [`ArtifactResolver`], and produces a [`ResolvedOfflineMap`] from versionless
//! key to resolved jar and documentation URL.
//!
//! # Algorithm
//!
//! 1. Javadoc jars the build already resolved are entered first, each with
//!    the URL of the first offline rule that includes it. No resolution is
//!    performed for them.
//! 2. The remaining candidates are the project's javadoc views (see
//!    [`ProjectModel::javadoc_candidates`](crate::models::ProjectModel::javadoc_candidates))
//!    whose key is not yet in the map.
//! 3. Offline rules are visited in declaration order. For every candidate a
//!    rule includes:
//!    - key not yet in the map: resolve the jar, then enter it with the rule's
//!      URL. A failure is logged and recorded, and the loop moves on.
//!    - key already in the map: the entry is kept. If the rule would have
//!      produced a different URL a conflict is logged and recorded.
//!
//! The first rule that matches and resolves an artifact wins.
//!
//! # Failure Semantics
//!
//! Resolution is fault tolerant per artifact: a repository error, or a URL
//! template error for the artifact that was just resolved, only drops that one
//! artifact. URL template errors anywhere else (pre-resolved jars, conflict
//! comparison) are configuration errors and abort the run.

pub mod repository;

use anyhow::{Result, anyhow};
use std::collections::BTreeMap;
use std::future::Future;
use tracing::{debug, info, warn};
use url::Url;

use crate::coordinate::{ArtifactCoordinate, VersionlessKey};
use crate::links::{LinkRule, RuleKind};
use crate::models::ResolvedArtifact;

pub use repository::{MavenRepository, RemoteRepository};

/// Turns a coordinate into a file in the local repository.
pub trait ArtifactResolver {
    /// Resolve `coordinate`, downloading it if needed.
    fn resolve(
        &self,
        coordinate: &ArtifactCoordinate,
    ) -> impl Future<Output = Result<ResolvedArtifact>> + Send;
}

/// One resolved offline link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineEntry {
    /// The javadoc jar on disk
    pub artifact: ResolvedArtifact,
    /// Documentation root the jar's index belongs to
    pub url: Url,
}

/// Offline links keyed and ordered by versionless key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOfflineMap {
    entries: BTreeMap<VersionlessKey, OfflineEntry>,
}

impl ResolvedOfflineMap {
    pub fn get(&self, key: &VersionlessKey) -> Option<&OfflineEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &VersionlessKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VersionlessKey, &OfflineEntry)> {
        self.entries.iter()
    }

    /// Resolved URLs in key order, duplicates included.
    pub fn urls(&self) -> impl Iterator<Item = &Url> {
        self.entries.values().map(|entry| &entry.url)
    }

    /// Entries grouped by URL.
    ///
    /// Groups appear in the order their URL first occurs in key order, and
    /// artifacts keep key order inside a group.
    pub fn group_by_url(&self) -> Vec<(&Url, Vec<&ResolvedArtifact>)> {
        let mut groups: Vec<(&Url, Vec<&ResolvedArtifact>)> = Vec::new();
        for entry in self.entries.values() {
            match groups.iter_mut().find(|(url, _)| *url == &entry.url) {
                Some((_, artifacts)) => artifacts.push(&entry.artifact),
                None => groups.push((&entry.url, vec![&entry.artifact])),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, artifact: ResolvedArtifact, url: Url) {
        let key = artifact.coordinate.versionless_key();
        self.entries.entry(key).or_insert(OfflineEntry { artifact, url });
    }
}

/// Two offline rules produced different URLs for one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub coordinate: ArtifactCoordinate,
    /// The rule that lost, rendered
    pub rule: String,
    /// URL already in the map
    pub previous: Url,
    /// URL the losing rule would have used
    pub rejected: Url,
}

/// An artifact that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionFailure {
    pub coordinate: ArtifactCoordinate,
    pub reason: String,
}

/// The offline map plus everything worth reporting about how it was built.
#[derive(Debug, Clone, Default)]
pub struct OfflineResolution {
    pub map: ResolvedOfflineMap,
    pub conflicts: Vec<Conflict>,
    pub failures: Vec<ResolutionFailure>,
    /// Pattern lists of offline rules that matched no project dependency
    pub unmatched_rules: Vec<String>,
}

/// The offline resolution engine.
pub struct OfflineResolver<'a, R> {
    resolver: &'a R,
    rules: Vec<&'a LinkRule>,
}

impl<'a, R: ArtifactResolver> OfflineResolver<'a, R> {
    /// Engine over the offline rules of `rules`; `link` rules are ignored.
    pub fn new(resolver: &'a R, rules: &'a [LinkRule]) -> Self {
        let rules = rules.iter().filter(|r| r.kind() == RuleKind::Offlinelink).collect();
        Self { resolver, rules }
    }

    /// Build the offline map.
    ///
    /// `pre_resolved` are javadoc jars already on disk; `candidates` are the
    /// javadoc views of the project dependencies, in first-seen order.
    ///
    /// # Errors
    ///
    /// Only URL template errors outside the per-artifact guard are returned;
    /// see the module docs.
    pub async fn resolve(
        &self,
        pre_resolved: &[ResolvedArtifact],
        candidates: &[ArtifactCoordinate],
    ) -> Result<OfflineResolution> {
        let mut resolution = OfflineResolution::default();

        for artifact in pre_resolved {
            let Some(rule) = self.rules.iter().find(|r| r.include(&artifact.coordinate)) else {
                continue;
            };
            if let Some(url) = rule.url_for(&artifact.coordinate)? {
                debug!("Using resolved {} for {}", artifact.file.display(), artifact.coordinate);
                resolution.map.insert(artifact.clone(), url);
            }
        }

        let pending: Vec<ArtifactCoordinate> = candidates
            .iter()
            .filter(|c| !resolution.map.contains_key(&c.versionless_key()))
            .cloned()
            .collect();

        for rule in &self.rules {
            if rule.url_template().is_none() {
                warn!("{rule} has no url; skipping");
                continue;
            }

            let matched: Vec<&ArtifactCoordinate> = rule.matching(&pending).collect();
            if matched.is_empty() && !pre_resolved.iter().any(|a| rule.include(&a.coordinate)) {
                warn!("{} does not match any project dependencies.", rule.artifact());
                resolution.unmatched_rules.push(rule.artifact().to_string());
            }

            for coordinate in matched {
                self.apply(rule, coordinate, &mut resolution).await?;
            }
        }

        Ok(resolution)
    }

    async fn apply(
        &self,
        rule: &LinkRule,
        coordinate: &ArtifactCoordinate,
        resolution: &mut OfflineResolution,
    ) -> Result<()> {
        let key = coordinate.versionless_key();

        if let Some(existing) = resolution.map.get(&key) {
            let url = required_url(rule, coordinate)?;
            if url != existing.url {
                warn!("{coordinate} matches {rule} but was previously resolved with {}", existing.url);
                resolution.conflicts.push(Conflict {
                    coordinate: coordinate.clone(),
                    rule: rule.to_string(),
                    previous: existing.url.clone(),
                    rejected: url,
                });
            }
            return Ok(());
        }

        info!("Resolving {coordinate}...");
        let attempt = async {
            let artifact = self.resolver.resolve(coordinate).await?;
            let url = required_url(rule, coordinate)?;
            Ok::<_, anyhow::Error>((artifact, url))
        };

        match attempt.await {
            Ok((artifact, url)) => {
                debug!("Resolved {coordinate} to {}", artifact.file.display());
                resolution.map.insert(artifact, url);
            }
            Err(e) => {
                warn!("{coordinate}: {e}");
                debug!("{e:?}");
                resolution.failures.push(ResolutionFailure {
                    coordinate: coordinate.clone(),
                    reason: format!("{e:#}"),
                });
            }
        }
        Ok(())
    }
}

fn required_url(rule: &LinkRule, coordinate: &ArtifactCoordinate) -> Result<Url> {
    rule.url_for(coordinate)?.ok_or_else(|| anyhow!("{rule} has no url for {coordinate}"))
}
