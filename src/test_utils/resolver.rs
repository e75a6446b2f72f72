//! An in-memory artifact resolver for engine tests.

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

use super::fixtures::JarBuilder;
use crate::coordinate::ArtifactCoordinate;
use crate::core::DoclinkError;
use crate::models::ResolvedArtifact;
use crate::resolver::ArtifactResolver;
use crate::resolver::repository::layout_path;

/// Resolves every coordinate to a path under `root`.
///
/// Artifacts registered with [`ScriptedResolver::with_jar`] are written to
/// disk on resolution; others get a path that does not exist. Keys passed to
/// [`ScriptedResolver::fail_on`] (`groupId:artifactId`) fail.
#[derive(Debug)]
pub struct ScriptedResolver {
    root: PathBuf,
    failures: HashSet<String>,
    jars: HashMap<String, JarBuilder>,
    calls: Mutex<Vec<ArtifactCoordinate>>,
}

impl ScriptedResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            failures: HashSet::new(),
            jars: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn fail_on(mut self, versionless_key: &str) -> Self {
        self.failures.insert(versionless_key.to_string());
        self
    }

    #[must_use]
    pub fn with_jar(mut self, versionless_key: &str, jar: JarBuilder) -> Self {
        self.jars.insert(versionless_key.to_string(), jar);
        self
    }

    /// Coordinates passed to `resolve`, in call order.
    pub fn calls(&self) -> Vec<ArtifactCoordinate> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl ArtifactResolver for ScriptedResolver {
    async fn resolve(&self, coordinate: &ArtifactCoordinate) -> Result<ResolvedArtifact> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(coordinate.clone());
        }

        let key = coordinate.versionless_key();
        if self.failures.contains(key.as_str()) {
            return Err(DoclinkError::ArtifactResolutionFailed {
                coordinate: coordinate.to_string(),
                reason: "scripted failure".to_string(),
            }
            .into());
        }

        let file = self.root.join(layout_path(coordinate));
        if let Some(jar) = self.jars.get(key.as_str()) {
            jar.write(&file)?;
        }

        Ok(ResolvedArtifact {
            coordinate: coordinate.clone(),
            file,
        })
    }
}
