//! Common test utilities for doclink integration tests
//!
//! [`TestProject`] owns a temporary directory holding a `doclink.toml`, a
//! global config and a local Maven repository, and builds `doclink`
//! invocations that use them.

// Not every suite uses every helper
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use doclink_cli::coordinate::ArtifactCoordinate;
use doclink_cli::resolver::repository::layout_path;
use doclink_cli::test_utils::JarBuilder;
use doclink_cli::test_utils::fixtures::toml_string;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory with its own config and local repository.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    /// An empty project whose config points at an empty local repository and
    /// is offline.
    pub fn new() -> Result<Self> {
        let project = Self {
            temp: TempDir::new()?,
        };
        project.write_config(true, "")?;
        Ok(project)
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn local_repository(&self) -> PathBuf {
        self.temp.path().join("repository")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    /// Rewrite the global config; `extra` is appended verbatim.
    pub fn write_config(&self, offline: bool, extra: &str) -> Result<()> {
        let content = format!(
            "local-repository = {}\noffline = {offline}\n{extra}",
            toml_string(&self.local_repository().display().to_string())
        );
        fs::write(self.config_path(), content).context("Failed to write config")
    }

    pub fn write_manifest(&self, content: &str) -> Result<PathBuf> {
        let path = self.temp.path().join("doclink.toml");
        fs::write(&path, content).context("Failed to write manifest")?;
        Ok(path)
    }

    /// Put a javadoc jar for `gav` into the local repository.
    pub fn install_javadoc(&self, gav: &str, jar: &JarBuilder) -> Result<PathBuf> {
        let coordinate = ArtifactCoordinate::from_gav(gav).as_javadoc();
        jar.write(&self.local_repository().join(layout_path(&coordinate)))
    }

    /// `doclink` run in the project directory with its config.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("doclink").expect("doclink binary is built");
        cmd.current_dir(self.temp.path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--no-progress")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.temp.path().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.temp.path().join(relative).exists()
    }
}
