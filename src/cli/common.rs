//! Common utilities and traits for CLI commands

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::CliConfig;
use crate::config::GlobalConfig;
use crate::links::LinkRule;
use crate::manifest::{Manifest, find_manifest_with_optional};
use crate::models::ProjectModel;
use crate::resolver::{MavenRepository, OfflineResolution, OfflineResolver};
use crate::utils::{ProgressBar, spinner_with_message};

/// Common trait for CLI command execution pattern
pub trait CommandExecutor: Sized {
    /// Load the manifest, project model and global config, then run.
    fn execute(self, cli: &CliConfig) -> impl Future<Output = Result<()>> + Send
    where
        Self: Send,
    {
        async move {
            let context = CommandContext::load(cli).await?;
            self.execute_with_context(context).await
        }
    }

    /// Run against an already loaded context.
    fn execute_with_context(self, context: CommandContext) -> impl Future<Output = Result<()>> + Send;
}

/// Everything a command needs from disk and from the global flags.
#[derive(Debug)]
pub struct CommandContext {
    /// Parsed project manifest (doclink.toml)
    pub manifest: Manifest,
    /// Path to the manifest file
    pub manifest_path: PathBuf,
    /// Project model, from `--project` or the manifest's `[project]`
    pub project: ProjectModel,
    /// Global configuration
    pub config: GlobalConfig,
    /// Never access remote repositories
    pub offline: bool,
    /// Hide spinners
    pub no_progress: bool,
    /// Do not print summaries
    pub quiet: bool,
}

impl CommandContext {
    /// Locate and load everything named by `cli`.
    ///
    /// # Errors
    ///
    /// Fails when the manifest cannot be found or parsed, the project file
    /// cannot be read, or an explicit config file is missing or invalid.
    pub async fn load(cli: &CliConfig) -> Result<Self> {
        let manifest_path = find_manifest_with_optional(cli.manifest_path.clone())?;
        let config = GlobalConfig::load_with_optional(cli.config_path.clone()).await?;
        Self::from_parts(&manifest_path, config, cli)
    }

    /// Build a context from a manifest path and an already loaded config.
    pub fn from_parts(manifest_path: &Path, config: GlobalConfig, cli: &CliConfig) -> Result<Self> {
        let manifest = Manifest::load(manifest_path).with_context(|| {
            format!("Failed to load manifest file: {}", manifest_path.display())
        })?;

        let project = match &cli.project_path {
            Some(path) => ProjectModel::load(path)
                .with_context(|| format!("Failed to load project model: {}", path.display()))?,
            None => manifest.project.clone().unwrap_or_default(),
        };
        if project.is_empty() {
            warn!("The project has no dependencies; nothing will be linked");
        }

        Ok(Self {
            manifest,
            manifest_path: manifest_path.to_path_buf(),
            project,
            config,
            offline: cli.offline,
            no_progress: cli.no_progress,
            quiet: cli.quiet,
        })
    }

    /// The javadoc jar resolver for this run.
    pub fn repository(&self) -> Result<MavenRepository> {
        MavenRepository::from_config(
            &self.config,
            &self.manifest.effective_repositories(),
            self.offline,
        )
    }

    pub fn spinner(&self, message: impl Into<String>) -> ProgressBar {
        if self.no_progress {
            let spinner = ProgressBar::hidden();
            spinner.set_message(message);
            spinner
        } else {
            spinner_with_message(message)
        }
    }

    /// Print a success line unless `--quiet` is set.
    pub fn report(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message.as_ref());
        }
    }

    /// Run the offline resolution engine over the project.
    pub async fn resolve_offline(
        &self,
        rules: &[LinkRule],
        include_dependency_management: bool,
    ) -> Result<OfflineResolution> {
        let repository = self.repository()?;
        let pre_resolved = self.project.resolved_javadocs();
        let candidates = self.project.javadoc_candidates(include_dependency_management);
        debug!(
            "{} resolved javadoc jar(s), {} offline candidate(s)",
            pre_resolved.len(),
            candidates.len()
        );

        let spinner = self.spinner("Resolving offline links...");
        let result = OfflineResolver::new(&repository, rules).resolve(&pre_resolved, &candidates).await;
        spinner.finish_and_clear();

        let resolution = result?;
        if !resolution.failures.is_empty() {
            info!(
                "{} javadoc jar(s) could not be resolved and are left out",
                resolution.failures.len()
            );
        }
        Ok(resolution)
    }
}

/// Options shared by the generating commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Base directory for generated files (default: `settings.output-directory`)
    #[arg(long)]
    pub output_directory: Option<PathBuf>,

    /// Generate nothing
    #[arg(long)]
    pub skip: bool,

    /// Do not match dependency-management entries
    #[arg(long)]
    pub no_dependency_management: bool,
}

/// Whether dependency-management entries take part in matching.
///
/// `--no-dependency-management` turns them off whatever the manifest says.
pub fn include_dependency_management(manifest: &Manifest, disabled_by_flag: bool) -> bool {
    !disabled_by_flag && manifest.settings.include_dependency_management
}

impl GenerateArgs {
    pub fn should_skip(&self, manifest: &Manifest) -> bool {
        self.skip || manifest.settings.skip
    }

    pub fn include_dependency_management(&self, manifest: &Manifest) -> bool {
        include_dependency_management(manifest, self.no_dependency_management)
    }

    /// `--output-directory` as given, or the manifest's setting.
    pub fn output_directory(&self, manifest: &Manifest) -> PathBuf {
        self.output_directory.clone().unwrap_or_else(|| manifest.output_directory())
    }
}
