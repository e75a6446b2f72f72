//! Command-line interface for doclink.
//!
//! # Available Commands
//!
//! - `options` - Write a javadoc options file with `-link` and `-linkoffline`
//!   directives, extracting offline index files next to it
//! - `offline-links` - Write the `-linkoffline` directives of the offline rules only
//! - `map` - Write a javadoc map from package name to documentation URL
//! - `check` - Show which artifacts every rule matches, without network access
//!
//! # Global Options
//!
//! All commands support these global options:
//! - `--verbose` / `--quiet` - Log level (`debug` / `warn`, default `info`)
//! - `--config` - Path to the global config file (default `~/.doclink/config.toml`)
//! - `--manifest-path` - Path to `doclink.toml` instead of searching for it
//! - `--project` - Project model file (`.json` or `.toml`) instead of `[project]`
//! - `--no-progress` - Disable spinners
//! - `--offline` - Never download javadoc jars
//!
//! # Example
//!
//! ```bash
//! doclink options
//! doclink --offline map --output-file javadoc-map.xml
//! doclink --project target/project.json offline-links --no-dependency-management
//! ```

mod check;
pub mod common;
mod map;
mod offline;
mod options;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use common::{CommandContext, CommandExecutor, GenerateArgs};

/// Runtime configuration derived from the global flags.
///
/// Commands receive this instead of reading the parsed [`Cli`], so tests can
/// build one directly.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: Option<String>,
    /// Hide spinners
    pub no_progress: bool,
    /// Suppress the summary lines printed to stdout
    pub quiet: bool,
    /// Global config file to use instead of the default location
    pub config_path: Option<PathBuf>,
    /// Manifest to use instead of searching for `doclink.toml`
    pub manifest_path: Option<PathBuf>,
    /// Project model file overriding the manifest's `[project]`
    pub project_path: Option<PathBuf>,
    /// Resolve from the local repository only
    pub offline: bool,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level. Logs go to stderr.
    /// Installing twice is harmless.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("info"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Javadoc link resolver.
#[derive(Parser)]
#[command(
    name = "doclink",
    about = "Javadoc link resolver - computes -link/-linkoffline options and javadoc maps",
    version,
    long_about = "doclink matches link rules from doclink.toml against a project's dependencies \
                  and writes javadoc options files, offline link directories and javadoc maps."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global configuration file
    ///
    /// Defaults to `~/.doclink/config.toml`; a missing default file means
    /// built-in defaults, a missing explicit file is an error.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the manifest file (doclink.toml)
    ///
    /// By default doclink searches the current directory and its parents.
    #[arg(long, global = true)]
    manifest_path: Option<PathBuf>,

    /// Project model file (.json or .toml) to use instead of `[project]`
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Disable progress spinners
    #[arg(long, global = true)]
    no_progress: bool,

    /// Never access remote repositories
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the javadoc options file.
    ///
    /// Writes `-link` directives for link rules and `-linkoffline`
    /// directives for offline link rules to
    /// `<output-directory>/javadoc-options/options`.
    Options(options::OptionsCommand),

    /// Generate the offline link options file.
    ///
    /// Writes only the `-linkoffline` directives to
    /// `<output-directory>/offline-links/OPTIONS`.
    OfflineLinks(offline::OfflineLinksCommand),

    /// Generate the javadoc map.
    ///
    /// Writes package name to URL properties, in XML when the output file
    /// name ends with `.xml`.
    Map(map::MapCommand),

    /// Show what every rule matches without writing anything.
    Check(check::CheckCommand),
}

impl Cli {
    /// Execute the parsed command line.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            no_progress: self.no_progress,
            quiet: self.quiet,
            config_path: self.config.clone(),
            manifest_path: self.manifest_path.clone(),
            project_path: self.project.clone(),
            offline: self.offline,
        }
    }

    /// Execute with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Options(cmd) => cmd.execute(&config).await,
            Commands::OfflineLinks(cmd) => cmd.execute(&config).await,
            Commands::Map(cmd) => cmd.execute(&config).await,
            Commands::Check(cmd) => cmd.execute(&config).await,
        }
    }
}
