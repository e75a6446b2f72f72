//! Test utilities for doclink
//!
//! Helpers shared by unit tests and the integration suites:
//!
//! - [`init_test_logging`] installs a tracing subscriber once per process
//! - [`JarBuilder`] writes small javadoc jars with chosen entries
//! - [`ScriptedResolver`] is an in-memory [`ArtifactResolver`](crate::resolver::ArtifactResolver)
//!   that records every call and fails on demand
//!
//! # Example
//!
//! ```rust,no_run
//! use doclink_cli::test_utils::{JarBuilder, init_test_logging};
//!
//! # fn example() -> anyhow::Result<()> {
//! init_test_logging(None);
//! let temp = tempfile::tempdir()?;
//! let jar = JarBuilder::new()
//!     .entry("element-list", "com.example.api\n")
//!     .write(&temp.path().join("lib-a-1.0-javadoc.jar"))?;
//! # Ok(())
//! # }
//! ```

pub mod fixtures;
pub mod resolver;

pub use fixtures::{JarBuilder, ManifestFixture};
pub use resolver::ScriptedResolver;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// With `Some(level)` that level is used; with `None` logging is enabled only
/// when `RUST_LOG` is set.
///
/// ```bash
/// RUST_LOG=doclink_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
