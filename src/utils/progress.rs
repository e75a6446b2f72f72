//! Spinners for long-running steps.
//!
//! Repository resolution and index fetches can take a while; the CLI shows an
//! indicatif spinner for them. Spinners draw to stderr and are hidden when
//! `DOCLINK_NO_PROGRESS` is set; `--no-progress` asks for
//! [`ProgressBar::hidden`] directly.
//!
//! ```rust
//! use doclink_cli::utils::progress::spinner_with_message;
//!
//! let spinner = spinner_with_message("Resolving offline links...");
//! spinner.set_message("Resolving org.slf4j:slf4j-api:jar:javadoc:2.0.13");
//! spinner.finish_and_clear();
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

use crate::constants::NO_PROGRESS_ENV;

fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some()
}

/// A spinner that is hidden when progress output is disabled.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    pub fn new_spinner() -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { inner: bar }
    }

    /// A spinner that never draws.
    pub fn hidden() -> Self {
        Self {
            inner: IndicatifBar::hidden(),
        }
    }

    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

/// A spinner that already shows `msg`.
pub fn spinner_with_message(msg: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(msg);
    spinner
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}
