//! Home directory lookup and user path expansion.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Whether we are running on Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// The current user's home directory.
///
/// # Errors
///
/// Fails when the platform reports no home directory (unset `HOME` or
/// `USERPROFILE`).
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine home directory.\n\n{platform_help}")
    })
}

/// Expand `~` and environment variables in a configured path.
///
/// ```rust,no_run
/// use doclink_cli::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let repository = resolve_path("~/.m2/repository")?;
/// let output = resolve_path("${BUILD_DIR}/docs")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails for `~user` forms and for references to unset variables.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    if path.starts_with('~') && !path.starts_with("~/") && path != "~" {
        return Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for home directory.\n\
            Use '~/' followed by a relative path, like '~/.m2/repository'"
        ));
    }

    let expanded = shellexpand::full_with_context(
        path,
        || dirs::home_dir().map(|home| home.to_string_lossy().into_owned()),
        |name| std::env::var(name).map(Some),
    )
    .with_context(|| format!("Failed to expand path: {path}"))?;

    Ok(PathBuf::from(expanded.as_ref()))
}
