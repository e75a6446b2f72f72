//! Generic TOML file parsing.

use anyhow::{Context, Result};
use std::path::Path;

/// Read and deserialize a TOML file.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid TOML for `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
