//! File fixtures: javadoc jars and manifests.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::utils::ensure_dir;

/// Builds a jar with the given entries.
#[derive(Debug, Clone, Default)]
pub struct JarBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl JarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A jar with an `element-list` and an `index.html`.
    pub fn javadoc(packages: &[&str]) -> Self {
        let mut element_list = packages.join("\n");
        element_list.push('\n');
        Self::new()
            .entry("element-list", element_list)
            .entry("index.html", "<html></html>")
    }

    #[must_use]
    pub fn entry(mut self, name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        self.entries.push((name.into(), content.as_ref().to_vec()));
        self
    }

    /// Write the jar to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create jar fixture {}", path.display()))?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

        for (name, content) in &self.entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(content)?;
        }
        zip.finish()?;

        Ok(path.to_path_buf())
    }
}

/// Common `doclink.toml` contents.
pub struct ManifestFixture;

impl ManifestFixture {
    /// One `[[link]]` rule for `com.example:*` and one dependency on
    /// `com.example:lib-a:1.2.3`.
    pub fn basic() -> String {
        r#"[[link]]
artifact = "com.example:*"
url = "https://docs.example.com/{a}/{v}/"

[project]
dependencies = [
    { group-id = "com.example", artifact-id = "lib-a", version = "1.2.3" },
]
"#
        .to_string()
    }

    /// One `[[offlinelink]]` rule for `com.example:*` whose dependency's
    /// javadoc jar is listed in the resolved artifact set.
    pub fn offline_with_resolved_jar(jar: &Path) -> String {
        format!(
            r#"[[offlinelink]]
artifact = "com.example:*"
url = "https://docs.example.com/{{a}}/"

[project]
dependencies = [
    {{ group-id = "com.example", artifact-id = "lib-a", version = "1.0" }},
]
artifacts = [
    {{ group-id = "com.example", artifact-id = "lib-a", version = "1.0", classifier = "javadoc", file = {} }},
]
"#,
            toml_string(&jar.display().to_string())
        )
    }
}

/// A TOML basic string literal for `value`.
pub fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
