//! Constants used throughout the doclink codebase.
//!
//! File names, artifact types and defaults that more than one module needs
//! live here so the output formats stay in one place.

use std::time::Duration;

/// Packaging type of plain and javadoc jars.
pub const JAR_TYPE: &str = "jar";

/// Classifier of javadoc archives.
pub const JAVADOC_CLASSIFIER: &str = "javadoc";

/// Suffix of snapshot base versions.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Index file written by javadoc 10 and later.
pub const ELEMENT_LIST: &str = "element-list";

/// Index file written by javadoc 9 and earlier.
pub const PACKAGE_LIST: &str = "package-list";

/// Index names in lookup order.
pub const INDEX_NAMES: [&str; 2] = [ELEMENT_LIST, PACKAGE_LIST];

/// Archive entries copied into an offline link directory.
pub const INDEX_ENTRY_PATTERN: &str = r"^(package|element)[^-]*-list$";

/// Prefix of the module declaration line in an `element-list`.
pub const MODULE_PREFIX: &str = "module:";

/// Manifest file name searched for in the current and parent directories.
pub const MANIFEST_FILE_NAME: &str = "doclink.toml";

/// Default base directory for all outputs, relative to the manifest.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target";

/// Subdirectory of the `options` command.
pub const OPTIONS_DIRECTORY: &str = "javadoc-options";

/// Options file written by the `options` command.
pub const OPTIONS_FILE_NAME: &str = "options";

/// Subdirectory of the `offline-links` command.
pub const OFFLINE_LINKS_DIRECTORY: &str = "offline-links";

/// Options file written by the `offline-links` command.
pub const OFFLINE_OPTIONS_FILE_NAME: &str = "OPTIONS";

/// Default output of the `map` command.
pub const JAVADOC_MAP_FILE_NAME: &str = "javadoc-map.properties";

/// Default remote repository when none is configured.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2/";

/// Repository id of [`MAVEN_CENTRAL_URL`].
pub const MAVEN_CENTRAL_ID: &str = "central";

/// Default local repository.
pub const DEFAULT_LOCAL_REPOSITORY: &str = "~/.m2/repository";

/// Timeout for a single HTTP request (artifact download or index fetch).
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable that disables spinners.
pub const NO_PROGRESS_ENV: &str = "DOCLINK_NO_PROGRESS";
