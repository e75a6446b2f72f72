//! doclink - javadoc link resolver
//!
//! Given the dependencies of a Java project, doclink decides which external
//! API documentation sites each dependency is linked against, fetches javadoc
//! jars for dependencies that are linked *offline*, and writes what the
//! javadoc tool consumes: an options file with `-link`/`-linkoffline`
//! directives, extracted `element-list`/`package-list` files, or a javadoc map
//! from package name to documentation URL.
//!
//! # Architecture Overview
//!
//! ```text
//! project dependencies
//!   -> link rules (pattern + URL template)     links, pattern, templating
//!   -> link set + offline resolution            resolver
//!   -> options file / extracted index / map     output
//! ```
//!
//! # Core Modules
//!
//! - [`coordinate`] - Artifact coordinates and the versionless merge key
//! - [`pattern`] - `groupId[:artifactId[:version]]` glob patterns
//! - [`templating`] - `{placeholder}` expansion in URL templates
//! - [`links`] - Link rules and the ordered link set
//! - [`resolver`] - The offline resolution engine and the Maven repository
//! - [`output`] - Options files, index extraction and the javadoc map
//!
//! ## Supporting Modules
//! - [`archive`] - Reading javadoc jars
//! - [`cli`] - The `doclink` command tree
//! - [`config`] - Global configuration (`~/.doclink/config.toml`)
//! - [`core`] - Error types and user-facing error reporting
//! - [`manifest`] - Project manifest (`doclink.toml`)
//! - [`models`] - Project model: dependencies and resolved artifacts
//! - [`utils`] - Filesystem, path, progress and redaction helpers
//!
//! # Manifest Format (doclink.toml)
//!
//! ```toml
//! [[link]]
//! artifact = "com.example:*"
//! url = "https://docs.example.com/{a}/{v}/"
//!
//! [[offlinelink]]
//! artifact = "org.slf4j:*"
//! url = "https://www.slf4j.org/apidocs/"
//!
//! [project]
//! dependencies = [
//!     { group-id = "com.example", artifact-id = "lib-a", version = "1.2.3" },
//!     { group-id = "org.slf4j", artifact-id = "slf4j-api", version = "2.0.13" },
//! ]
//! ```
//!
//! `doclink options` then writes
//!
//! ```text
//! -link https://docs.example.com/lib-a/1.2.3/
//! -linkoffline https://www.slf4j.org/apidocs/ target/javadoc-options/org.slf4j:slf4j-api
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coordinate;
pub mod core;
pub mod links;
pub mod manifest;
pub mod models;
pub mod output;
pub mod pattern;
pub mod resolver;
pub mod templating;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
