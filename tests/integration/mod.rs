//! Integration test suite for doclink
//!
//! These tests drive the `doclink` binary against temporary projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **options**: `doclink options`, link/offline precedence, index extraction
//! - **offline_links**: `doclink offline-links`
//! - **map**: `doclink map` in plain and XML form
//! - **check**: `doclink check`
//! - **remote**: downloading javadoc jars from a remote repository
//! - **error_scenarios**: failures reported to the user

#[path = "../common/mod.rs"]
mod common;

mod check;
mod error_scenarios;
mod map;
mod offline_links;
mod options;
mod remote;
