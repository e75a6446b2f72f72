//! Configuration outside the project manifest.
//!
//! - [`GlobalConfig`]: the user-wide `~/.doclink/config.toml` with the local
//!   repository location, offline mode, credentials and mirrors
//! - [`parse_config`]: TOML deserialization of an arbitrary config file
//!
//! The project manifest (`doclink.toml`) is handled by [`crate::manifest`].

mod global;
mod parser;

pub use global::{GlobalConfig, Mirror, ServerCredentials};
pub use parser::parse_config;
