//! Core types for doclink
//!
//! This module holds the error types shared by every other module.
//!
//! ## `error` - Error Handling
//!
//! - [`DoclinkError`] - Enumerated error types covering doclink failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! # Example
//!
//! ```rust,no_run
//! use doclink_cli::core::{DoclinkError, user_friendly_error};
//!
//! fn load() -> anyhow::Result<()> {
//!     Err(DoclinkError::ManifestNotFound.into())
//! }
//!
//! if let Err(e) = load() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;

pub use error::{DoclinkError, ErrorContext, user_friendly_error};
