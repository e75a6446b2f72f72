//! File system helpers for generated output.
//!
//! Everything doclink writes (option files, property maps, downloaded jars)
//! goes through [`atomic_write`], so a reader never observes a partially
//! written file. Extraction directories are created with [`ensure_dir`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use doclink_cli::utils::fs::{ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("target/javadoc-options"))?;
//! safe_write(Path::new("target/javadoc-options/options"), "-link https://docs.example.com/\n")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;

pub use atomic::{atomic_write, safe_write};
pub use dirs::{copy_file, ensure_dir, ensure_parent_dir};
