//! Error handling for doclink
//!
//! This module provides the error types and user-friendly error reporting for
//! doclink. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`DoclinkError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//!
//! # Error Categories
//!
//! - **Configuration**: [`DoclinkError::InvalidPattern`], [`DoclinkError::TemplateSubstitution`],
//!   [`DoclinkError::InvalidUrl`], [`DoclinkError::ManifestParseError`]
//! - **Resolution**: [`DoclinkError::ArtifactNotFound`], [`DoclinkError::ArtifactResolutionFailed`],
//!   [`DoclinkError::NetworkError`]
//! - **Output assembly**: [`DoclinkError::ArchiveError`], [`DoclinkError::IndexNotFound`],
//!   [`DoclinkError::FileSystemError`]
//!
//! Resolution errors are recoverable per artifact; the resolution engine logs
//! them and moves on. Configuration and output errors abort the run and reach
//! the binary, which turns them into an [`ErrorContext`] with
//! [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use doclink_cli::core::{DoclinkError, user_friendly_error};
//!
//! let error = DoclinkError::ManifestNotFound;
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for doclink operations.
#[derive(Error, Debug, Clone)]
pub enum DoclinkError {
    /// An artifact pattern could not be compiled
    #[error("Invalid artifact pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// A `{name}` placeholder in a URL template has no unique value
    #[error("No unique value for '{name}' in URL template '{template}': {reason}")]
    TemplateSubstitution {
        /// The URL template being expanded
        template: String,
        /// The placeholder name as written in the template
        name: String,
        /// Either "not defined" or the list of conflicting candidates
        reason: String,
    },

    /// A resolved URL is not a valid URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL text after substitution
        url: String,
        /// Parser message
        reason: String,
    },

    /// No configured repository holds the artifact
    #[error("Artifact '{coordinate}' not found in any repository")]
    ArtifactNotFound {
        /// Full coordinate of the missing artifact
        coordinate: String,
        /// Locations that were tried
        tried: Vec<String>,
    },

    /// Resolution failed for a reason other than absence
    #[error("Failed to resolve artifact '{coordinate}': {reason}")]
    ArtifactResolutionFailed {
        /// Full coordinate of the artifact
        coordinate: String,
        /// Underlying reason
        reason: String,
    },

    /// A jar archive could not be opened or read
    #[error("Cannot read archive {path}: {reason}")]
    ArchiveError {
        /// Archive location on disk
        path: String,
        /// Underlying reason
        reason: String,
    },

    /// Neither `element-list` nor `package-list` could be read
    #[error("Could not read any of [element-list, package-list] from {location}")]
    IndexNotFound {
        /// The location that was probed
        location: String,
    },

    /// Manifest file not found
    #[error("Manifest file doclink.toml not found in current directory or any parent directory")]
    ManifestNotFound,

    /// Manifest file could not be parsed
    #[error("Invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Manifest path
        file: String,
        /// Parser message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// HTTP transport error
    #[error("Network error: {operation}")]
    NetworkError {
        /// What was being done
        operation: String,
        /// Underlying reason
        reason: String,
    },

    /// Filesystem error
    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was being done
        operation: String,
        /// The path involved
        path: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper with a suggestion and details for CLI display.
///
/// ```rust,no_run
/// use doclink_cli::core::{DoclinkError, ErrorContext};
///
/// let context = ErrorContext::new(DoclinkError::ManifestNotFound)
///     .with_suggestion("Create a doclink.toml file in your project directory")
///     .with_details("doclink searches current and parent directories for doclink.toml");
///
/// println!("{}", context);
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DoclinkError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DoclinkError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Recognizes [`DoclinkError`] anywhere in the chain, [`std::io::Error`] and
/// [`toml::de::Error`]; anything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(doclink_error) = error.chain().find_map(|e| e.downcast_ref::<DoclinkError>()) {
        let mut ctx = create_error_context(doclink_error.clone());
        if error.downcast_ref::<DoclinkError>().is_none() {
            // The typed error sits below added context; keep the outer message visible
            ctx.details = Some(match ctx.details {
                Some(details) => format!("{error}\n{details}"),
                None => error.to_string(),
            });
        }
        return ctx;
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DoclinkError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check ownership and permissions of the output directory")
                .with_details(io_error.to_string());
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DoclinkError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(io_error.to_string());
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DoclinkError::ManifestParseError {
            file: "doclink.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your doclink.toml file")
        .with_details(toml_error.to_string());
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DoclinkError::Other {
        message,
    })
}

fn create_error_context(error: DoclinkError) -> ErrorContext {
    let (suggestion, details): (Option<String>, Option<String>) = match &error {
        DoclinkError::InvalidPattern { .. } => (
            Some("Patterns have the form groupId[:artifactId[:version]]; any segment may be '*'".into()),
            Some("Separate several patterns in one 'artifact' value with commas or whitespace".into()),
        ),
        DoclinkError::TemplateSubstitution { .. } => (
            Some("Use one of {g}, {a}, {v}, {groupId}, {artifactId}, {version}, {major}, {minor}, {micro}, {patch}".into()),
            Some("Placeholder names are case-insensitive and may be abbreviated to any unambiguous prefix".into()),
        ),
        DoclinkError::InvalidUrl { .. } => (
            Some("Check the 'url' value of the link rule; it must be an absolute URL after substitution".into()),
            None,
        ),
        DoclinkError::ArtifactNotFound { tried, .. } => {
            let details = if tried.is_empty() {
                "No repositories were available (offline mode or none configured)".to_string()
            } else {
                format!("Tried:\n  {}", tried.join("\n  "))
            };
            (
                Some("Check the [[repositories]] section of doclink.toml or disable offline mode".into()),
                Some(details),
            )
        }
        DoclinkError::ArchiveError { .. } => (
            Some("Delete the artifact from the local repository so it is downloaded again".into()),
            Some("The javadoc jar is corrupt or is not a zip archive".into()),
        ),
        DoclinkError::ManifestNotFound => (
            Some("Create a doclink.toml file in your project directory or pass --manifest-path".into()),
            Some("doclink looks for doclink.toml in the current directory and parent directories".into()),
        ),
        DoclinkError::ManifestParseError { file, reason } => {
            (Some(format!("Check the TOML syntax in {file}")), Some(reason.clone()))
        }
        DoclinkError::NetworkError { reason, .. } => (
            Some("Check your internet connection or run with --offline".into()),
            Some(reason.clone()),
        ),
        DoclinkError::FileSystemError { path, .. } => (
            Some("Check that the output directory is writable".into()),
            Some(format!("Path: {path}")),
        ),
        _ => (None, None),
    };

    ErrorContext {
        error,
        suggestion,
        details,
    }
}
