//! Top-level error types for the `hover` command.
//!
//! The binary reports every error as `hover: <message>` and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for command execution
pub type Result<T> = std::result::Result<T, HoverError>;

/// Main error type for the `hover` command
#[derive(Error, Debug)]
pub enum HoverError {
    /// CLI and project setup errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Packaging errors
    #[error(transparent)]
    Packaging(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// pubspec.yaml could not be read
    #[error("Failed to read {}: {reason}", .path.display())]
    MetadataUnreadable {
        /// Expected pubspec.yaml location
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// pubspec.yaml is not valid YAML or has the wrong shape
    #[error("Failed to parse {}: {source}", .path.display())]
    MetadataInvalid {
        /// pubspec.yaml location
        path: PathBuf,
        /// Parser error
        source: serde_yaml_ng::Error,
    },

    /// A required metadata field is missing
    #[error("Missing `{field}` field in pubspec.yaml")]
    MissingMetadata {
        /// Field name
        field: &'static str,
    },
}
