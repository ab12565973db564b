//! Snap and deb packaging for hover desktop applications
//!
//! This library scaffolds packaging configuration and builds:
//! - snap packages (via `snapcraft`)
//! - deb packages (via `dpkg-deb`)
//!
//! It backs the `hover` binary and can be used as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{CliError, HoverError, Result};
