//! Error types for packaging operations.
//!
//! Every failure in the packaging core is reported through [`Error`]. Nothing
//! in this module terminates the process; callers decide how to report.

use super::platform::PackagingFormat;
use std::{fmt::Display, io, path::PathBuf, process::ExitStatus};

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while scaffolding, staging or building a package.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host operating system does not match the format's OS prefix.
    #[error("{format} only works on {required}")]
    UnsupportedOs {
        /// Requested format
        format: PackagingFormat,
        /// Operating system the format requires
        required: &'static str,
    },

    /// The format's configuration tree already exists.
    #[error(
        "A file or directory named `{format}` already exists. Cannot continue packaging init for {format}."
    )]
    AlreadyInitialized {
        /// Requested format
        format: PackagingFormat,
    },

    /// The format's configuration tree has never been scaffolded.
    #[error(
        "{format} is not initialized for packaging. Please run `hover init-packaging {format}` first."
    )]
    NotInitialized {
        /// Requested format
        format: PackagingFormat,
    },

    /// The project's build directory does not exist.
    #[error("`{}` directory is missing. Please run `hover init` first.", .path.display())]
    ProjectNotInitialized {
        /// Expected build directory
        path: PathBuf,
    },

    /// A packaging format identifier could not be parsed.
    #[error("unknown packaging format `{0}` (expected one of: linux-snap, linux-deb)")]
    UnknownFormat(String),

    /// The native packaging executable is not on the search path.
    #[error("Failed to lookup `{tool}` executable. {hint}")]
    ToolNotFound {
        /// Executable name
        tool: &'static str,
        /// Installation hint
        hint: &'static str,
    },

    /// The current OS user could not be determined.
    #[error("Couldn't get current user")]
    CurrentUser,

    /// Filesystem operation failed.
    #[error("Failed {context} {}: {error}", .path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// Spawning a child process failed.
    #[error("Failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command that failed to start
        command: String,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// The native packager exited unsuccessfully.
    #[error("Failed to package {kind}: {status}")]
    PackagerFailed {
        /// Package kind (`snap`, `deb`)
        kind: &'static str,
        /// Exit status of the packager
        status: ExitStatus,
    },

    /// IO error without further context.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Directory traversal error during a copy.
    #[error("{0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix stripping error during a copy.
    #[error("{0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Any other failure.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches a message to `Option` and `Result` values.
pub trait Context<T> {
    /// Converts `None`/`Err` into [`Error::GenericError`] with `msg`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Attaches an operation name and path to IO failures.
pub trait ErrorExt<T> {
    /// Maps an IO error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for io::Result<T> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
