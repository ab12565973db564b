//! Command line argument parsing.
//!
//! Mirrors the `hover init-packaging <format>` and `hover build <format>`
//! command tree using clap derive.

use crate::bundler::PackagingFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Snap and deb packaging for hover desktop applications
#[derive(Parser, Debug)]
#[command(
    name = "hover",
    version,
    about = "Snap and deb packaging for hover desktop applications",
    long_about = "Creates packaging configuration for a format once, then builds installable packages from it.

Usage:
  hover init-packaging linux-deb
  hover build linux-deb

Exit code 0 = the package exists at go/build/outputs/<format>/."
)]
pub struct Args {
    /// Project directory containing pubspec.yaml
    #[arg(long, env = "HOVER_PROJECT_DIR", value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Build directory, relative to the project directory
    #[arg(long, env = "HOVER_BUILD_DIR", value_name = "DIR", default_value = "go")]
    pub build_dir: PathBuf,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create configuration files for a packaging format
    InitPackaging {
        /// Packaging format
        #[command(subcommand)]
        format: FormatCommand,
    },
    /// Build a package for a packaging format
    Build {
        /// Packaging format
        #[command(subcommand)]
        format: FormatCommand,
    },
}

/// Packaging format subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    /// Snap packaging
    LinuxSnap,
    /// Deb packaging
    LinuxDeb,
}

impl From<FormatCommand> for PackagingFormat {
    fn from(command: FormatCommand) -> Self {
        match command {
            FormatCommand::LinuxSnap => PackagingFormat::LinuxSnap,
            FormatCommand::LinuxDeb => PackagingFormat::LinuxDeb,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// `<project>/<build-dir>`, unless the build directory is absolute.
    pub fn build_root(&self) -> PathBuf {
        self.project_dir.join(&self.build_dir)
    }

    /// Log filter for env_logger
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "hover_packaging=debug"
        } else {
            "hover_packaging=info"
        }
    }
}
