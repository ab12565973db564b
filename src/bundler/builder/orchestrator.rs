//! Packaging orchestration.
//!
//! This module provides the [`Packager`] that sequences scaffolding,
//! staging, packager invocation and artifact placement for each format.

use crate::bundler::{
    error::{Error, Result},
    platform::{self, PackagingFormat, assert_correct_os, linux},
    settings::Settings,
    utils::fs,
};
use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use super::{checksum::calculate_sha256, tool_detection::locate_packager};

/// A package produced by [`Packager::build`].
#[derive(Debug, Clone)]
pub struct PackagedArtifact {
    /// Format that was built
    pub format: PackagingFormat,
    /// Final location of the artifact
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256
    pub checksum: String,
}

/// Main packaging orchestrator.
///
/// Every step is awaited before the next one starts, and every failure is
/// returned to the caller unchanged. Nothing is rolled back: directories
/// created before a failure remain, and a staging directory is only removed
/// once its artifact has been moved out.
///
/// # Examples
///
/// ```no_run
/// use hover_packaging::bundler::{Packager, PackagingFormat, Settings};
///
/// # async fn example(settings: Settings) -> hover_packaging::bundler::Result<()> {
/// let packager = Packager::new(settings);
/// packager.init(PackagingFormat::LinuxDeb).await?;
/// let artifact = packager.build(PackagingFormat::LinuxDeb).await?;
/// println!("Created {} ({} bytes)", artifact.path.display(), artifact.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the packaging settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Scaffolds the configuration tree for `format`.
    ///
    /// Fails without touching the filesystem if the host OS does not match,
    /// the project is not initialized, or the format directory already
    /// exists. Returns the created format directory.
    pub async fn init(&self, format: PackagingFormat) -> Result<PathBuf> {
        let settings = &self.settings;
        assert_correct_os(settings, format)?;
        settings.ensure_project_initialized()?;

        match format {
            PackagingFormat::LinuxSnap => {
                let format_dir = self.create_format_directory(format).await?;
                linux::snap::init_project(settings, &format_dir).await?;
                Ok(format_dir)
            }
            PackagingFormat::LinuxDeb => {
                let maintainer = linux::debian::resolve_maintainer(settings.author())?;
                let format_dir = self.create_format_directory(format).await?;
                linux::debian::init_project(settings, &format_dir, &maintainer).await?;
                Ok(format_dir)
            }
        }
    }

    /// Builds the package for `format` and moves it to the format's output directory.
    ///
    /// Guards run before any staging directory is created: host OS, project
    /// initialization, format initialization and packager availability.
    pub async fn build(&self, format: PackagingFormat) -> Result<PackagedArtifact> {
        let settings = &self.settings;
        assert_correct_os(settings, format)?;
        settings.ensure_project_initialized()?;
        self.assert_format_initialized(format)?;
        let packager = locate_packager(settings, format)?;

        let staging_dir = platform::stage(settings, format).await?;

        let (args, produced_name, artifact_name) = match format {
            PackagingFormat::LinuxSnap => (
                linux::snap::packager_args(settings),
                linux::snap::produced_file_name(settings),
                linux::snap::artifact_file_name(settings),
            ),
            PackagingFormat::LinuxDeb => (
                linux::debian::packager_args(settings),
                linux::debian::produced_file_name(settings),
                linux::debian::artifact_file_name(settings),
            ),
        };

        run_packager(&packager, &args, &staging_dir, format).await?;

        let output_dir = settings.output_directory(format);
        fs::create_dir_all(&output_dir).await?;
        let artifact_path = fs::move_file(
            &staging_dir.join(produced_name),
            &output_dir.join(artifact_name),
        )
        .await?;
        log::debug!("Moved {} to {}", format.kind(), artifact_path.display());

        fs::remove_dir_all(&staging_dir).await?;

        let size = tokio::fs::metadata(&artifact_path).await?.len();
        let checksum = calculate_sha256(&artifact_path).await?;
        log::info!("Created {}: {}", format.kind(), artifact_path.display());

        Ok(PackagedArtifact {
            format,
            path: artifact_path,
            size,
            checksum,
        })
    }

    /// Fails unless the format's configuration tree exists.
    fn assert_format_initialized(&self, format: PackagingFormat) -> Result<()> {
        let format_dir = self.settings.packaging_format_path(format)?;
        if !format_dir.exists() {
            return Err(Error::NotInitialized { format });
        }
        Ok(())
    }

    /// Creates `<build>/packaging/<format>`, refusing to reuse an existing path.
    async fn create_format_directory(&self, format: PackagingFormat) -> Result<PathBuf> {
        let format_dir = self.settings.packaging_format_path(format)?;
        if tokio::fs::symlink_metadata(&format_dir).await.is_ok() {
            return Err(Error::AlreadyInitialized { format });
        }
        fs::create_dir_all(&format_dir).await?;
        Ok(format_dir)
    }
}

/// Runs the native packager in `staging_dir` with the terminal attached.
///
/// The packager may prompt the user; there is no timeout.
async fn run_packager(
    packager: &Path,
    args: &[String],
    staging_dir: &Path,
    format: PackagingFormat,
) -> Result<()> {
    log::debug!("Running {} {}", packager.display(), args.join(" "));

    let status = tokio::process::Command::new(packager)
        .args(args)
        .current_dir(staging_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: format.packager_tool().to_string(),
            error,
        })?;

    if !status.success() {
        log::debug!("Leaving {} in place for inspection", staging_dir.display());
        return Err(Error::PackagerFailed {
            kind: format.kind(),
            status,
        });
    }

    Ok(())
}
