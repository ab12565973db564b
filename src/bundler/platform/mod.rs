//! Packaging formats and their platform recipes.
//!
//! Each format is an independent recipe under a platform module. This module
//! owns the format identifiers and the staging entry point shared by them.

pub mod linux;

use super::{
    error::{Error, ErrorExt, Result},
    settings::Settings,
};
use std::{fmt, path::PathBuf, str::FromStr};

/// Native packaging format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PackagingFormat {
    /// Snap package built with snapcraft
    LinuxSnap,
    /// Debian package built with dpkg-deb
    LinuxDeb,
}

impl PackagingFormat {
    /// All supported formats.
    pub const ALL: [PackagingFormat; 2] = [PackagingFormat::LinuxSnap, PackagingFormat::LinuxDeb];

    /// Identifier used for directory names and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingFormat::LinuxSnap => "linux-snap",
            PackagingFormat::LinuxDeb => "linux-deb",
        }
    }

    /// Operating system the format can be produced on (identifier prefix before `-`).
    pub fn required_os(&self) -> &'static str {
        self.as_str().split('-').next().unwrap_or_default()
    }

    /// Short package kind used in progress messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PackagingFormat::LinuxSnap => "snap",
            PackagingFormat::LinuxDeb => "deb",
        }
    }

    /// Native packager executable.
    pub fn packager_tool(&self) -> &'static str {
        match self {
            PackagingFormat::LinuxSnap => "snapcraft",
            PackagingFormat::LinuxDeb => "dpkg-deb",
        }
    }

    /// Installation hint shown when the packager is missing.
    pub fn install_hint(&self) -> &'static str {
        match self {
            PackagingFormat::LinuxSnap => {
                "Please install snapcraft.\nhttps://tutorials.ubuntu.com/tutorial/create-your-first-snap#1"
            }
            PackagingFormat::LinuxDeb => "Please install dpkg-deb.",
        }
    }
}

impl fmt::Display for PackagingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackagingFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PackagingFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Fails unless the host operating system matches the format's OS prefix.
pub fn assert_correct_os(settings: &Settings, format: PackagingFormat) -> Result<()> {
    if settings.host_os() != format.required_os() {
        return Err(Error::UnsupportedOs {
            format,
            required: format.required_os(),
        });
    }
    Ok(())
}

/// Removes every `-` and `_` from a project name.
///
/// Snap and Debian package names are derived from this form.
pub fn strip_separators(name: &str) -> String {
    name.chars().filter(|c| *c != '-' && *c != '_').collect()
}

/// Creates a fresh staging directory and copies the build output, assets and
/// the scaffolded configuration tree into it.
///
/// On failure the staging directory is left in place for inspection.
pub async fn stage(settings: &Settings, format: PackagingFormat) -> Result<PathBuf> {
    let staging_dir = create_staging_directory(settings, format).await?;
    log::info!("Packaging {} in {}", format.kind(), staging_dir.display());

    match format {
        PackagingFormat::LinuxSnap => linux::snap::stage_project(settings, &staging_dir).await?,
        PackagingFormat::LinuxDeb => linux::debian::stage_project(settings, &staging_dir).await?,
    }

    Ok(staging_dir)
}

/// Creates `<temp>/hover-build-<name>-<format>-<uuid>`; never reuses a directory.
async fn create_staging_directory(settings: &Settings, format: PackagingFormat) -> Result<PathBuf> {
    let staging_dir = settings.temp_root().join(format!(
        "hover-build-{}-{}-{}",
        settings.product_name(),
        format,
        uuid::Uuid::new_v4().simple()
    ));
    tokio::fs::create_dir(&staging_dir)
        .await
        .fs_context("creating temporary build directory", &staging_dir)?;
    Ok(staging_dir)
}
