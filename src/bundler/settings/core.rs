//! Core Settings struct and implementations.

use super::{Arch, PackageSettings};
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    platform::PackagingFormat,
};
use path_absolutize::Absolutize;
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Main settings for packaging operations.
///
/// Holds the project metadata together with every path and host fact the
/// packaging core needs. Constructed via [`SettingsBuilder`](super::SettingsBuilder)
/// and never mutated afterwards.
///
/// # Examples
///
/// ```no_run
/// use hover_packaging::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> hover_packaging::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .build_root("go")
///     .package_settings(PackageSettings {
///         name: "myapp".into(),
///         version: "1.0.0".into(),
///         description: "My application".into(),
///         author: None,
///     })
///     .build()?;
/// assert!(settings.packaging_root().ends_with("go/packaging"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// The `<build>` directory holding assets, outputs and packaging trees.
    build_root: PathBuf,

    /// Parent directory for staging directories.
    temp_root: PathBuf,

    /// Host operating system, as in `std::env::consts::OS`.
    host_os: String,

    /// Architecture of the packaged binaries.
    arch: Arch,

    /// Search path for packager executables. `None` means `PATH`.
    tool_search_path: Option<OsString>,
}

impl Settings {
    /// Returns the project name.
    pub fn product_name(&self) -> &str {
        &self.package.name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the package author, if any.
    pub fn author(&self) -> Option<&str> {
        self.package.author.as_deref()
    }

    /// Returns the `<build>` directory.
    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    /// Returns `<build>/packaging`.
    pub fn packaging_root(&self) -> PathBuf {
        self.build_root.join("packaging")
    }

    /// Returns the absolute `<build>/packaging/<format>` directory.
    ///
    /// Relative build roots are resolved against the working directory.
    pub fn packaging_format_path(&self, format: PackagingFormat) -> Result<PathBuf> {
        let path = self.packaging_root().join(format.as_str());
        let absolute = path
            .absolutize()
            .fs_context("resolving absolute path for", &path)?;
        Ok(absolute.into_owned())
    }

    /// Returns the asset bundle directory, `<build>/assets`.
    pub fn assets_directory(&self) -> PathBuf {
        self.build_root.join("assets")
    }

    /// Returns the compiled build output for a platform, `<build>/build/outputs/<platform>`.
    pub fn build_output_directory(&self, platform: &str) -> PathBuf {
        self.build_root.join("build").join("outputs").join(platform)
    }

    /// Returns the directory that receives the final artifact of a format.
    pub fn output_directory(&self, format: PackagingFormat) -> PathBuf {
        self.build_output_directory(format.as_str())
    }

    /// Returns the parent directory for staging directories.
    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    /// Returns the host operating system.
    pub fn host_os(&self) -> &str {
        &self.host_os
    }

    /// Returns the binary architecture.
    pub fn binary_arch(&self) -> &Arch {
        &self.arch
    }

    /// Returns the packager search path override.
    pub fn tool_search_path(&self) -> Option<&OsStr> {
        self.tool_search_path.as_deref()
    }

    /// Fails unless the `<build>` directory exists.
    pub fn ensure_project_initialized(&self) -> Result<()> {
        if !self.build_root.is_dir() {
            return Err(Error::ProjectNotInitialized {
                path: self.build_root.clone(),
            });
        }
        Ok(())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        build_root: PathBuf,
        temp_root: PathBuf,
        host_os: String,
        arch: Arch,
        tool_search_path: Option<OsString>,
    ) -> Self {
        Self {
            package,
            build_root,
            temp_root,
            host_os,
            arch,
            tool_search_path,
        }
    }
}
