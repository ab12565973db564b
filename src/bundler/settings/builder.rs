//! Builder for constructing Settings.

use super::{Arch, PackageSettings, Settings};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Builder for constructing [`Settings`].
///
/// Only the package metadata and the build root are required; host facts
/// default to the running machine.
///
/// # Examples
///
/// ```no_run
/// use hover_packaging::bundler::{Arch, PackageSettings, SettingsBuilder};
///
/// # fn example() -> hover_packaging::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .build_root("/work/myapp/go")
///     .package_settings(PackageSettings {
///         name: "myapp".into(),
///         version: "1.0.0".into(),
///         ..Default::default()
///     })
///     .arch(Arch::X86_64)
///     .temp_root("/var/tmp")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    package_settings: Option<PackageSettings>,
    build_root: Option<PathBuf>,
    temp_root: Option<PathBuf>,
    host_os: Option<String>,
    arch: Option<Arch>,
    tool_search_path: Option<OsString>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the `<build>` directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn build_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the parent directory for staging directories.
    ///
    /// Default: `std::env::temp_dir()`
    pub fn temp_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.temp_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the host operating system name.
    ///
    /// Default: `std::env::consts::OS`
    pub fn host_os(mut self, os: impl Into<String>) -> Self {
        self.host_os = Some(os.into());
        self
    }

    /// Sets the binary architecture.
    ///
    /// Default: [`Arch::host`]
    pub fn arch(mut self, arch: Arch) -> Self {
        self.arch = Some(arch);
        self
    }

    /// Sets a `PATH`-style search path for packager executables.
    ///
    /// Default: None (uses `PATH`)
    pub fn tool_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.tool_search_path = Some(paths.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `package_settings`
    /// - `build_root`
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            self.build_root.context("build_root is required")?,
            self.temp_root.unwrap_or_else(std::env::temp_dir),
            self.host_os
                .unwrap_or_else(|| std::env::consts::OS.to_string()),
            self.arch.unwrap_or_else(Arch::host),
            self.tool_search_path,
        ))
    }
}
