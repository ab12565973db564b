//! Debian packaging - dpkg-deb tree scaffolding and staging.
//!
//! # Configuration tree
//!
//! ```text
//! <build>/packaging/linux-deb/
//! ├── DEBIAN/
//! │   └── control
//! └── usr/
//!     ├── bin/
//!     │   └── <stripped name>          (shell wrapper)
//!     └── share/
//!         └── applications/
//!             └── <name>.desktop
//! ```
//!
//! The compiled build is staged at `usr/lib/<name>/`, and the wrapper
//! re-executes `/usr/lib/<name>/<name>`.

use super::{BUILD_PLATFORM, LINUX_PACKAGING_DEPENDENCIES, desktop::desktop_entry};
use crate::bundler::{
    error::{Error, Result},
    platform::{PackagingFormat, strip_separators},
    settings::Settings,
    utils::fs,
};
use std::path::Path;

/// Picks the package maintainer name (without the `@` prefix): the project
/// author, else the current OS user.
pub fn resolve_maintainer(author: Option<&str>) -> Result<String> {
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        return Ok(author.to_string());
    }

    log::warn!("Missing author field in pubspec.yaml");
    let name = current_username().ok_or(Error::CurrentUser)?;
    log::warn!("Using this username from system instead: {}", name);
    Ok(name)
}

#[cfg(unix)]
fn current_username() -> Option<String> {
    users::get_current_username().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn current_username() -> Option<String> {
    std::env::var("USERNAME").ok()
}

/// Writes the dpkg-deb tree into an empty format directory.
pub async fn init_project(
    settings: &Settings,
    format_dir: &Path,
    maintainer: &str,
) -> Result<()> {
    let debian_dir = format_dir.join("DEBIAN");
    let bin_dir = format_dir.join("usr").join("bin");
    let applications_dir = format_dir.join("usr").join("share").join("applications");
    for dir in [&debian_dir, &bin_dir, &applications_dir] {
        fs::create_dir_all(dir).await?;
    }

    let control_file = debian_dir.join("control");
    fs::write_lines(&control_file, &control_file_lines(settings, maintainer)).await?;
    log::debug!("Wrote {}", control_file.display());

    let name = settings.product_name();
    let bin_file = bin_dir.join(strip_separators(name));
    fs::write_lines(&bin_file, &wrapper_script(name)).await?;
    fs::set_executable(&bin_file).await?;
    log::debug!("Wrote {}", bin_file.display());

    let desktop_file = applications_dir.join(format!("{name}.desktop"));
    let entry = desktop_entry(
        name,
        settings.version_string(),
        &format!("/usr/bin/{name}"),
        &format!("/usr/lib/{name}/assets/icon.png"),
    );
    fs::write_lines(&desktop_file, &entry).await?;
    log::debug!("Wrote {}", desktop_file.display());

    Ok(())
}

/// Lines of `DEBIAN/control`.
pub fn control_file_lines(settings: &Settings, maintainer: &str) -> Vec<String> {
    vec![
        format!("Package: {}", strip_separators(settings.product_name())),
        format!("Architecture: {}", settings.binary_arch()),
        format!("Maintainer: @{}", maintainer),
        "Priority: optional".to_string(),
        format!("Version: {}", settings.version_string()),
        format!("Description: {}", settings.description()),
        format!("Depends: {}", LINUX_PACKAGING_DEPENDENCIES.join(",")),
    ]
}

/// Shell wrapper installed under `/usr/bin`.
pub fn wrapper_script(name: &str) -> Vec<String> {
    vec![
        "#!/bin/sh".to_string(),
        format!("exec /usr/lib/{name}/{name} \"$@\""),
    ]
}

/// Copies the Linux build to `usr/lib/<name>` and merges the deb tree into `staging_dir`.
pub async fn stage_project(settings: &Settings, staging_dir: &Path) -> Result<()> {
    let lib_dir = staging_dir
        .join("usr")
        .join("lib")
        .join(settings.product_name());
    fs::copy_dir(&settings.build_output_directory(BUILD_PLATFORM), &lib_dir).await?;
    let format_dir = settings.packaging_format_path(PackagingFormat::LinuxDeb)?;
    fs::copy_dir(&format_dir, staging_dir).await
}

/// Arguments passed to `dpkg-deb`; the output name is chosen here.
pub fn packager_args(settings: &Settings) -> Vec<String> {
    vec![
        "--build".to_string(),
        ".".to_string(),
        artifact_file_name(settings),
    ]
}

/// File name dpkg-deb writes, identical to the stable artifact name.
pub fn produced_file_name(settings: &Settings) -> String {
    artifact_file_name(settings)
}

/// Stable artifact name.
pub fn artifact_file_name(settings: &Settings) -> String {
    format!(
        "{}_{}.deb",
        strip_separators(settings.product_name()),
        settings.binary_arch()
    )
}
