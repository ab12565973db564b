//! Command line interface for hover packaging.
//!
//! Parses arguments, loads project metadata, builds [`Settings`] and
//! dispatches to the [`Packager`]. Errors are returned to `main`, which
//! reports them and picks the exit code.

mod args;
mod output;

pub use args::{Args, Command, FormatCommand};
pub use output::{OutputManager, PREFIX, write_prefixed};

use std::path::{Path, PathBuf};

use crate::{
    bundler::{Packager, PackagingFormat, Settings, SettingsBuilder},
    error::Result,
    metadata::ProjectMetadata,
};

/// Main CLI entry point
pub async fn run(args: &Args) -> Result<()> {
    let output = OutputManager::new();
    let settings = settings_from_args(args)?;
    let packager = Packager::new(settings);

    match args.command {
        Command::InitPackaging { format } => {
            let format = PackagingFormat::from(format);
            packager.init(format).await?;
            let format_dir =
                project_relative_format_dir(&args.project_dir, packager.settings(), format);
            output.println(&format!(
                "{} has been created. You can modify the configuration files and add it to git.",
                format_dir.display()
            ))?;
            output.println(&format!(
                "You now can package the {} using `hover build {}`",
                format.required_os(),
                format
            ))?;
        }
        Command::Build { format } => {
            let format = PackagingFormat::from(format);
            let artifact = packager.build(format).await?;
            output.println(&format!(
                "Successfully packaged {}: {}",
                format,
                artifact.path.display()
            ))?;
            output.println(&format!("SHA256: {}", artifact.checksum))?;
        }
    }

    Ok(())
}

/// Loads `pubspec.yaml` and builds packaging settings for the project.
pub fn settings_from_args(args: &Args) -> Result<Settings> {
    let metadata = ProjectMetadata::load(&args.project_dir)?;
    let settings = SettingsBuilder::new()
        .package_settings(metadata.into())
        .build_root(args.build_root())
        .build()?;
    Ok(settings)
}

/// `<build>/packaging/<format>` as seen from the project directory.
fn project_relative_format_dir(
    project_dir: &Path,
    settings: &Settings,
    format: PackagingFormat,
) -> PathBuf {
    let build_root = settings.build_root();
    build_root
        .strip_prefix(project_dir)
        .unwrap_or(build_root)
        .join("packaging")
        .join(format.as_str())
}
