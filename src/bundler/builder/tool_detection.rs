//! External tool detection.
//!
//! Locates the native packager executable for a format before any staging
//! work starts.

use crate::bundler::{
    error::{Error, Result},
    platform::PackagingFormat,
    settings::Settings,
};
use std::path::PathBuf;

/// Resolves the packager executable for `format` on the configured search path.
///
/// Falls back to `PATH` when the settings carry no search path override.
pub fn locate_packager(settings: &Settings, format: PackagingFormat) -> Result<PathBuf> {
    let tool = format.packager_tool();
    let found = match settings.tool_search_path() {
        Some(paths) => {
            let cwd = std::env::current_dir()?;
            which::which_in(tool, Some(paths), cwd)
        }
        None => which::which(tool),
    };

    match found {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("{} not found: {}", tool, e);
            Err(Error::ToolNotFound {
                tool,
                hint: format.install_hint(),
            })
        }
    }
}
