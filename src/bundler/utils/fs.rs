//! File system utilities for packaging.
//!
//! Provides directory creation with explicit modes, recursive copies that
//! merge into existing trees, line-oriented file writing and artifact moves.

use crate::bundler::error::{Context, Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{
    fs,
    io::{AsyncWriteExt, BufWriter},
};

/// Mode for directories created in configuration trees and output locations.
pub const DIRECTORY_MODE: u32 = 0o775;

/// Mode for generated executables.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Creates all directories of `path` with [`DIRECTORY_MODE`] (Unix).
pub async fn create_dir_all(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIRECTORY_MODE);
    builder
        .create(path)
        .await
        .fs_context("creating directory", path)
}

/// Writes `lines` to a new file at `path`, terminating each with `\n`.
///
/// The handle is flushed and shut down before returning so write-back
/// errors surface here. A partially written file is left behind on failure.
pub async fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let file = fs::File::create(path)
        .await
        .fs_context("creating file", path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .await
            .fs_context("writing file", path)?;
        writer
            .write_all(b"\n")
            .await
            .fs_context("writing file", path)?;
    }
    writer.shutdown().await.fs_context("closing file", path)
}

/// Marks a file as executable with [`EXECUTABLE_MODE`].
#[cfg(unix)]
pub async fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
        .await
        .fs_context("changing file permissions for", path)
}

/// Marks a file as executable (no-op off Unix).
#[cfg(not(unix))]
pub async fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Existing destination directories are merged into; existing files and
/// symlinks are replaced. Preserves symlinks and file permissions.
/// Fails if the source path is not a directory or doesn't exist.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        crate::bail!("{} does not exist", from.display());
    }
    if !from.is_dir() {
        crate::bail!("{} is not a directory", from.display());
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || copy_dir_blocking(&from, &to))
        .await
        .context("Directory copy task panicked")?
}

fn copy_dir_blocking(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }

    for entry in walkdir::WalkDir::new(from) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(from)?;
        let dest_path = to.join(rel_path);

        if entry.file_type().is_symlink() {
            let target = std::fs::read_link(entry.path())
                .fs_context("reading symlink", entry.path())?;
            remove_existing(&dest_path)?;
            let linked = if entry.path().is_dir() {
                symlink_dir(&target, &dest_path)
            } else {
                symlink_file(&target, &dest_path)
            };
            linked.fs_context("creating symlink", &dest_path)?;
        } else if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
        } else {
            std::fs::copy(entry.path(), &dest_path).fs_context("copying file to", &dest_path)?;
        }
    }

    Ok(())
}

/// Clears whatever sits at `path` so a symlink can be created there.
fn remove_existing(path: &Path) -> Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {
            std::fs::remove_dir_all(path).fs_context("removing directory", path)
        }
        Ok(_) => std::fs::remove_file(path).fs_context("removing file", path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(Error::Fs {
            context: "inspecting",
            path: path.to_path_buf(),
            error,
        }),
    }
}

/// Moves a file, overwriting the destination.
///
/// Falls back to copy and remove when source and destination are on
/// different filesystems.
pub async fn move_file(from: &Path, to: &Path) -> Result<PathBuf> {
    match fs::rename(from, to).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} and {} are on different filesystems, copying",
                from.display(),
                to.display()
            );
            fs::copy(from, to).await.fs_context("copying file to", to)?;
            fs::remove_file(from)
                .await
                .fs_context("removing file", from)?;
        }
        Err(error) => {
            return Err(Error::Fs {
                context: "moving file to",
                path: to.to_path_buf(),
                error,
            });
        }
    }
    Ok(to.to_path_buf())
}

/// Removes a directory and everything below it.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    fs::remove_dir_all(path)
        .await
        .fs_context("removing directory", path)
}
