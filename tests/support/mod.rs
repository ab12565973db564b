//! Shared fixtures for packaging integration tests
#![allow(dead_code)] // Each test binary uses a different subset

use hover_packaging::bundler::{Arch, PackageSettings, Packager, Settings, SettingsBuilder};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const NAME: &str = "myapp";
pub const VERSION: &str = "1.2.3";

/// A hover project laid out in a temporary directory:
///
/// ```text
/// <dir>/go/assets/icon.png
/// <dir>/go/build/outputs/linux/myapp
/// <dir>/go/build/outputs/linux/assets/icon.png
/// <dir>/tmp/      staging root
/// <dir>/tools/    packager search path
/// ```
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Self { dir };
        let go = project.build_root();
        std::fs::create_dir_all(go.join("assets")).unwrap();
        std::fs::write(go.join("assets/icon.png"), "png").unwrap();
        let linux = go.join("build/outputs/linux");
        std::fs::create_dir_all(linux.join("assets")).unwrap();
        std::fs::write(linux.join(NAME), "elf").unwrap();
        std::fs::write(linux.join("assets/icon.png"), "png").unwrap();
        std::fs::create_dir_all(project.temp_root()).unwrap();
        std::fs::create_dir_all(project.tools()).unwrap();
        project
    }

    /// A project directory without the `go` build directory.
    pub fn uninitialized() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Self { dir };
        std::fs::create_dir_all(project.temp_root()).unwrap();
        std::fs::create_dir_all(project.tools()).unwrap();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn build_root(&self) -> PathBuf {
        self.path().join("go")
    }

    pub fn temp_root(&self) -> PathBuf {
        self.path().join("tmp")
    }

    pub fn tools(&self) -> PathBuf {
        self.path().join("tools")
    }

    pub fn format_dir(&self, format: &str) -> PathBuf {
        self.build_root().join("packaging").join(format)
    }

    pub fn output_dir(&self, format: &str) -> PathBuf {
        self.build_root().join("build/outputs").join(format)
    }

    pub fn settings_with(&self, author: Option<&str>, host_os: &str) -> Settings {
        SettingsBuilder::new()
            .build_root(self.build_root())
            .package_settings(PackageSettings {
                name: NAME.into(),
                version: VERSION.into(),
                description: "demo".into(),
                author: author.map(String::from),
            })
            .temp_root(self.temp_root())
            .host_os(host_os)
            .arch(Arch::X86_64)
            .tool_search_path(self.tools())
            .build()
            .unwrap()
    }

    pub fn packager(&self) -> Packager {
        Packager::new(self.settings_with(Some("jane"), "linux"))
    }

    /// Entries left in the staging root.
    pub fn staging_entries(&self) -> Vec<PathBuf> {
        list(&self.temp_root())
    }

    /// Installs an executable shell script on the packager search path.
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools().join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// Sorted directory listing; empty when the directory is missing.
pub fn list(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<_> = match std::fs::read_dir(dir) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    };
    entries.sort();
    entries
}

/// Stand-in for dpkg-deb that checks the staged tree and writes the named output.
pub const FAKE_DPKG_DEB: &str = r#"#!/bin/sh
set -e
[ "$1" = "--build" ] || exit 9
[ "$2" = "." ] || exit 9
test -f DEBIAN/control
test -x usr/bin/myapp
test -f usr/share/applications/myapp.desktop
test -f usr/lib/myapp/myapp
test -f usr/lib/myapp/assets/icon.png
printf 'deb' > "$3"
"#;

/// Stand-in for snapcraft that checks the staged tree and writes a versioned snap.
pub const FAKE_SNAPCRAFT: &str = r#"#!/bin/sh
set -e
[ "$#" -eq 0 ] || exit 9
test -f snap/snapcraft.yaml
test -f snap/local/myapp.desktop
test -f assets/icon.png
test -f build/myapp
printf 'snap' > myapp_1.2.3_amd64.snap
"#;

/// Writes the deb, then makes part of the staged tree undeletable.
pub const LOCKING_DPKG_DEB: &str = r#"#!/bin/sh
set -e
printf 'deb' > "$3"
chmod 0555 usr/lib/myapp
"#;

/// Stand-in packager that always fails.
pub const FAILING_TOOL: &str = "#!/bin/sh\nexit 3\n";
