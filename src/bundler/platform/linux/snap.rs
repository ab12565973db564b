//! Snap packaging - snapcraft project scaffolding and staging.
//!
//! # Configuration tree
//!
//! ```text
//! <build>/packaging/linux-snap/
//! └── snap/
//!     ├── snapcraft.yaml
//!     └── local/
//!         └── <name>.desktop
//! ```
//!
//! # Staging layout
//!
//! The staging root receives `assets/`, `build/` and the configuration tree,
//! matching the three dump parts declared in `snapcraft.yaml`. `snapcraft`
//! then runs with no arguments and leaves `<name>_<version>_<arch>.snap`
//! in the staging root.

use super::{BUILD_PLATFORM, LINUX_PACKAGING_DEPENDENCIES, desktop::desktop_entry};
use crate::bundler::{
    error::Result,
    platform::{PackagingFormat, strip_separators},
    settings::Settings,
    utils::fs,
};
use std::path::Path;

/// Writes the snapcraft project into an empty format directory.
pub async fn init_project(settings: &Settings, format_dir: &Path) -> Result<()> {
    let snap_dir = format_dir.join("snap");
    let local_dir = snap_dir.join("local");
    fs::create_dir_all(&local_dir).await?;

    let snapcraft_file = snap_dir.join("snapcraft.yaml");
    fs::write_lines(&snapcraft_file, &snapcraft_manifest(settings)).await?;
    log::debug!("Wrote {}", snapcraft_file.display());

    let name = settings.product_name();
    let desktop_file = local_dir.join(format!("{name}.desktop"));
    let entry = desktop_entry(
        name,
        settings.version_string(),
        &format!("/{name}"),
        "/icon.png",
    );
    fs::write_lines(&desktop_file, &entry).await?;
    log::debug!("Wrote {}", desktop_file.display());

    Ok(())
}

/// Lines of `snap/snapcraft.yaml`.
pub fn snapcraft_manifest(settings: &Settings) -> Vec<String> {
    let name = settings.product_name();
    let snap_name = strip_separators(name);
    let description = settings.description();

    let mut lines = vec![
        format!("name: {snap_name}"),
        "base: core18".to_string(),
        format!("version: '{}'", settings.version_string()),
        format!("summary: {description}"),
        "description: |".to_string(),
        format!("  {description}"),
        "confinement: devmode".to_string(),
        "grade: devel".to_string(),
        "apps:".to_string(),
        format!("  {snap_name}:"),
        format!("    command: {name}"),
        format!("    desktop: local/{name}.desktop"),
        "parts:".to_string(),
        "  desktop:".to_string(),
        "    plugin: dump".to_string(),
        "    source: snap".to_string(),
        "  assets:".to_string(),
        "    plugin: dump".to_string(),
        "    source: assets".to_string(),
        "  app:".to_string(),
        "    plugin: dump".to_string(),
        "    source: build".to_string(),
        "    stage-packages:".to_string(),
    ];
    lines.extend(
        LINUX_PACKAGING_DEPENDENCIES
            .iter()
            .map(|dependency| format!("      - {dependency}")),
    );
    lines
}

/// Copies assets, the Linux build and the snap configuration into `staging_dir`.
pub async fn stage_project(settings: &Settings, staging_dir: &Path) -> Result<()> {
    fs::copy_dir(&settings.assets_directory(), &staging_dir.join("assets")).await?;
    fs::copy_dir(
        &settings.build_output_directory(BUILD_PLATFORM),
        &staging_dir.join("build"),
    )
    .await?;
    let format_dir = settings.packaging_format_path(PackagingFormat::LinuxSnap)?;
    fs::copy_dir(&format_dir, staging_dir).await
}

/// Arguments passed to `snapcraft`.
pub fn packager_args(_settings: &Settings) -> Vec<String> {
    Vec::new()
}

/// File name snapcraft gives the built snap.
pub fn produced_file_name(settings: &Settings) -> String {
    format!(
        "{}_{}_{}.snap",
        strip_separators(settings.product_name()),
        settings.version_string(),
        settings.binary_arch()
    )
}

/// Stable artifact name, without the version so repeated builds land on the same path.
pub fn artifact_file_name(settings: &Settings) -> String {
    format!(
        "{}_{}.snap",
        strip_separators(settings.product_name()),
        settings.binary_arch()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{Arch, PackageSettings, SettingsBuilder};

    fn settings() -> Settings {
        SettingsBuilder::new()
            .build_root("/p/go")
            .package_settings(PackageSettings {
                name: "my-app".into(),
                version: "1.2.3".into(),
                description: "demo".into(),
                author: None,
            })
            .arch(Arch::AArch64)
            .build()
            .unwrap()
    }

    #[test]
    fn manifest_uses_stripped_name_and_quoted_version() {
        let lines = snapcraft_manifest(&settings());
        assert_eq!(lines[0], "name: myapp");
        assert_eq!(lines[2], "version: '1.2.3'");
        assert!(lines.contains(&"  myapp:".to_string()));
        assert!(lines.contains(&"    command: my-app".to_string()));
        assert!(lines.contains(&"    desktop: local/my-app.desktop".to_string()));
        assert!(lines.contains(&"confinement: devmode".to_string()));
    }

    #[test]
    fn manifest_ends_with_stage_packages() {
        let lines = snapcraft_manifest(&settings());
        assert_eq!(
            &lines[lines.len() - 5..],
            [
                "    stage-packages:",
                "      - libx11-6",
                "      - libxrandr2",
                "      - libxcursor1",
                "      - libxinerama1",
            ]
        );
    }

    #[test]
    fn artifact_name_drops_version() {
        let settings = settings();
        assert_eq!(produced_file_name(&settings), "myapp_1.2.3_arm64.snap");
        assert_eq!(artifact_file_name(&settings), "myapp_arm64.snap");
        assert!(packager_args(&settings).is_empty());
    }
}
