//! Exit-code and output contract of the `hover` binary.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::Project;

fn hover(project: &Project) -> Command {
    let mut cmd = Command::cargo_bin("hover").unwrap();
    cmd.env_remove("HOVER_PROJECT_DIR")
        .env_remove("HOVER_BUILD_DIR")
        .env_remove("RUST_LOG")
        .arg("--project-dir")
        .arg(project.path());
    cmd
}

fn write_pubspec(project: &Project, author: &str) {
    std::fs::write(
        project.path().join("pubspec.yaml"),
        format!("name: myapp\nversion: 1.2.3\ndescription: demo\nauthor: {author}\n"),
    )
    .unwrap();
}

#[test]
fn missing_pubspec_fails_with_prefixed_diagnostic() {
    let project = Project::new();

    hover(&project)
        .args(["init-packaging", "linux-deb"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("hover: Failed to read"));
}

#[test]
fn unknown_format_is_rejected() {
    let project = Project::new();
    write_pubspec(&project, "jane");

    hover(&project)
        .args(["build", "darwin-dmg"])
        .assert()
        .failure();
}

#[cfg(target_os = "linux")]
#[test]
fn build_before_init_points_at_init_command() {
    let project = Project::new();
    write_pubspec(&project, "jane");

    hover(&project)
        .args(["build", "linux-snap"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "hover: linux-snap is not initialized for packaging. Please run `hover init-packaging linux-snap` first.",
        ));
}

#[cfg(target_os = "linux")]
#[test]
fn init_packaging_creates_tree_and_prints_next_step() {
    let project = Project::new();
    write_pubspec(&project, "jane");

    hover(&project)
        .args(["init-packaging", "linux-deb"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "hover: go/packaging/linux-deb has been created.",
        ))
        .stdout(predicate::str::contains(
            "hover: You now can package the linux using `hover build linux-deb`",
        ));

    let control =
        std::fs::read_to_string(project.format_dir("linux-deb").join("DEBIAN/control")).unwrap();
    assert!(control.contains("Package: myapp\n"));
    assert!(control.contains("Version: 1.2.3\n"));
    assert!(control.contains("Maintainer: @jane\n"));

    hover(&project)
        .args(["init-packaging", "linux-deb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[cfg(target_os = "linux")]
#[test]
fn blank_author_warns_about_system_user_fallback() {
    let project = Project::new();
    write_pubspec(&project, "");

    hover(&project)
        .args(["init-packaging", "linux-deb"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "hover: Missing author field in pubspec.yaml",
        ))
        .stderr(predicate::str::contains(
            "hover: Using this username from system instead:",
        ));
}

#[cfg(not(target_os = "linux"))]
#[test]
fn linux_formats_refuse_other_hosts() {
    let project = Project::new();
    write_pubspec(&project, "jane");

    hover(&project)
        .args(["init-packaging", "linux-snap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("linux-snap only works on linux"));
}
