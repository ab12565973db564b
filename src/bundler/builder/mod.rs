//! Packaging orchestration and coordination.
//!
//! This module provides the [`Packager`] orchestrator that drives a format's
//! lifecycle:
//!
//! 1. `init` scaffolds `<build>/packaging/<format>` once
//! 2. `build` stages the build output, assets and configuration into a fresh
//!    temporary directory
//! 3. runs the native packager (`snapcraft`, `dpkg-deb`) there
//! 4. moves the artifact to `<build>/build/outputs/<format>` and removes the
//!    staging directory
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum of produced artifacts
//! - [`orchestrator`] - [`Packager`] and [`PackagedArtifact`]
//! - [`tool_detection`] - packager executable lookup

mod checksum;
mod orchestrator;
mod tool_detection;

pub use orchestrator::{PackagedArtifact, Packager};
pub use tool_detection::locate_packager;
