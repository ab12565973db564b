//! Snap and deb packaging for hover desktop applications.
//!
//! The packaging core. It scaffolds per-format configuration trees, stages
//! build outputs into temporary directories and drives the native packagers.
//!
//! # Example
//!
//! ```no_run
//! use hover_packaging::bundler::{PackageSettings, Packager, PackagingFormat, SettingsBuilder};
//!
//! # async fn example() -> hover_packaging::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .build_root("go")
//!     .package_settings(PackageSettings {
//!         name: "myapp".into(),
//!         version: "1.2.3".into(),
//!         description: "demo".into(),
//!         author: None,
//!     })
//!     .build()?;
//!
//! let packager = Packager::new(settings);
//! packager.init(PackagingFormat::LinuxSnap).await?;
//! let artifact = packager.build(PackagingFormat::LinuxSnap).await?;
//! println!("SHA256: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::{PackagedArtifact, Packager};
pub use error::{Error, Result};
pub use platform::{PackagingFormat, strip_separators};
pub use settings::{Arch, PackageSettings, Settings, SettingsBuilder};
