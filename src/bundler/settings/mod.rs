//! Configuration structures for packaging operations.
//!
//! Paths and host facts are passed explicitly through [`Settings`] instead of
//! living in process-wide state.

mod arch;
mod builder;
mod core;
mod package;

pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use package::PackageSettings;
