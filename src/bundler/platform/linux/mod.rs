//! Linux packaging recipes.

pub mod debian;
pub mod desktop;
pub mod snap;

/// Native libraries the packaged application links against.
pub const LINUX_PACKAGING_DEPENDENCIES: [&str; 4] =
    ["libx11-6", "libxrandr2", "libxcursor1", "libxinerama1"];

/// Platform name of the compiled Linux build output.
pub const BUILD_PLATFORM: &str = "linux";
