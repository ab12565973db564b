//! CPU architecture types and utilities.

use std::fmt;

/// CPU architecture of the packaged binaries.
///
/// Detected from the host by default. The name used inside package file
/// names and the Debian control file comes from [`Arch::package_name`].
///
/// # Examples
///
/// ```
/// use hover_packaging::bundler::Arch;
///
/// assert_eq!(Arch::from_rust_arch("x86_64").package_name(), "amd64");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// AArch64 / ARM64 (64-bit)
    AArch64,
    /// ARM with hard-float (32-bit)
    Armhf,
    /// ARM with soft-float (32-bit)
    Armel,
    /// RISC-V (64-bit)
    Riscv64,
    /// Any other architecture, named as Rust names it
    Other(String),
}

impl Arch {
    /// Architecture of the running host.
    pub fn host() -> Self {
        Self::from_rust_arch(std::env::consts::ARCH)
    }

    /// Maps a Rust architecture name (`std::env::consts::ARCH`) or target triple prefix.
    pub fn from_rust_arch(arch: &str) -> Self {
        if arch.starts_with("x86_64") {
            Arch::X86_64
        } else if arch == "x86" || (arch.starts_with('i') && arch.ends_with("86")) {
            Arch::X86
        } else if arch.starts_with("aarch64") {
            Arch::AArch64
        } else if arch.starts_with("arm") && arch.ends_with("el") {
            Arch::Armel
        } else if arch.starts_with("arm") {
            Arch::Armhf
        } else if arch.starts_with("riscv64") {
            Arch::Riscv64
        } else {
            Arch::Other(arch.to_string())
        }
    }

    /// Name used by snapcraft and dpkg for this architecture.
    pub fn package_name(&self) -> &str {
        match self {
            Arch::X86_64 => "amd64",
            Arch::X86 => "i386",
            Arch::AArch64 => "arm64",
            Arch::Armhf => "armhf",
            Arch::Armel => "armel",
            Arch::Riscv64 => "riscv64",
            Arch::Other(name) => name,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_name())
    }
}
