//! Platform and architecture naming
//!
//! Maps host OS/architecture names to the canonical fragments used in the
//! Zig distribution's file-naming scheme. Both lookups are pure functions
//! over fixed tables; unknown entries fail with
//! [`ToolchainError::UnsupportedPlatform`].

use std::fmt;

use crate::error::ToolchainError;

/// Canonical naming fragments for a host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformAlias {
    /// Canonical OS name used in archive names (e.g. "linux", "macos")
    pub platform: &'static str,
    /// Suffix appended to executable names ("" or ".exe")
    pub executable_ext: &'static str,
    /// Archive suffix for the platform (".tar.xz" or ".zip")
    pub compress_ext: &'static str,
}

/// Canonical naming fragment for a host CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectureAlias {
    /// Architecture name used in the distribution's naming scheme
    pub build_alias: &'static str,
}

/// Host OS and machine architecture, injected into the resolver
///
/// Carried as plain strings so tests can supply arbitrary (OS, architecture)
/// pairs without running on that platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    /// OS name as reported by `std::env::consts::OS`
    pub os: String,
    /// Machine architecture as reported by `std::env::consts::ARCH`
    pub arch: String,
}

impl Host {
    /// Create a host descriptor from explicit names
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Detect the current host platform
    pub fn detect() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

/// Look up the naming fragments for an OS name
pub fn alias_for_platform(os: &str) -> Result<PlatformAlias, ToolchainError> {
    match os {
        "linux" => Ok(PlatformAlias {
            platform: "linux",
            executable_ext: "",
            compress_ext: ".tar.xz",
        }),
        "macos" => Ok(PlatformAlias {
            platform: "macos",
            executable_ext: "",
            compress_ext: ".tar.xz",
        }),
        "windows" => Ok(PlatformAlias {
            platform: "windows",
            executable_ext: ".exe",
            compress_ext: ".zip",
        }),
        other => Err(ToolchainError::UnsupportedPlatform {
            name: other.to_string(),
        }),
    }
}

/// Look up the naming fragment for a machine architecture
pub fn alias_for_architecture(machine: &str) -> Result<ArchitectureAlias, ToolchainError> {
    match machine {
        "x86_64" => Ok(ArchitectureAlias {
            build_alias: "x86_64",
        }),
        "aarch64" => Ok(ArchitectureAlias {
            build_alias: "aarch64",
        }),
        "x86" => Ok(ArchitectureAlias { build_alias: "x86" }),
        other => Err(ToolchainError::UnsupportedPlatform {
            name: other.to_string(),
        }),
    }
}
