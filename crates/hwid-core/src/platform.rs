//! # Host Platform Detection
//!
//! Maps `std::env::consts::OS` onto the platforms this crate knows how to
//! collect from. Detection happens once, when a collector is selected.

use serde::Serialize;

/// A host operating system family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    FreeBsd,
    OpenBsd,
    NetBsd,
    Android,
    Illumos,
    /// Anything else, carrying the raw `std::env::consts::OS` value.
    Other(String),
}

impl Platform {
    /// Platform of the running process.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Parse an OS name in `std::env::consts::OS` form.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "freebsd" => Self::FreeBsd,
            "openbsd" => Self::OpenBsd,
            "netbsd" => Self::NetBsd,
            "android" => Self::Android,
            "illumos" => Self::Illumos,
            other => Self::Other(other.to_string()),
        }
    }

    /// OS name in `std::env::consts::OS` form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::FreeBsd => "freebsd",
            Self::OpenBsd => "openbsd",
            Self::NetBsd => "netbsd",
            Self::Android => "android",
            Self::Illumos => "illumos",
            Self::Other(os) => os,
        }
    }

    /// True for platforms whose interface list exposes link-layer addresses.
    ///
    /// Matches the targets `mac_address` enumerates on.
    pub fn has_interface_enumeration(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
