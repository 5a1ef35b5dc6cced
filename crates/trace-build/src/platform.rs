//! Host platform classification.
//!
//! The dispatcher only cares whether the host is Windows or not. macOS,
//! Linux and every other OS share the build-from-source path.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformClass {
    /// Windows: the UI cannot be built locally, use the prebuilt bundle.
    WindowsLike,
    /// macOS, Linux and friends: build from source.
    UnixLike,
}

impl PlatformClass {
    /// Classify the OS this binary is running on.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Classify an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        if os.eq_ignore_ascii_case("windows") {
            Self::WindowsLike
        } else {
            Self::UnixLike
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WindowsLike => "windows-like",
            Self::UnixLike => "unix-like",
        }
    }
}

impl fmt::Display for PlatformClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host OS name shown in the banner, spelled the way Node's
/// `process.platform` does (`win32`, `darwin`, `linux`, ...).
pub fn os_name() -> &'static str {
    node_platform(std::env::consts::OS)
}

/// Map a `std::env::consts::OS` value to its `process.platform` spelling.
pub fn node_platform(os: &str) -> &str {
    match os {
        "windows" => "win32",
        "macos" | "ios" => "darwin",
        "solaris" | "illumos" => "sunos",
        other => other,
    }
}
