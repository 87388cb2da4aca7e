//! Host platform detection.
//!
//! The capture input driver ffmpeg needs depends on the operating system the
//! recorder runs on. This module maps the host OS onto the three supported
//! variants.

use std::env;
use std::fmt;

/// Operating system family that decides which ffmpeg capture driver to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// GDI screen grabbing (`gdigrab`).
    Windows,
    /// AVFoundation screen capture (`avfoundation`).
    MacOs,
    /// X11 screen grabbing (`x11grab`). Also used for any other Unix.
    Linux,
}

impl Platform {
    /// Detects the platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os_name(env::consts::OS)
    }

    /// Maps an OS name as reported by `std::env::consts::OS`.
    ///
    /// Anything that is not Windows or macOS falls back to `Linux`.
    #[must_use]
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            _ => Self::Linux,
        }
    }

    /// Returns the ffmpeg input format (`-f`) for screen capture.
    #[must_use]
    pub const fn input_driver(self) -> &'static str {
        match self {
            Self::Windows => "gdigrab",
            Self::MacOs => "avfoundation",
            Self::Linux => "x11grab",
        }
    }

    /// Returns the ffmpeg input source (`-i`) naming the screen to capture.
    ///
    /// On macOS `1:none` selects the first screen device with no audio.
    #[must_use]
    pub const fn input_source(self) -> &'static str {
        match self {
            Self::Windows => "desktop",
            Self::MacOs => "1:none",
            Self::Linux => ":0.0",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_name() {
        assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("linux"), Platform::Linux);
        assert_eq!(Platform::from_os_name("freebsd"), Platform::Linux);
    }

    #[test]
    fn test_current_matches_host() {
        let expected = if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        };
        assert_eq!(Platform::current(), expected);
    }
}
