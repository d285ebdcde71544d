use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Operating system family a launcher script is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Mac => "macOS",
            Platform::Linux => "Linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedPlatform {
    Windows,
    Mac,
    Linux,
    Unknown,
}

impl DetectedPlatform {
    pub fn platform(self) -> Option<Platform> {
        match self {
            DetectedPlatform::Windows => Some(Platform::Windows),
            DetectedPlatform::Mac => Some(Platform::Mac),
            DetectedPlatform::Linux => Some(Platform::Linux),
            DetectedPlatform::Unknown => None,
        }
    }

    /// Inconclusive detection resolves to Linux.
    pub fn or_default(self) -> Platform {
        self.platform().unwrap_or(Platform::Linux)
    }
}

/// Classifies a platform identifier by case-insensitive substring match.
/// `win` is checked before `mac`, which is checked before `linux`/`x11`.
pub fn detect_platform(identifier: &str) -> DetectedPlatform {
    let identifier = identifier.to_lowercase();

    if identifier.contains("win") {
        return DetectedPlatform::Windows;
    }
    if identifier.contains("mac") {
        return DetectedPlatform::Mac;
    }
    if identifier.contains("linux") || identifier.contains("x11") {
        return DetectedPlatform::Linux;
    }

    DetectedPlatform::Unknown
}

pub fn current_identifier() -> &'static str {
    std::env::consts::OS
}

pub fn detect_current() -> DetectedPlatform {
    detect_platform(current_identifier())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_identifiers() {
        assert_eq!(detect_platform("Win32"), DetectedPlatform::Windows);
        assert_eq!(detect_platform("windows"), DetectedPlatform::Windows);
        assert_eq!(detect_platform("MacIntel"), DetectedPlatform::Mac);
        assert_eq!(detect_platform("macos"), DetectedPlatform::Mac);
        assert_eq!(detect_platform("Linux x86_64"), DetectedPlatform::Linux);
        assert_eq!(detect_platform("X11"), DetectedPlatform::Linux);
    }

    #[test]
    fn unrecognized_identifier_is_unknown() {
        assert_eq!(detect_platform("freebsd"), DetectedPlatform::Unknown);
        assert_eq!(detect_platform(""), DetectedPlatform::Unknown);
    }

    #[test]
    fn unknown_falls_back_to_linux() {
        assert_eq!(DetectedPlatform::Unknown.or_default(), Platform::Linux);
        assert_eq!(DetectedPlatform::Mac.or_default(), Platform::Mac);
    }
}
