//! Launcher script synthesis.
//!
//! Scripts replay what a native launcher would do: start every application
//! path of a profile, then open every URL with the profile's browser. Paths
//! and URLs are wrapped in double quotes and otherwise emitted verbatim, so
//! values that contain a double quote produce a broken script.
//!
//! Windows scripts open URLs with `start ""` rather than a bare `start`, so the
//! quoted URL is never taken as the window title.

mod linux;
mod mac;
mod windows;

use serde::Serialize;

use crate::platform::{self, Platform};
use crate::profile::{Browser, Profile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedScript {
    pub platform: Platform,
    pub content: String,
    pub extension: &'static str,
}

/// Generates a script for `platform`, or for the running system when `None`.
pub fn generate_script(profile: &Profile, platform: Option<Platform>) -> GeneratedScript {
    let platform = platform.unwrap_or_else(|| platform::detect_current().or_default());
    generate_for(profile, platform)
}

pub fn generate_for(profile: &Profile, platform: Platform) -> GeneratedScript {
    let content = match platform {
        Platform::Windows => windows::render(profile),
        Platform::Mac => mac::render(profile),
        Platform::Linux => linux::render(profile),
    };

    GeneratedScript {
        platform,
        content,
        extension: extension(platform),
    }
}

pub fn extension(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => ".bat",
        Platform::Mac => ".command",
        Platform::Linux => ".sh",
    }
}

/// Platform-specific application name of a named browser. `None` means the
/// system default opener should be used.
pub fn browser_application(platform: Platform, browser: &Browser) -> Option<&'static str> {
    let name = match (platform, browser) {
        (_, Browser::Default | Browser::Other(_)) => return None,
        (Platform::Windows, Browser::Chrome) => "chrome",
        (Platform::Windows, Browser::Firefox) => "firefox",
        (Platform::Windows, Browser::Opera) => "opera",
        (Platform::Windows, Browser::Safari) => "safari",
        (Platform::Mac, Browser::Chrome) => "Google Chrome",
        (Platform::Mac, Browser::Firefox) => "Firefox",
        (Platform::Mac, Browser::Opera) => "Opera",
        (Platform::Mac, Browser::Safari) => "Safari",
        (Platform::Linux, Browser::Chrome) => "google-chrome",
        (Platform::Linux, Browser::Firefox) => "firefox",
        (Platform::Linux, Browser::Opera) => "opera",
        (Platform::Linux, Browser::Safari) => "safari",
    };

    Some(name)
}

/// Command prefix that opens a URL with `browser` on `platform`.
pub fn url_command(platform: Platform, browser: &Browser) -> String {
    match (platform, browser_application(platform, browser)) {
        // `start` treats a leading quoted argument as the window title.
        (Platform::Windows, None) => "start \"\"".to_string(),
        (Platform::Windows, Some(app)) => format!("start {app}"),
        (Platform::Mac, None) => "open".to_string(),
        (Platform::Mac, Some(app)) if app.contains(' ') => format!("open -a \"{app}\""),
        (Platform::Mac, Some(app)) => format!("open -a {app}"),
        (Platform::Linux, None) => "xdg-open".to_string(),
        (Platform::Linux, Some(app)) => app.to_string(),
    }
}

struct ScriptWriter {
    buffer: String,
    line_ending: &'static str,
}

impl ScriptWriter {
    fn new(line_ending: &'static str) -> Self {
        Self {
            buffer: String::new(),
            line_ending,
        }
    }

    fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push_str(self.line_ending);
    }

    fn blank(&mut self) {
        self.buffer.push_str(self.line_ending);
    }

    fn finish(self) -> String {
        self.buffer
    }
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}
