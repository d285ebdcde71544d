use std::fmt;

use serde::{Deserialize, Serialize};

use super::entry::new_id;

/// Browser preference of a profile.
///
/// Unknown names survive a load/save cycle untouched as `Other` and are
/// treated like `Default` when a launch command is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Browser {
    #[default]
    Default,
    Firefox,
    Chrome,
    Safari,
    Opera,
    Other(String),
}

impl Browser {
    pub const KNOWN: [Browser; 5] = [
        Browser::Default,
        Browser::Firefox,
        Browser::Chrome,
        Browser::Safari,
        Browser::Opera,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Browser::Default => "Default",
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
            Browser::Safari => "safari",
            Browser::Opera => "opera",
            Browser::Other(name) => name,
        }
    }

    /// Case-insensitive lookup restricted to the known browsers.
    pub fn parse_known(value: &str) -> Option<Browser> {
        let value = value.trim();
        Self::KNOWN
            .into_iter()
            .find(|browser| browser.as_str().eq_ignore_ascii_case(value))
    }
}

impl From<String> for Browser {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Default" => Browser::Default,
            "firefox" => Browser::Firefox,
            "chrome" => Browser::Chrome,
            "safari" => Browser::Safari,
            "opera" => Browser::Opera,
            _ => Browser::Other(value),
        }
    }
}

impl From<Browser> for String {
    fn from(value: Browser) -> Self {
        match value {
            Browser::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub apps: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub browser: Browser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            apps: Vec::new(),
            urls: Vec::new(),
            browser: Browser::Default,
            user_id: None,
        }
    }
}
