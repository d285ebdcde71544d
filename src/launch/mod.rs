//! Best-effort launching of a profile from the command line.
//!
//! Only URLs are opened here, and only the first one: opening a batch of
//! windows at once is routinely blocked or lost, and application paths are
//! honored by generated launcher scripts instead. Every outcome, including a
//! failing opener, is reported through [`LaunchResult`].

pub mod opener;

pub use opener::{DryRunOpener, SystemOpener, UrlOpener};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::profile::Profile;

pub const APPS_UNAVAILABLE: &str = "Application launching is only available through a desktop launcher script. Run `launchkit script` to create one.";
pub const NOTHING_TO_LAUNCH: &str = "Nothing to launch: the profile has no URLs or applications.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl LaunchResult {
    fn succeeded(advisory: Option<String>) -> Self {
        Self {
            success: true,
            advisory,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            advisory: Some(message),
        }
    }
}

pub fn launch_profile(profile: &Profile, opener: &dyn UrlOpener) -> LaunchResult {
    let Some(first) = profile.urls.first() else {
        let advisory = if profile.apps.is_empty() {
            NOTHING_TO_LAUNCH
        } else {
            APPS_UNAVAILABLE
        };
        return LaunchResult::succeeded(Some(advisory.to_string()));
    };

    if let Err(err) = opener.open_url(first, &profile.browser) {
        warn!(profile = %profile.name, url = %first, error = %err, "launch failed");
        return LaunchResult::failed(failure_message(err));
    }

    info!(profile = %profile.name, url = %first, "opened first URL");
    let skipped = profile.urls.len() - 1;
    let advisory = (skipped > 0).then(|| {
        format!(
            "Only the first URL was opened automatically; {skipped} more skipped. Use a launcher script to open them all."
        )
    });

    LaunchResult::succeeded(advisory)
}

fn failure_message(error: AppError) -> String {
    match error {
        AppError::Launch(message) => message,
        other => other.to_string(),
    }
}
