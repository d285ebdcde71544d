use serde::Serialize;

use crate::error::AppResult;
use crate::profile::bundle::{BULK_EXPORT_ID, BULK_EXPORT_NAME};
use crate::profile::{Browser, Profile, ProfileBundle};

/// Bulk file layout: an empty profile carrying the real ones in `profiles`.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    id: &'static str,
    name: &'static str,
    apps: [&'static str; 0],
    urls: [&'static str; 0],
    browser: Browser,
    profiles: &'a [Profile],
}

/// Pretty-printed JSON with keys in `id, name, apps, urls, browser, userId`
/// order.
pub fn export_profile(profile: &Profile) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

pub fn export_bundle(bundle: &ProfileBundle) -> AppResult<String> {
    match bundle {
        ProfileBundle::Single(profile) => export_profile(profile),
        ProfileBundle::Bulk(profiles) => {
            let envelope = Envelope {
                id: BULK_EXPORT_ID,
                name: BULK_EXPORT_NAME,
                apps: [],
                urls: [],
                browser: Browser::Default,
                profiles,
            };
            Ok(serde_json::to_string_pretty(&envelope)?)
        }
    }
}
