use crate::platform::Platform;
use crate::profile::Profile;
use crate::script;

pub const BULK_EXPORT_FILENAME: &str = "all-profiles-export.json";

/// Lowercases `name` and replaces every run of whitespace with one hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

pub fn export_filename(profile: &Profile) -> String {
    format!("{}-profile.json", slugify(&profile.name))
}

pub fn script_filename(profile: &Profile, platform: Platform) -> String {
    format!(
        "{}-launcher{}",
        slugify(&profile.name),
        script::extension(platform)
    )
}
