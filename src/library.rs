//! Operations on a loaded profile collection. Each takes the current list and
//! returns the new one; persisting it is left to the caller.

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::profile::{Profile, new_id};

pub const IMPORT_SUFFIX: &str = " (imported)";

pub fn add_profile(
    mut profiles: Vec<Profile>,
    mut profile: Profile,
    user_id: Option<&str>,
) -> Vec<Profile> {
    profile.user_id = user_id.map(str::to_string);
    profiles.push(profile);
    profiles
}

/// Swaps in `updated` at the position of the stored profile with the same id.
pub fn replace_profile(mut profiles: Vec<Profile>, updated: Profile) -> AppResult<Vec<Profile>> {
    let slot = profiles
        .iter_mut()
        .find(|profile| profile.id == updated.id)
        .ok_or_else(|| AppError::NotFound(updated.id.clone()))?;
    *slot = updated;
    Ok(profiles)
}

pub fn remove_profile(
    mut profiles: Vec<Profile>,
    id: &str,
) -> AppResult<(Vec<Profile>, Profile)> {
    let index = profiles
        .iter()
        .position(|profile| profile.id == id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    let removed = profiles.remove(index);
    Ok((profiles, removed))
}

/// Resolves a profile by exact id, then by exact name (first match wins).
pub fn find_profile<'a>(profiles: &'a [Profile], reference: &str) -> AppResult<&'a Profile> {
    profiles
        .iter()
        .find(|profile| profile.id == reference)
        .or_else(|| profiles.iter().find(|profile| profile.name == reference))
        .ok_or_else(|| AppError::NotFound(reference.to_string()))
}

/// Adopts an imported profile into `existing`: it joins the current user's
/// partition, a clashing name gets [`IMPORT_SUFFIX`] appended, and a clashing
/// id is regenerated. Nothing already stored is touched.
pub fn prepare_import(existing: &[Profile], mut imported: Profile, user_id: Option<&str>) -> Profile {
    imported.user_id = user_id.map(str::to_string);

    if existing.iter().any(|profile| profile.name == imported.name) {
        imported.name.push_str(IMPORT_SUFFIX);
    }

    if existing.iter().any(|profile| profile.id == imported.id) {
        let id = new_id();
        debug!(old = %imported.id, new = %id, "imported profile id already in use");
        imported.id = id;
    }

    imported
}

/// Appends every imported profile, checking each against the stored ones and
/// those imported before it. Returns the new collection and the added profiles.
pub fn import_profiles(
    mut profiles: Vec<Profile>,
    imported: Vec<Profile>,
    user_id: Option<&str>,
) -> (Vec<Profile>, Vec<Profile>) {
    let mut added = Vec::with_capacity(imported.len());
    for profile in imported {
        let profile = prepare_import(&profiles, profile, user_id);
        added.push(profile.clone());
        profiles.push(profile);
    }

    (profiles, added)
}
