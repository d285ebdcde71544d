pub mod file_store;
pub mod memory_store;

pub use file_store::FileProfileStore;
pub use memory_store::MemoryProfileStore;

use tracing::warn;

use crate::error::AppResult;
use crate::profile::Profile;

const DEFAULT_KEY: &str = "profiles";

/// Storage key of a user partition: `profiles` or `profiles_<user_id>`. An
/// empty user id selects the shared partition.
pub fn storage_key(user_id: Option<&str>) -> String {
    match user_id {
        Some(user_id) if !user_id.is_empty() => format!("{DEFAULT_KEY}_{user_id}"),
        _ => DEFAULT_KEY.to_string(),
    }
}

/// Key/value persistence of profile lists. Reads never fail: a missing or
/// undecodable value yields an empty list. Writes replace the whole value.
pub trait ProfileStore {
    fn load(&self, user_id: Option<&str>) -> Vec<Profile>;
    fn save(&self, profiles: &[Profile], user_id: Option<&str>) -> AppResult<()>;
}

pub(crate) fn decode_profiles(key: &str, raw: &str) -> Vec<Profile> {
    match serde_json::from_str(raw) {
        Ok(profiles) => profiles,
        Err(err) => {
            warn!(key, error = %err, "stored profiles are unreadable; starting from an empty list");
            Vec::new()
        }
    }
}

pub(crate) fn encode_profiles(profiles: &[Profile]) -> AppResult<String> {
    Ok(serde_json::to_string(profiles)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_partitioned_keys() {
        assert_eq!(storage_key(None), "profiles");
        assert_eq!(storage_key(Some("u1")), "profiles_u1");
        assert_eq!(storage_key(Some("")), "profiles");
    }

    #[test]
    fn undecodable_value_yields_empty_list() {
        assert!(decode_profiles("profiles", "{not json").is_empty());
        assert!(decode_profiles("profiles", r#"{"id":"1"}"#).is_empty());
    }
}
