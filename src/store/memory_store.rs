use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::AppResult;
use crate::profile::Profile;

use super::{ProfileStore, decode_profiles, encode_profiles, storage_key};

/// In-process store holding the serialized value of each key.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        self.values.borrow_mut().insert(key.into(), raw.into());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self, user_id: Option<&str>) -> Vec<Profile> {
        let key = storage_key(user_id);
        match self.values.borrow().get(&key) {
            Some(raw) => decode_profiles(&key, raw),
            None => Vec::new(),
        }
    }

    fn save(&self, profiles: &[Profile], user_id: Option<&str>) -> AppResult<()> {
        let payload = encode_profiles(profiles)?;
        self.values
            .borrow_mut()
            .insert(storage_key(user_id), payload);
        Ok(())
    }
}
