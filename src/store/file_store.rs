use std::fs;

use tracing::{debug, warn};

use crate::config::AppPaths;
use crate::error::AppResult;
use crate::profile::Profile;

use super::{ProfileStore, decode_profiles, encode_profiles, storage_key};

#[derive(Debug, Clone)]
pub struct FileProfileStore {
    paths: AppPaths,
}

impl FileProfileStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }
}

impl ProfileStore for FileProfileStore {
    fn load(&self, user_id: Option<&str>) -> Vec<Profile> {
        let key = storage_key(user_id);
        let path = self.paths.profiles_file(&key);
        if !path.exists() {
            return Vec::new();
        }

        debug!(path = %path.display(), "loading profiles");
        match fs::read_to_string(&path) {
            Ok(raw) => decode_profiles(&key, &raw),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unable to read stored profiles");
                Vec::new()
            }
        }
    }

    fn save(&self, profiles: &[Profile], user_id: Option<&str>) -> AppResult<()> {
        let key = storage_key(user_id);
        let path = self.paths.profiles_file(&key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = encode_profiles(profiles)?;
        fs::write(&path, payload)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        debug!(path = %path.display(), count = profiles.len(), "saved profiles");
        Ok(())
    }
}
