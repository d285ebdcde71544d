use std::fs;
use std::path::{Path, PathBuf};

use url::form_urlencoded;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "launchkit";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
    profiles_dir: PathBuf,
}

impl AppPaths {
    /// Resolves the platform config and data directories, or keeps everything
    /// under `data_dir` when one is given.
    pub fn discover(data_dir: Option<&Path>) -> AppResult<Self> {
        if let Some(root) = data_dir {
            return Self::at(root);
        }

        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let data_root = dirs::data_dir()
            .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;

        Self::create(config_root.join(APP_DIR), data_root.join(APP_DIR))
    }

    pub fn at(root: &Path) -> AppResult<Self> {
        Self::create(root.to_path_buf(), root.to_path_buf())
    }

    fn create(config_dir: PathBuf, data_dir: PathBuf) -> AppResult<Self> {
        let profiles_dir = data_dir.join("profiles");

        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&profiles_dir)?;

        Ok(Self {
            config_dir,
            data_dir,
            profiles_dir,
        })
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// File backing one storage key. The key is percent-encoded so user ids
    /// cannot escape the profiles directory.
    pub fn profiles_file(&self, key: &str) -> PathBuf {
        let encoded: String = form_urlencoded::byte_serialize(key.as_bytes()).collect();
        self.profiles_dir.join(format!("{encoded}.json"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
