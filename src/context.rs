use std::path::PathBuf;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;
use crate::platform::Platform;
use crate::profile::Profile;
use crate::store::{FileProfileStore, ProfileStore};

#[derive(Debug)]
pub struct AppContext {
    pub user: Option<String>,
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub store: FileProfileStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        user: Option<String>,
        data_dir: Option<PathBuf>,
        json: bool,
        verbose: u8,
    ) -> AppResult<Self> {
        let user = config::resolve_user(user.as_deref());
        let paths = AppPaths::discover(data_dir.as_deref())?;
        let settings = config::load_settings(&paths)?;
        let store = FileProfileStore::new(paths.clone());
        let output = Output::new(json);

        Ok(Self {
            user,
            verbose,
            paths,
            settings,
            store,
            output,
        })
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn load_profiles(&self) -> Vec<Profile> {
        self.store.load(self.user_id())
    }

    pub fn save_profiles(&self, profiles: &[Profile]) -> AppResult<()> {
        self.store.save(profiles, self.user_id())
    }

    /// Explicit request first, then the configured default. `None` leaves the
    /// choice to platform detection.
    pub fn script_platform(&self, requested: Option<Platform>) -> Option<Platform> {
        requested.or(self.settings.default_platform)
    }

    pub fn output_dir(&self, requested: Option<PathBuf>) -> PathBuf {
        requested.unwrap_or_else(|| self.settings.output_dir())
    }
}
