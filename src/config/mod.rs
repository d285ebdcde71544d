pub mod paths;
pub mod settings;
pub mod user;

pub use paths::AppPaths;
pub use settings::Settings;
pub use user::resolve_user;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(paths.settings_file())
}

pub fn save_settings(paths: &AppPaths, settings: &Settings) -> AppResult<()> {
    settings::save(paths.settings_file(), settings)
}
