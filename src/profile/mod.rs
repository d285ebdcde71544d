pub mod bundle;
pub mod entry;
pub mod model;

pub use bundle::ProfileBundle;
pub use entry::{build_profile, new_id, normalize_app, normalize_url, validate_name};
pub use model::{Browser, Profile};
