//! Portable JSON representation of profiles and the file names used when
//! profiles or their launcher scripts are written out.

pub mod export;
pub mod import;
pub mod naming;

pub use export::{export_bundle, export_profile};
pub use import::{import_bundle, import_profile};
pub use naming::{BULK_EXPORT_FILENAME, export_filename, script_filename, slugify};
