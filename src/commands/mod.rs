pub mod clear;
pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod launch;
pub mod list;
pub mod platform;
pub mod prompt;
pub mod script;
pub mod show;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AppResult;

/// Writes a generated file into `dir`. Path separators in `filename` are
/// replaced so the file always lands directly inside `dir`.
#[cfg_attr(not(unix), allow(unused_variables))]
pub(crate) fn write_output(
    dir: &Path,
    filename: &str,
    content: &str,
    executable: bool,
) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename.replace(['/', '\\'], "-"));
    fs::write(&path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if executable {
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms)?;
        }
    }

    debug!(path = %path.display(), "wrote file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_files_inside_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_output(dir.path(), "a/b-profile.json", "{}", false).expect("write");

        assert_eq!(path, dir.path().join("a-b-profile.json"));
        assert_eq!(fs::read_to_string(path).expect("read"), "{}");
    }

    #[cfg(unix)]
    #[test]
    fn marks_scripts_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_output(dir.path(), "x.sh", "#!/bin/bash\n", true).expect("write");
        let mode = fs::metadata(path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
