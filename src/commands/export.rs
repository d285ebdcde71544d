use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::cli::ExportArgs;
use crate::codec;
use crate::commands::write_output;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::library;
use crate::profile::ProfileBundle;

#[derive(Debug, Serialize)]
struct ExportResult {
    profiles: usize,
    path: PathBuf,
}

pub fn run(ctx: &AppContext, args: ExportArgs) -> AppResult<()> {
    let profiles = ctx.load_profiles();
    let (bundle, filename) = match args.profile.as_deref() {
        Some(reference) => {
            let profile = library::find_profile(&profiles, reference)?.clone();
            let filename = codec::export_filename(&profile);
            (ProfileBundle::Single(profile), filename)
        }
        None => {
            if profiles.is_empty() {
                return Err(AppError::Validation(
                    "no profiles to export; create some profiles first".to_string(),
                ));
            }
            (
                ProfileBundle::Bulk(profiles),
                codec::BULK_EXPORT_FILENAME.to_string(),
            )
        }
    };

    let content = codec::export_bundle(&bundle)?;
    if args.stdout {
        println!("{content}");
        return Ok(());
    }

    let path = write_output(&ctx.output_dir(args.out), &filename, &content, false)?;
    info!(path = %path.display(), count = bundle.len(), "exported profiles");

    let text = format!("exported {} profile(s) to {}", bundle.len(), path.display());
    ctx.output.emit(
        &text,
        &ExportResult {
            profiles: bundle.len(),
            path,
        },
    )
}
