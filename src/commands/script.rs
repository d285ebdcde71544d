use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::cli::ScriptArgs;
use crate::codec;
use crate::commands::write_output;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::library;
use crate::platform::Platform;
use crate::profile::Profile;
use crate::script;

#[derive(Debug, Serialize)]
struct WrittenScript {
    profile: String,
    platform: Platform,
    path: PathBuf,
}

pub fn run(ctx: &AppContext, args: ScriptArgs) -> AppResult<()> {
    let profiles = ctx.load_profiles();
    let targets = select_targets(&profiles, args.profile.as_deref())?;
    let platform = ctx.script_platform(args.platform);

    if args.stdout {
        for profile in &targets {
            print!("{}", script::generate_script(profile, platform).content);
        }
        return Ok(());
    }

    let dir = ctx.output_dir(args.out);
    let mut written = Vec::with_capacity(targets.len());
    for profile in targets {
        let generated = script::generate_script(profile, platform);
        let filename = codec::script_filename(profile, generated.platform);
        let executable = generated.platform != Platform::Windows;
        let path = write_output(&dir, &filename, &generated.content, executable)?;

        written.push(WrittenScript {
            profile: profile.name.clone(),
            platform: generated.platform,
            path,
        });
    }

    info!(count = written.len(), "wrote launcher scripts");
    let lines: Vec<String> = written
        .iter()
        .map(|entry| {
            format!(
                "{} launcher for \"{}\": {}",
                entry.platform.display_name(),
                entry.profile,
                entry.path.display()
            )
        })
        .collect();
    ctx.output.emit_lines(&lines, &written)
}

fn select_targets<'a>(profiles: &'a [Profile], reference: Option<&str>) -> AppResult<Vec<&'a Profile>> {
    match reference {
        Some(reference) => Ok(vec![library::find_profile(profiles, reference)?]),
        None if profiles.is_empty() => Err(AppError::Validation(
            "no profiles to export; create some profiles first".to_string(),
        )),
        None => Ok(profiles.iter().collect()),
    }
}
