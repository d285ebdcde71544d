use tracing::info;

use crate::cli::EditArgs;
use crate::commands::show::describe;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::library;
use crate::profile::{self, Profile};

pub fn run(ctx: &AppContext, args: EditArgs) -> AppResult<()> {
    let profiles = ctx.load_profiles();
    let current = library::find_profile(&profiles, &args.profile)?.clone();
    let updated = apply(current, args)?;

    let profiles = library::replace_profile(profiles, updated.clone())?;
    ctx.save_profiles(&profiles)?;
    info!(id = %updated.id, "updated profile");

    ctx.output.emit_lines(&describe(&updated), &updated)
}

/// Builds the replacement profile. Removals use the 1-based positions shown by
/// `show` and are applied before additions.
fn apply(mut profile: Profile, args: EditArgs) -> AppResult<Profile> {
    if let Some(name) = args.name.as_deref() {
        profile.name = profile::validate_name(name)?;
    }

    remove_positions(&mut profile.apps, &args.remove_app, "--remove-app")?;
    remove_positions(&mut profile.urls, &args.remove_url, "--remove-url")?;

    for app in &args.add_app {
        profile.apps.push(profile::normalize_app(app)?);
    }
    for url in &args.add_url {
        profile.urls.push(profile::normalize_url(url)?);
    }

    if let Some(browser) = args.browser {
        profile.browser = browser;
    }

    Ok(profile)
}

fn remove_positions(items: &mut Vec<String>, positions: &[usize], flag: &str) -> AppResult<()> {
    let mut positions = positions.to_vec();
    positions.sort_unstable();
    positions.dedup();

    if let Some(&invalid) = positions
        .iter()
        .find(|&&position| position == 0 || position > items.len())
    {
        return Err(AppError::Validation(format!(
            "{flag} {invalid} is out of range (1..={})",
            items.len()
        )));
    }

    for position in positions.into_iter().rev() {
        items.remove(position - 1);
    }
    Ok(())
}
