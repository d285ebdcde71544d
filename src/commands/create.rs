use tracing::info;

use crate::cli::CreateArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::library;
use crate::profile::{self, Profile};

pub fn run(ctx: &AppContext, args: CreateArgs) -> AppResult<()> {
    let profile = profile::build_profile(
        &args.name,
        &args.apps,
        &args.urls,
        args.browser.unwrap_or_default(),
    )?;

    let profiles = library::add_profile(ctx.load_profiles(), profile.clone(), ctx.user_id());
    ctx.save_profiles(&profiles)?;

    let created = Profile {
        user_id: ctx.user.clone(),
        ..profile
    };
    info!(id = %created.id, name = %created.name, "created profile");

    let text = format!("created profile \"{}\" ({})", created.name, created.id);
    ctx.output.emit(&text, &created)
}
