use tracing::info;

use crate::cli::ProfileArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::library;

pub fn run(ctx: &AppContext, args: ProfileArgs) -> AppResult<()> {
    let profiles = ctx.load_profiles();
    let id = library::find_profile(&profiles, &args.profile)?.id.clone();
    let (profiles, removed) = library::remove_profile(profiles, &id)?;
    ctx.save_profiles(&profiles)?;

    info!(id = %removed.id, "deleted profile");
    let text = format!("deleted profile \"{}\"", removed.name);
    ctx.output.emit(&text, &removed)
}
