use tracing::{info, warn};

use crate::cli::ImportArgs;
use crate::codec;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::library;

pub async fn run(ctx: &AppContext, args: ImportArgs) -> AppResult<()> {
    let raw = tokio::fs::read_to_string(&args.file).await?;
    let bundle = match codec::import_bundle(&raw) {
        Ok(bundle) => bundle,
        Err(err) => {
            warn!(file = %args.file.display(), error = %err, "import rejected");
            return Err(err);
        }
    };

    let (profiles, added) =
        library::import_profiles(ctx.load_profiles(), bundle.into_profiles(), ctx.user_id());
    ctx.save_profiles(&profiles)?;
    info!(count = added.len(), "imported profiles");

    let mut lines = vec![format!("imported {} profile(s)", added.len())];
    lines.extend(
        added
            .iter()
            .map(|profile| format!("  \"{}\" ({})", profile.name, profile.id)),
    );
    ctx.output.emit_lines(&lines, &added)
}
