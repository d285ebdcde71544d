use serde::Serialize;
use tracing::info;

use crate::cli::ClearArgs;
use crate::commands::prompt;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct ClearResult {
    cleared: usize,
}

pub fn run(ctx: &AppContext, args: ClearArgs) -> AppResult<()> {
    let count = ctx.load_profiles().len();

    if !args.yes {
        if !prompt::interactive() {
            return Err(AppError::Validation(
                "refusing to clear profiles without --yes in a non-interactive session".to_string(),
            ));
        }
        if !prompt::confirm(&format!("Delete all {count} profiles?"))? {
            return ctx.output.emit("clear cancelled", &ClearResult { cleared: 0 });
        }
    }

    ctx.save_profiles(&[])?;
    info!(count, "cleared profiles");

    let text = format!("cleared {count} profiles");
    ctx.output.emit(&text, &ClearResult { cleared: count })
}
