pub mod app;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod launch;
pub mod library;
pub mod logging;
pub mod output;
pub mod platform;
pub mod profile;
pub mod script;
pub mod store;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
