use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        user,
        data_dir,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(user, data_dir, json, verbose)?;

    match command {
        Command::Create(args) => commands::create::run(&ctx, args),
        Command::List => commands::list::run(&ctx),
        Command::Show(args) => commands::show::run(&ctx, args),
        Command::Edit(args) => commands::edit::run(&ctx, args),
        Command::Delete(args) => commands::delete::run(&ctx, args),
        Command::Clear(args) => commands::clear::run(&ctx, args),
        Command::Launch(args) => commands::launch::run(&ctx, args),
        Command::Script(args) => commands::script::run(&ctx, args),
        Command::Export(args) => commands::export::run(&ctx, args),
        Command::Import(args) => commands::import::run(&ctx, args).await,
        Command::Platform => commands::platform::run(&ctx),
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
