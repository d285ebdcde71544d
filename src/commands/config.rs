use serde::Serialize;

use crate::cli::{ConfigCommand, ConfigSetArgs};
use crate::config::{self, Settings};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct ConfigView<'a> {
    settings_file: String,
    data_dir: String,
    user: Option<&'a str>,
    settings: &'a Settings,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => show(ctx, &ctx.settings),
        ConfigCommand::Set(args) => {
            let settings = apply(ctx.settings.clone(), args)?;
            config::save_settings(&ctx.paths, &settings)?;
            show(ctx, &settings)
        }
    }
}

fn apply(mut settings: Settings, args: ConfigSetArgs) -> AppResult<Settings> {
    if args.platform.is_none() && args.output_dir.is_none() && args.confirm_launch.is_none() {
        return Err(AppError::Validation(
            "nothing to set; pass --platform, --output-dir or --confirm-launch".to_string(),
        ));
    }

    if let Some(platform) = args.platform {
        settings.default_platform = Some(platform);
    }
    if let Some(output_dir) = args.output_dir {
        settings.output_dir = Some(output_dir);
    }
    if let Some(confirm_launch) = args.confirm_launch {
        settings.confirm_launch = confirm_launch;
    }

    Ok(settings)
}

fn show(ctx: &AppContext, settings: &Settings) -> AppResult<()> {
    let view = ConfigView {
        settings_file: ctx.paths.settings_file().display().to_string(),
        data_dir: ctx.paths.data_dir().display().to_string(),
        user: ctx.user_id(),
        settings,
    };

    let lines = vec![
        format!("settings file: {}", view.settings_file),
        format!("data dir: {}", view.data_dir),
        format!("user: {}", view.user.unwrap_or("(shared)")),
        format!(
            "default platform: {}",
            settings
                .default_platform
                .map(|platform| platform.to_string())
                .unwrap_or_else(|| "(detect)".to_string())
        ),
        format!("output dir: {}", settings.output_dir().display()),
        format!("confirm launch: {}", settings.confirm_launch),
    ];
    ctx.output.emit_lines(&lines, &view)
}
