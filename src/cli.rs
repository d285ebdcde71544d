use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};

use crate::platform::Platform;
use crate::profile::Browser;

#[derive(Debug, Parser)]
#[command(
    name = "launchkit",
    version,
    about = "Bundle applications and URLs into launchable profiles"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "LAUNCHKIT_USER",
        help = "User id whose profiles to use"
    )]
    pub user: Option<String>,
    #[arg(
        long,
        global = true,
        env = "LAUNCHKIT_DATA_DIR",
        help = "Directory holding settings and stored profiles"
    )]
    pub data_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a profile
    Create(CreateArgs),
    /// List stored profiles
    List,
    /// Show one profile
    Show(ProfileArgs),
    /// Replace fields of a profile
    Edit(EditArgs),
    /// Delete a profile
    Delete(ProfileArgs),
    /// Delete every profile of the current user
    Clear(ClearArgs),
    /// Open a profile's first URL
    Launch(LaunchArgs),
    /// Write launcher scripts
    Script(ScriptArgs),
    /// Export profiles as JSON
    Export(ExportArgs),
    /// Import profiles from an exported JSON file
    Import(ImportArgs),
    /// Show the detected platform
    Platform,
    /// Show or change settings
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(help = "Profile id or name")]
    pub profile: String,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long, help = "Profile name")]
    pub name: String,
    #[arg(long = "app", action = ArgAction::Append, help = "Application path (repeatable)")]
    pub apps: Vec<String>,
    #[arg(long = "url", action = ArgAction::Append, help = "URL to open (repeatable)")]
    pub urls: Vec<String>,
    #[arg(long, value_parser = parse_browser, help = "Default, firefox, chrome, safari or opera")]
    pub browser: Option<Browser>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(help = "Profile id or name")]
    pub profile: String,
    #[arg(long, help = "New profile name")]
    pub name: Option<String>,
    #[arg(long, action = ArgAction::Append, help = "Append an application path")]
    pub add_app: Vec<String>,
    #[arg(long, action = ArgAction::Append, help = "Remove the application at this 1-based position")]
    pub remove_app: Vec<usize>,
    #[arg(long, action = ArgAction::Append, help = "Append a URL")]
    pub add_url: Vec<String>,
    #[arg(long, action = ArgAction::Append, help = "Remove the URL at this 1-based position")]
    pub remove_url: Vec<usize>,
    #[arg(long, value_parser = parse_browser, help = "Default, firefox, chrome, safari or opera")]
    pub browser: Option<Browser>,
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    #[arg(long, help = "Skip the confirmation prompt")]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct LaunchArgs {
    #[arg(help = "Profile id or name")]
    pub profile: String,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub yes: bool,
    #[arg(long, help = "Report what would be opened without opening it")]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["profile", "all"])))]
pub struct ScriptArgs {
    #[arg(help = "Profile id or name")]
    pub profile: Option<String>,
    #[arg(long, help = "Write a script for every stored profile")]
    pub all: bool,
    #[arg(long, value_enum, help = "Target platform (defaults to settings, then detection)")]
    pub platform: Option<Platform>,
    #[arg(long, help = "Output directory")]
    pub out: Option<PathBuf>,
    #[arg(long, conflicts_with = "all", help = "Print the script instead of writing it")]
    pub stdout: bool,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["profile", "all"])))]
pub struct ExportArgs {
    #[arg(help = "Profile id or name")]
    pub profile: Option<String>,
    #[arg(long, help = "Export every stored profile into one file")]
    pub all: bool,
    #[arg(long, help = "Output directory")]
    pub out: Option<PathBuf>,
    #[arg(long, help = "Print the JSON instead of writing it")]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[arg(help = "Exported profile JSON file")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(long, value_enum, help = "Default script platform")]
    pub platform: Option<Platform>,
    #[arg(long, help = "Default output directory for scripts and exports")]
    pub output_dir: Option<PathBuf>,
    #[arg(long, help = "Ask before launching profiles that contain applications")]
    pub confirm_launch: Option<bool>,
}

fn parse_browser(value: &str) -> Result<Browser, String> {
    Browser::parse_known(value).ok_or_else(|| {
        format!("unknown browser `{value}`; expected Default, firefox, chrome, safari or opera")
    })
}
