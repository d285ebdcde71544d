use std::path::PathBuf;

use clap::Parser;
use launchkit::cli::{Cli, Command, ConfigCommand};
use launchkit::platform::Platform;
use launchkit::profile::Browser;

#[test]
fn parses_create_with_repeated_entries() {
    let cli = Cli::try_parse_from([
        "launchkit",
        "create",
        "--name",
        "Work",
        "--app",
        "/usr/bin/code",
        "--url",
        "example.com",
        "--url",
        "https://docs.rs",
        "--browser",
        "Chrome",
    ])
    .expect("cli parse should work");

    match cli.command {
        Command::Create(create) => {
            assert_eq!(create.name, "Work");
            assert_eq!(create.apps, ["/usr/bin/code"]);
            assert_eq!(create.urls, ["example.com", "https://docs.rs"]);
            assert_eq!(create.browser, Some(Browser::Chrome));
        }
        _ => panic!("expected create command"),
    }
}

#[test]
fn rejects_unknown_browser() {
    let result = Cli::try_parse_from(["launchkit", "create", "--name", "Work", "--browser", "edge"]);
    assert!(result.is_err());
}

#[test]
fn parses_global_user_and_data_dir() {
    let cli = Cli::try_parse_from([
        "launchkit",
        "list",
        "--user",
        "u1",
        "--data-dir",
        "/tmp/launchkit",
        "--json",
        "-vv",
    ])
    .expect("cli parse should work");

    assert_eq!(cli.user.as_deref(), Some("u1"));
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/launchkit")));
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Command::List));
}

#[test]
fn parses_script_for_platform() {
    let cli = Cli::try_parse_from(["launchkit", "script", "Work", "--platform", "mac"])
        .expect("cli parse should work");
    match cli.command {
        Command::Script(script) => {
            assert_eq!(script.profile.as_deref(), Some("Work"));
            assert_eq!(script.platform, Some(Platform::Mac));
            assert!(!script.all);
        }
        _ => panic!("expected script command"),
    }
}

#[test]
fn script_requires_profile_or_all() {
    assert!(Cli::try_parse_from(["launchkit", "script"]).is_err());
    assert!(Cli::try_parse_from(["launchkit", "script", "Work", "--all"]).is_err());
    assert!(Cli::try_parse_from(["launchkit", "script", "--all"]).is_ok());
}

#[test]
fn parses_export_all() {
    let cli = Cli::try_parse_from(["launchkit", "export", "--all", "--out", "exports"])
        .expect("cli parse should work");
    match cli.command {
        Command::Export(export) => {
            assert!(export.all);
            assert_eq!(export.out, Some(PathBuf::from("exports")));
        }
        _ => panic!("expected export command"),
    }
}

#[test]
fn parses_launch_flags() {
    let cli = Cli::try_parse_from(["launchkit", "launch", "Work", "--yes", "--dry-run"])
        .expect("cli parse should work");
    match cli.command {
        Command::Launch(launch) => {
            assert_eq!(launch.profile, "Work");
            assert!(launch.yes);
            assert!(launch.dry_run);
        }
        _ => panic!("expected launch command"),
    }
}

#[test]
fn parses_edit_positions() {
    let cli = Cli::try_parse_from([
        "launchkit",
        "edit",
        "Work",
        "--remove-url",
        "2",
        "--add-url",
        "example.com",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Edit(edit) => {
            assert_eq!(edit.remove_url, [2]);
            assert_eq!(edit.add_url, ["example.com"]);
        }
        _ => panic!("expected edit command"),
    }
}

#[test]
fn parses_config_set() {
    let cli = Cli::try_parse_from([
        "launchkit",
        "config",
        "set",
        "--platform",
        "windows",
        "--confirm-launch",
        "false",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Config(config) => match config.command {
            ConfigCommand::Set(set) => {
                assert_eq!(set.platform, Some(Platform::Windows));
                assert_eq!(set.confirm_launch, Some(false));
            }
            ConfigCommand::Show => panic!("expected config set"),
        },
        _ => panic!("expected config command"),
    }
}
