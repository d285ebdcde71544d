use launchkit::platform::{self, Platform};
use launchkit::profile::{Browser, Profile};
use launchkit::script::{generate_for, generate_script};

fn profile_with(apps: &[&str], urls: &[&str], browser: Browser) -> Profile {
    let mut profile = Profile::new("Morning Routine");
    profile.apps = apps.iter().map(|app| app.to_string()).collect();
    profile.urls = urls.iter().map(|url| url.to_string()).collect();
    profile.browser = browser;
    profile
}

#[test]
fn windows_script_uses_crlf_and_one_start_per_app() {
    let profile = profile_with(
        &["C:/a.exe", "C:/b.exe", "C:/c.exe"],
        &["https://example.com"],
        Browser::Default,
    );
    let script = generate_for(&profile, Platform::Windows);

    assert_eq!(script.extension, ".bat");
    assert!(!script.content.replace("\r\n", "").contains('\n'));

    let starts: Vec<&str> = script
        .content
        .split("\r\n")
        .filter(|line| line.starts_with("start \"\" \"C:/"))
        .collect();
    assert_eq!(
        starts,
        [
            "start \"\" \"C:/a.exe\"",
            "start \"\" \"C:/b.exe\"",
            "start \"\" \"C:/c.exe\""
        ]
    );
    assert!(
        script
            .content
            .contains("start \"\" \"https://example.com\"\r\n")
    );
    assert!(script.content.ends_with("pause\r\n"));
}

#[test]
fn mac_script_picks_open_command_per_browser() {
    let default = generate_for(
        &profile_with(&[], &["https://a"], Browser::Default),
        Platform::Mac,
    );
    assert!(default.content.contains("\nopen \"https://a\"\n"));

    let chrome = generate_for(
        &profile_with(&[], &["https://a"], Browser::Chrome),
        Platform::Mac,
    );
    assert!(chrome.content.contains("open -a \"Google Chrome\" \"https://a\"\n"));
    assert_eq!(chrome.extension, ".command");
}

#[test]
fn unix_scripts_start_with_shebang_and_prompt_to_exit() {
    for platform in [Platform::Mac, Platform::Linux] {
        let script = generate_for(
            &profile_with(&["/bin/a"], &["https://a"], Browser::Opera),
            platform,
        );
        assert!(script.content.starts_with("#!/bin/bash\n"));
        assert!(script.content.contains("echo \"Launching profile: Morning Routine\"\n"));
        assert!(script.content.ends_with("read -p \"Press enter to exit\"\n"));
        assert!(!script.content.contains('\r'));
    }
}

#[test]
fn urls_follow_apps_in_insertion_order() {
    let profile = profile_with(&["/bin/z", "/bin/a"], &["https://2", "https://1"], Browser::Default);
    let script = generate_for(&profile, Platform::Linux).content;

    let positions: Vec<usize> = ["\"/bin/z\"", "\"/bin/a\"", "\"https://2\"", "\"https://1\""]
        .iter()
        .map(|needle| script.find(needle).expect("entry should be present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn unspecified_platform_follows_detection() {
    let profile = profile_with(&[], &["https://a"], Browser::Default);
    let expected = platform::detect_current().or_default();

    let script = generate_script(&profile, None);
    assert_eq!(script.platform, expected);
    assert_eq!(script, generate_for(&profile, expected));
}

#[test]
fn explicit_platform_overrides_detection() {
    let profile = profile_with(&[], &[], Browser::Default);
    assert_eq!(
        generate_script(&profile, Some(Platform::Windows)).extension,
        ".bat"
    );
}
