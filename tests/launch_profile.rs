use launchkit::error::{AppError, AppResult};
use launchkit::launch::{DryRunOpener, UrlOpener, launch_profile};
use launchkit::profile::{Browser, Profile};

struct FailingOpener;

impl UrlOpener for FailingOpener {
    fn open_url(&self, _url: &str, _browser: &Browser) -> AppResult<()> {
        Err(AppError::Launch("no display available".to_string()))
    }
}

fn profile(apps: &[&str], urls: &[&str]) -> Profile {
    let mut profile = Profile::new("Work");
    profile.apps = apps.iter().map(|app| app.to_string()).collect();
    profile.urls = urls.iter().map(|url| url.to_string()).collect();
    profile
}

#[test]
fn opens_only_first_url_and_advises() {
    let opener = DryRunOpener::new();
    let result = launch_profile(&profile(&[], &["https://a", "https://b"]), &opener);

    assert!(result.success);
    assert_eq!(opener.opened(), ["https://a"]);
    let advisory = result.advisory.expect("advisory expected");
    assert!(advisory.contains("Only the first URL"));
}

#[test]
fn single_url_has_no_advisory() {
    let opener = DryRunOpener::new();
    let result = launch_profile(&profile(&["/bin/a"], &["https://a"]), &opener);

    assert!(result.success);
    assert_eq!(result.advisory, None);
}

#[test]
fn apps_only_profile_reports_desktop_advisory() {
    let opener = DryRunOpener::new();
    let result = launch_profile(&profile(&["foo"], &[]), &opener);

    assert!(result.success);
    assert!(opener.opened().is_empty());
    assert!(result.advisory.expect("advisory expected").contains("desktop"));
}

#[test]
fn empty_profile_has_nothing_to_launch() {
    let result = launch_profile(&profile(&[], &[]), &DryRunOpener::new());

    assert!(result.success);
    assert!(
        result
            .advisory
            .expect("advisory expected")
            .starts_with("Nothing to launch")
    );
}

#[test]
fn opener_failure_is_reported_not_raised() {
    let result = launch_profile(&profile(&[], &["https://a"]), &FailingOpener);

    assert!(!result.success);
    assert_eq!(result.advisory.as_deref(), Some("no display available"));
}
