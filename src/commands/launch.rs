use crate::cli::LaunchArgs;
use crate::commands::prompt;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::launch::{self, DryRunOpener, LaunchResult, SystemOpener};
use crate::library;
use crate::output::OutputMode;
use crate::platform;
use crate::profile::Profile;

pub fn run(ctx: &AppContext, args: LaunchArgs) -> AppResult<()> {
    let profiles = ctx.load_profiles();
    let profile = library::find_profile(&profiles, &args.profile)?;

    if let Some(notice) = confirmation_notice(ctx, profile, args.yes) {
        eprintln!("{notice}");
        if !profile.urls.is_empty() && !prompt::confirm("Continue?")? {
            return ctx.output.emit(
                "launch cancelled",
                &LaunchResult {
                    success: false,
                    advisory: Some("cancelled".to_string()),
                },
            );
        }
    }

    let result = if args.dry_run {
        let opener = DryRunOpener::new();
        let result = launch::launch_profile(profile, &opener);
        if ctx.output.mode() == OutputMode::Text {
            for url in opener.opened() {
                println!("would open {url}");
            }
        }
        result
    } else {
        let opener = SystemOpener::new(platform::detect_current().or_default());
        launch::launch_profile(profile, &opener)
    };

    if !result.success {
        let message = result
            .advisory
            .unwrap_or_else(|| "unknown error launching profile".to_string());
        return Err(AppError::Launch(message));
    }

    let text = match result.advisory.as_deref() {
        Some(advisory) => format!("\"{}\": {advisory}", profile.name),
        None => format!("launched \"{}\"", profile.name),
    };
    ctx.output.emit(&text, &result)
}

fn confirmation_notice(ctx: &AppContext, profile: &Profile, yes: bool) -> Option<String> {
    if yes || !ctx.settings.confirm_launch || !prompt::interactive() {
        return None;
    }
    apps_notice(profile)
}

/// Warning shown before launching a profile that lists applications.
fn apps_notice(profile: &Profile) -> Option<String> {
    if profile.apps.is_empty() {
        return None;
    }
    let outcome = if profile.urls.is_empty() {
        "It does not contain any URLs to launch."
    } else {
        "Only its first URL will be opened."
    };
    Some(format!(
        "\"{}\" contains desktop applications, which cannot be started from here. {outcome}",
        profile.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(apps: &[&str], urls: &[&str]) -> Profile {
        let mut profile = Profile::new("Work");
        profile.apps = apps.iter().map(|app| app.to_string()).collect();
        profile.urls = urls.iter().map(|url| url.to_string()).collect();
        profile
    }

    #[test]
    fn no_notice_without_apps() {
        assert_eq!(apps_notice(&profile_with(&[], &["https://example.com"])), None);
    }

    #[test]
    fn notice_mentions_first_url_when_urls_exist() {
        let notice = apps_notice(&profile_with(&["/usr/bin/code"], &["https://example.com"]))
            .expect("notice");
        assert!(notice.contains("Only its first URL will be opened."));
    }

    #[test]
    fn notice_reports_missing_urls() {
        let notice = apps_notice(&profile_with(&["/usr/bin/code"], &[])).expect("notice");
        assert!(notice.contains("does not contain any URLs to launch"));
        assert!(!notice.contains("first URL"));
    }
}
