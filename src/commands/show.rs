use crate::cli::ProfileArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::library;
use crate::profile::Profile;

pub fn run(ctx: &AppContext, args: ProfileArgs) -> AppResult<()> {
    let profiles = ctx.load_profiles();
    let profile = library::find_profile(&profiles, &args.profile)?;
    ctx.output.emit_lines(&describe(profile), profile)
}

pub(crate) fn describe(profile: &Profile) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", profile.name, profile.id),
        format!("browser: {}", profile.browser),
    ];

    lines.push(format!("apps: {}", section_count(profile.apps.len())));
    for (index, app) in profile.apps.iter().enumerate() {
        lines.push(format!("  {}. {app}", index + 1));
    }

    lines.push(format!("urls: {}", section_count(profile.urls.len())));
    for (index, url) in profile.urls.iter().enumerate() {
        lines.push(format!("  {}. {url}", index + 1));
    }

    lines
}

fn section_count(count: usize) -> String {
    if count == 0 {
        "(none)".to_string()
    } else {
        count.to_string()
    }
}
