use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::Profile;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let profiles = ctx.load_profiles();
    ctx.output.emit_lines(&format_list(&profiles), &profiles)
}

fn format_list(profiles: &[Profile]) -> Vec<String> {
    if profiles.is_empty() {
        return vec!["0 profiles".to_string()];
    }

    let mut lines = Vec::new();
    for (index, profile) in profiles.iter().enumerate() {
        lines.push(format!("{}. {} ({})", index + 1, profile.name, profile.id));
        lines.push(format!(
            "   {} apps, {} urls, browser: {}",
            profile.apps.len(),
            profile.urls.len(),
            profile.browser
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_empty_collection() {
        assert_eq!(format_list(&[]), ["0 profiles"]);
    }

    #[test]
    fn numbers_profiles_with_counts() {
        let mut profile = Profile::new("Work");
        profile.id = "p1".to_string();
        profile.urls = vec!["https://a".to_string(), "https://b".to_string()];

        let lines = format_list(&[profile]);
        assert_eq!(lines[0], "1. Work (p1)");
        assert_eq!(lines[1], "   0 apps, 2 urls, browser: Default");
    }
}
