use crate::platform::Platform;
use crate::profile::Profile;

use super::{ScriptWriter, quoted, url_command};

pub(super) fn render(profile: &Profile) -> String {
    let mut script = ScriptWriter::new("\n");
    script.line("#!/bin/bash");
    script.line(&format!("echo \"Launching profile: {}\"", profile.name));
    script.blank();

    if !profile.apps.is_empty() {
        script.line("echo \"Starting applications...\"");
        for app in &profile.apps {
            script.line(&format!("{} &", quoted(app)));
        }
        script.blank();
    }

    if !profile.urls.is_empty() {
        script.line("echo \"Opening URLs...\"");
        let command = url_command(Platform::Linux, &profile.browser);
        for url in &profile.urls {
            script.line(&format!("{command} {} &", quoted(url)));
        }
    }

    script.blank();
    script.line("echo \"Profile launch complete!\"");
    script.line("read -p \"Press enter to exit\"");
    script.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Browser;

    #[test]
    fn backgrounds_every_launch() {
        let mut profile = Profile::new("Dev");
        profile.apps = vec!["/usr/bin/code".to_string()];
        profile.urls = vec!["https://docs.rs".to_string()];

        let script = render(&profile);
        assert!(script.contains("\"/usr/bin/code\" &\n"));
        assert!(script.contains("xdg-open \"https://docs.rs\" &\n"));
    }

    #[test]
    fn uses_named_browser_binary() {
        let mut profile = Profile::new("Dev");
        profile.urls = vec!["https://docs.rs".to_string()];
        profile.browser = Browser::Chrome;

        assert!(render(&profile).contains("google-chrome \"https://docs.rs\" &\n"));
    }
}
