use crate::platform::Platform;
use crate::profile::Profile;

use super::{ScriptWriter, quoted, url_command};

// `open` hands off to LaunchServices and returns at once, so no `&` is needed.
pub(super) fn render(profile: &Profile) -> String {
    let mut script = ScriptWriter::new("\n");
    script.line("#!/bin/bash");
    script.line(&format!("echo \"Launching profile: {}\"", profile.name));
    script.blank();

    if !profile.apps.is_empty() {
        script.line("echo \"Starting applications...\"");
        for app in &profile.apps {
            script.line(&format!("open {}", quoted(app)));
        }
        script.blank();
    }

    if !profile.urls.is_empty() {
        script.line("echo \"Opening URLs...\"");
        let command = url_command(Platform::Mac, &profile.browser);
        for url in &profile.urls {
            script.line(&format!("{command} {}", quoted(url)));
        }
    }

    script.blank();
    script.line("echo \"Profile launch complete!\"");
    script.line("read -p \"Press enter to exit\"");
    script.finish()
}
