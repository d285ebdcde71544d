use crate::platform::Platform;
use crate::profile::Profile;

use super::{ScriptWriter, quoted, url_command};

pub(super) fn render(profile: &Profile) -> String {
    let mut script = ScriptWriter::new("\r\n");
    script.line("@echo off");
    script.line(&format!("echo Launching profile: {}", profile.name));
    script.blank();

    if !profile.apps.is_empty() {
        script.line("echo Starting applications...");
        for app in &profile.apps {
            script.line(&format!("start \"\" {}", quoted(app)));
        }
        script.blank();
    }

    if !profile.urls.is_empty() {
        script.line("echo Opening URLs...");
        let command = url_command(Platform::Windows, &profile.browser);
        for url in &profile.urls {
            script.line(&format!("{command} {}", quoted(url)));
        }
    }

    script.blank();
    script.line("echo Profile launch complete!");
    script.line("pause");
    script.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Browser;

    #[test]
    fn renders_exact_batch_layout() {
        let mut profile = Profile::new("Work");
        profile.apps = vec!["C:/Tools/code.exe".to_string()];
        profile.urls = vec!["https://example.com".to_string()];
        profile.browser = Browser::Chrome;

        let expected = "@echo off\r\n\
echo Launching profile: Work\r\n\
\r\n\
echo Starting applications...\r\n\
start \"\" \"C:/Tools/code.exe\"\r\n\
\r\n\
echo Opening URLs...\r\n\
start chrome \"https://example.com\"\r\n\
\r\n\
echo Profile launch complete!\r\n\
pause\r\n";

        assert_eq!(render(&profile), expected);
    }

    #[test]
    fn skips_empty_sections() {
        let profile = Profile::new("Empty");
        let script = render(&profile);
        assert!(!script.contains("Starting applications"));
        assert!(!script.contains("Opening URLs"));
        assert!(script.ends_with("pause\r\n"));
    }
}
