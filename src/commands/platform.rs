use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::platform::{self, DetectedPlatform, Platform};

#[derive(Debug, Serialize)]
struct PlatformReport {
    identifier: &'static str,
    detected: DetectedPlatform,
    script_platform: Platform,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let identifier = platform::current_identifier();
    let detected = platform::detect_platform(identifier);
    let script_platform = ctx
        .script_platform(None)
        .unwrap_or_else(|| detected.or_default());

    let report = PlatformReport {
        identifier,
        detected,
        script_platform,
    };
    let text = format!(
        "{identifier}: scripts target {}",
        report.script_platform.display_name()
    );
    ctx.output.emit(&text, &report)
}
