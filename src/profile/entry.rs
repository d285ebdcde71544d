use url::Url;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

use super::model::{Browser, Profile};

const DEFAULT_SCHEME: &str = "http://";

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("profile name is required".to_string()));
    }

    Ok(trimmed.to_string())
}

pub fn normalize_app(path: &str) -> AppResult<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "cannot add empty application path".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

/// Prefixes `http://` when the input carries no http(s) scheme, then checks
/// that the result parses as an absolute URL. The prefixed text is kept as
/// typed rather than re-serialized.
pub fn normalize_url(input: &str) -> AppResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("cannot add empty URL".to_string()));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };

    Url::parse(&candidate).map_err(|err| {
        AppError::Validation(format!(
            "invalid URL format `{trimmed}` ({err}). enter a valid URL, e.g. example.com"
        ))
    })?;

    Ok(candidate)
}

pub fn build_profile(
    name: &str,
    apps: &[String],
    urls: &[String],
    browser: Browser,
) -> AppResult<Profile> {
    let mut profile = Profile::new(validate_name(name)?);
    profile.apps = apps
        .iter()
        .map(|app| normalize_app(app))
        .collect::<AppResult<_>>()?;
    profile.urls = urls
        .iter()
        .map(|url| normalize_url(url))
        .collect::<AppResult<_>>()?;
    profile.browser = browser;
    Ok(profile)
}

fn has_http_scheme(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
