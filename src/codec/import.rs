use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::profile::{Browser, Profile, ProfileBundle, new_id};

type Object = Map<String, Value>;

/// Parses one exported profile. The only values filled in are a missing
/// `browser` (`Default`) and a missing `id` (freshly generated).
pub fn import_profile(text: &str) -> AppResult<Profile> {
    let value = parse(text)?;
    let object = as_object(&value)?;
    if object.contains_key("profiles") {
        return Err(invalid(
            "file is a bulk export; import it as a bundle".to_string(),
        ));
    }

    profile_from_object(object)
}

/// Parses either a single exported profile or a bulk envelope.
pub fn import_bundle(text: &str) -> AppResult<ProfileBundle> {
    let value = parse(text)?;
    let object = as_object(&value)?;

    match object.get("profiles") {
        None | Some(Value::Null) => profile_from_object(object).map(ProfileBundle::Single),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                bundled_profile(entry)
                    .map_err(|err| invalid(format!("profiles[{index}]: {}", reason(err))))
            })
            .collect::<AppResult<Vec<_>>>()
            .map(ProfileBundle::Bulk),
        Some(_) => Err(invalid("`profiles` must be an array".to_string())),
    }
}

fn bundled_profile(entry: &Value) -> AppResult<Profile> {
    let object = as_object(entry)?;
    if object.contains_key("profiles") {
        return Err(invalid("bulk exports cannot be nested".to_string()));
    }

    profile_from_object(object)
}

fn profile_from_object(object: &Object) -> AppResult<Profile> {
    let name = match object.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => return Err(invalid("`name` must be a non-empty string".to_string())),
    };
    let apps = string_list(object, "apps")?;
    let urls = string_list(object, "urls")?;
    let browser = optional_string(object, "browser")?
        .filter(|browser| !browser.is_empty())
        .map(Browser::from)
        .unwrap_or_default();
    let id = optional_string(object, "id")?
        .filter(|id| !id.is_empty())
        .unwrap_or_else(new_id);
    let user_id = optional_string(object, "userId")?;

    Ok(Profile {
        id,
        name,
        apps,
        urls,
        browser,
        user_id,
    })
}

fn parse(text: &str) -> AppResult<Value> {
    serde_json::from_str(text).map_err(|err| invalid(format!("not valid JSON ({err})")))
}

fn as_object(value: &Value) -> AppResult<&Object> {
    value
        .as_object()
        .ok_or_else(|| invalid("expected a JSON object".to_string()))
}

fn string_list(object: &Object, key: &str) -> AppResult<Vec<String>> {
    let Some(Value::Array(items)) = object.get(key) else {
        return Err(invalid(format!("`{key}` must be an array of strings")));
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(format!("`{key}` must be an array of strings")))
        })
        .collect()
}

fn optional_string(object: &Object, key: &str) -> AppResult<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid(format!("`{key}` must be a string"))),
    }
}

fn invalid(message: String) -> AppError {
    AppError::InvalidFormat(message)
}

fn reason(error: AppError) -> String {
    match error {
        AppError::InvalidFormat(message) => message,
        other => other.to_string(),
    }
}
