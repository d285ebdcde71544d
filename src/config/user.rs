/// Normalizes the `--user` partition selector; blank means the shared partition.
pub fn resolve_user(requested: Option<&str>) -> Option<String> {
    let trimmed = requested?.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_string())
}
