//! Shared CLI helpers used across multiple commands.

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid edit: '{s}' (expected key=value)"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid edit: '{s}' (missing key)"));
    }
    Ok((key.to_string(), value.to_string()))
}
