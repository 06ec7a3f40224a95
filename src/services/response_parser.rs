//! Turns raw completion text into a [`ProfileResult`].
//!
//! The model is an untrusted producer: it may wrap the JSON in markdown
//! fences, drift from the requested schema, or answer in prose. Anything that
//! cannot be coerced into a well-formed result is reported as
//! [`AppError::ResponseParse`] so the caller can fall back.

use crate::error::{AppError, Result};
use crate::models::{Coordinates, ProfileResult};
use serde_json::Value;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Extract the JSON candidate from a completion.
///
/// Preference order: a ```` ```json ```` fenced block, then the first fenced
/// block of any kind (its language tag line is dropped), then the whole
/// trimmed text. An unterminated fence runs to the end of the text.
pub fn extract_json_block(raw: &str) -> &str {
    if let Some(start) = raw.find(JSON_FENCE) {
        return fence_body(&raw[start + JSON_FENCE.len()..]);
    }

    if let Some(start) = raw.find(FENCE) {
        let rest = &raw[start + FENCE.len()..];
        // Skip an info string such as "JSON" or "javascript" on the fence line
        let rest = match rest.find('\n') {
            Some(newline) if is_info_string(&rest[..newline]) => &rest[newline + 1..],
            _ => rest,
        };
        return fence_body(rest);
    }

    raw.trim()
}

fn fence_body(rest: &str) -> &str {
    match rest.find(FENCE) {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}

fn is_info_string(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn parse_profile_result(raw: &str) -> Result<ProfileResult> {
    let candidate = extract_json_block(raw);

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| AppError::ResponseParse(format!("Completion is not valid JSON: {}", e)))?;

    let object = value.as_object().ok_or_else(|| {
        AppError::ResponseParse("Completion JSON is not an object".to_string())
    })?;

    if !["map", "charts", "stats"]
        .iter()
        .any(|key| object.contains_key(*key))
    {
        return Err(AppError::ResponseParse(
            "Completion JSON has none of map, charts or stats".to_string(),
        ));
    }

    let result: ProfileResult = serde_json::from_value(value).map_err(|e| {
        AppError::ResponseParse(format!("Completion JSON does not match the dashboard shape: {}", e))
    })?;

    if is_empty_dashboard(&result) {
        return Err(AppError::ResponseParse(
            "Completion JSON has no map points, charts or stats".to_string(),
        ));
    }

    validate_map(&result)?;

    Ok(result)
}

fn is_empty_dashboard(result: &ProfileResult) -> bool {
    let no_points = result.map.as_ref().map_or(true, |map| map.data.is_empty());
    no_points && result.charts.is_empty() && result.stats.is_empty()
}

fn validate_map(result: &ProfileResult) -> Result<()> {
    let Some(map) = &result.map else {
        return Ok(());
    };

    for point in &map.data {
        Coordinates::new(point.lat, point.lng).map_err(|e| {
            AppError::ResponseParse(format!("Map point '{}' rejected: {}", point.label, e))
        })?;
    }

    Ok(())
}
