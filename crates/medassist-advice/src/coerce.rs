//! Defensive coercion of untrusted model output into [`AdviceResult`].
//!
//! The model's JSON is generative and can be malformed in arbitrary ways:
//! missing keys, wrong types, extra keys, nulls anywhere. Everything here is
//! total — invalid parts are defaulted or dropped, never an error.

use medassist_core::types::{AdviceResult, HomeRemedy, OtcMedicine, VideoLink};
use serde_json::Value;

/// Reshape an arbitrary JSON value into a well-formed [`AdviceResult`].
///
/// `nearby_chemists` always starts empty: the orchestrator fills it from the
/// facility search, and nothing the model returns for that key is trusted.
#[must_use]
pub fn coerce_output(model: &Value) -> AdviceResult {
    AdviceResult {
        intent: model
            .get("intent")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        otc_medicines: map_array(model.get("otc_medicines"), |item| OtcMedicine {
            name: field_string(item, "name"),
            dosage_guidance: field_string(item, "dosage_guidance"),
            cautions: field_string(item, "cautions"),
        }),
        nearby_chemists: Vec::new(),
        home_remedies: map_array(model.get("home_remedies"), |item| HomeRemedy {
            title: field_string(item, "title"),
            rationale: field_string(item, "rationale"),
        }),
        videos: normalize_videos(model.get("videos")),
        red_flags: string_array(model.get("red_flags")),
        disclaimers: string_array(model.get("disclaimers")),
    }
}

/// Extract up to 5 usable links from a loosely-shaped value.
///
/// Bare strings must carry an `http(s)` prefix; objects with a string-valued
/// `url` field are accepted verbatim. Everything else is skipped silently.
#[must_use]
pub fn normalize_videos(value: Option<&Value>) -> Vec<VideoLink> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for item in items {
        match item {
            Value::String(s) if s.starts_with("http://") || s.starts_with("https://") => {
                links.push(VideoLink { url: s.clone() });
            }
            Value::Object(map) => {
                if let Some(Value::String(url)) = map.get("url") {
                    links.push(VideoLink { url: url.clone() });
                }
            }
            _ => {}
        }
        if links.len() == 5 {
            break;
        }
    }
    links
}

/// Map every element of a source array into the target shape, regardless of
/// the element's own type. Non-arrays yield an empty vec.
fn map_array<T>(value: Option<&Value>, f: impl Fn(&Value) -> T) -> Vec<T> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(f).collect())
        .unwrap_or_default()
}

/// Map every element of a source array to its string representation.
fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(display_string).collect())
        .unwrap_or_default()
}

/// Coerce one sub-field of an element to a string, tolerating elements that
/// are not objects at all. Absent and null sub-fields become empty strings.
fn field_string(item: &Value, key: &str) -> String {
    match item.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render any element as a string: strings pass through, everything else —
/// null included — keeps its JSON text form.
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
