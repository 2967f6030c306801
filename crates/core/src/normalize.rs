//! Normalization of raw model output into slides.
//!
//! The model is asked for a JSON array of `{title, content, notes}` objects,
//! but the response is still treated as untrusted text: missing or falsy
//! fields are defaulted, and a payload that is not an array yields no slides.

use crate::error::GenerationError;
use crate::types::Slide;
use regex::Regex;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Title used when the model omits one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Matches a response wrapped in a Markdown code fence.
static CODE_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^```[a-zA-Z]*\s*(.*?)\s*```$").unwrap());

/// Top-level payload: either an array of slide-like values, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPayload {
    Slides(Vec<RawSlide>),
    Other(IgnoredAny),
}

/// One array element: an object with loosely typed fields, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlide {
    Record(Map<String, Value>),
    Other(IgnoredAny),
}

impl RawSlide {
    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            RawSlide::Record(map) => map.get(name),
            RawSlide::Other(_) => None,
        }
    }

    fn into_slide(self, position: usize) -> Slide {
        let title = match self.field("title").filter(|v| is_truthy(v)) {
            Some(value) => nfc(&value_to_text(value)),
            None => {
                log::warn!("Slide {} has no title, using default", position + 1);
                DEFAULT_TITLE.to_string()
            }
        };

        let content = match self.field("content") {
            Some(Value::Array(items)) => items.iter().map(|v| nfc(&value_to_text(v))).collect(),
            _ => {
                log::warn!("Slide {} has no content array, using empty", position + 1);
                Vec::new()
            }
        };

        let notes = self
            .field("notes")
            .filter(|v| is_truthy(v))
            .map(|v| nfc(&value_to_text(v)))
            .unwrap_or_default();

        Slide {
            title,
            content,
            notes,
        }
    }
}

/// Parse and normalize the model's response text.
///
/// Invalid JSON is a [`GenerationError::MalformedResponse`]. Valid JSON that
/// is not an array, or an empty array, yields an empty vector.
pub fn parse_slides(raw: &str) -> Result<Vec<Slide>, GenerationError> {
    let text = strip_code_fence(raw.trim());

    let payload: RawPayload = serde_json::from_str(text).map_err(|e| {
        log::debug!("Response was not valid JSON: {}", e);
        GenerationError::MalformedResponse(e.to_string())
    })?;

    let slides = match payload {
        RawPayload::Slides(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.into_slide(i))
            .collect(),
        RawPayload::Other(_) => {
            log::warn!("Response JSON is not an array, no slides produced");
            Vec::new()
        }
    };

    Ok(slides)
}

/// Remove a surrounding ```` ```json ```` fence, if any.
fn strip_code_fence(text: &str) -> &str {
    CODE_FENCE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
}

/// JavaScript truthiness for a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON value as slide text. Strings are taken verbatim.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn nfc(text: &str) -> String {
    text.nfc().collect()
}
