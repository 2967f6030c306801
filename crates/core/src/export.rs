//! JSON export and read-back of a slide sequence.

use crate::error::Result;
use crate::types::Slide;
use std::fs;
use std::path::Path;

/// Default download name for JSON exports.
pub const JSON_FILE_NAME: &str = "presentation.json";

/// Serialize slides as a pretty-printed JSON array.
pub fn to_json(slides: &[Slide]) -> Result<String> {
    Ok(serde_json::to_string_pretty(slides)?)
}

/// Read slides back from exported JSON. Every field must be present.
pub fn from_json(json: &str) -> Result<Vec<Slide>> {
    Ok(serde_json::from_str(json)?)
}

/// Write slides as JSON to `path`.
pub fn write_json(path: &Path, slides: &[Slide]) -> Result<()> {
    let mut json = to_json(slides)?;
    json.push('\n');
    fs::write(path, json)?;
    log::debug!("Wrote {} slides to {}", slides.len(), path.display());
    Ok(())
}

/// Load slides from a JSON file.
pub fn read_json(path: &Path) -> Result<Vec<Slide>> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Vec<Slide> {
        vec![
            Slide::new("Intro", ["What is photosynthesis?"], "Welcome the audience"),
            Slide::new("Empty", Vec::<String>::new(), ""),
            Slide::new("Quotes \"and\" <tags>", ["a & b", "ünïcödé"], "line\nbreak"),
        ]
    }

    #[test]
    fn test_round_trip_is_field_for_field_equal() {
        let slides = sample();
        let json = to_json(&slides).unwrap();
        assert_eq!(from_json(&json).unwrap(), slides);
    }

    #[test]
    fn test_pretty_printed_with_stable_order() {
        let json = to_json(&sample()[..1]).unwrap();
        let expected = "[\n  {\n    \"title\": \"Intro\",\n    \"content\": [\n      \"What is photosynthesis?\"\n    ],\n    \"notes\": \"Welcome the audience\"\n  }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let err = from_json(r#"[{"title": "No content"}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(JSON_FILE_NAME);
        write_json(&path, &sample()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("]\n"));
        assert_eq!(read_json(&path).unwrap(), sample());
    }
}
