//! Preset visual themes applied at render and export time.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Font stacks for titles and body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub title: String,
    pub body: String,
}

/// A named colour and font preset. Colours are `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub bg: String,
    pub title: String,
    pub text: String,
    pub accent: String,
    pub font: ThemeFonts,
}

impl Theme {
    fn preset(
        name: &str,
        bg: &str,
        title: &str,
        text: &str,
        accent: &str,
        title_font: &str,
        body_font: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg: bg.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            accent: accent.to_string(),
            font: ThemeFonts {
                title: title_font.to_string(),
                body: body_font.to_string(),
            },
        }
    }

    fn professional() -> Self {
        Self::preset(
            "Professional",
            "#ffffff",
            "#0d47a1",
            "#333333",
            "#1565c0",
            "Georgia, serif",
            "Helvetica, sans-serif",
        )
    }

    /// The fixed palette, in menu order.
    pub fn presets() -> Vec<Theme> {
        vec![
            Self::professional(),
            Self::preset(
                "Creative",
                "#333333",
                "#fdd835",
                "#eeeeee",
                "#f9a825",
                "'Trebuchet MS', sans-serif",
                "'Lucida Sans Unicode', sans-serif",
            ),
            Self::preset(
                "Minimalist",
                "#f5f5f5",
                "#212121",
                "#424242",
                "#757575",
                "Helvetica Neue, sans-serif",
                "Helvetica Neue, sans-serif",
            ),
            Self::preset(
                "Ocean",
                "#e0f7fa",
                "#006064",
                "#004d40",
                "#00838f",
                "Verdana, sans-serif",
                "Arial, sans-serif",
            ),
        ]
    }

    /// Look up a preset by name, ignoring case.
    pub fn by_name(name: &str) -> Result<Theme, ValidationError> {
        Self::presets()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ValidationError::UnknownTheme(name.to_string()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::professional()
    }
}

/// Strip the leading `#` from a hex colour, uppercased (`#0d47a1` -> `0D47A1`).
pub fn hex_rgb(colour: &str) -> String {
    colour.trim().trim_start_matches('#').to_ascii_uppercase()
}

/// First family of a CSS font stack, without quotes.
///
/// `"'Trebuchet MS', sans-serif"` -> `"Trebuchet MS"`.
pub fn primary_face(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .to_string()
}
