//! Error types for deck generation, editing and export.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when the model's response could not be parsed.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse response from AI. Please try again.";

/// Top-level error for every deck operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing credential or invalid configuration. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The generation call failed or returned something unusable.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A user action was refused; no state was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a deck.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An export engine failed to produce its artifact.
    #[error("Export error: {0}")]
    Export(String),
}

/// Failures on the generation path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Network or transport failure talking to the model service.
    #[error("Request to AI service failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("AI service returned HTTP {status}: {body}")]
    Service { status: u16, body: String },

    /// The response text was not valid JSON.
    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    /// The source text file could not be read.
    #[error("Failed to read the file: {0}")]
    FileRead(String),

    /// Another generation request is still in flight.
    #[error("A generation request is already in progress")]
    Busy,
}

impl GenerationError {
    /// The single user-facing string shown at the UI boundary.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Request(_)
            | GenerationError::Service { .. }
            | GenerationError::MalformedResponse(_) => PARSE_FAILURE_MESSAGE.to_string(),
            GenerationError::FileRead(reason) => format!("Failed to read the file: {}", reason),
            GenerationError::Busy => {
                "Slides are already being generated. Please wait.".to_string()
            }
        }
    }
}

/// User actions that are refused without changing state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Submit with an empty topic and no file.
    #[error("Please enter a topic or upload a file.")]
    MissingInput,

    /// Delete requested while only one slide remains.
    #[error("Cannot delete the last slide.")]
    LastSlide,

    /// Slide index outside the deck.
    #[error("Slide index {index} is out of range for a deck of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// No preset theme with this name.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failures_share_parse_message() {
        let errors = [
            GenerationError::Request("timeout".into()),
            GenerationError::Service {
                status: 500,
                body: "oops".into(),
            },
            GenerationError::MalformedResponse("eof".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), PARSE_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::LastSlide.to_string(),
            "Cannot delete the last slide."
        );
        assert_eq!(
            ValidationError::MissingInput.to_string(),
            "Please enter a topic or upload a file."
        );
    }

    #[test]
    fn test_wraps_into_top_level() {
        let err: Error = ValidationError::LastSlide.into();
        assert!(matches!(err, Error::Validation(ValidationError::LastSlide)));
        assert_eq!(err.to_string(), "Cannot delete the last slide.");
    }
}
