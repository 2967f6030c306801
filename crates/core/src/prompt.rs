//! Prompt construction and the declared response contract.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// What the user asked a deck to be generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationInput {
    /// A free-text topic.
    Topic(String),
    /// Decoded text of an uploaded file.
    File { name: String, text: String },
}

impl GenerationInput {
    /// Apply the input form's submit rule: a file takes precedence over the
    /// topic, and at least one of them must be present.
    pub fn from_form(
        topic: &str,
        file: Option<(String, String)>,
    ) -> Result<Self, ValidationError> {
        match file {
            Some((name, text)) => Ok(GenerationInput::File { name, text }),
            None if topic.is_empty() => Err(ValidationError::MissingInput),
            None => Ok(GenerationInput::Topic(topic.to_string())),
        }
    }

    /// Short label for logs and summaries.
    pub fn label(&self) -> &str {
        match self {
            GenerationInput::Topic(topic) => topic,
            GenerationInput::File { name, .. } => name,
        }
    }
}

/// Build the natural-language instruction sent to the model.
pub fn build_prompt(input: &GenerationInput) -> String {
    match input {
        GenerationInput::Topic(topic) => format!(
            "You are an expert presentation creator. Based on the following topic, create a compelling presentation.\n\
             Topic: \"{}\"\n\
             \n\
             Generate a JSON array of slide objects.\n\
             Create between 5 and 10 slides, covering an introduction, key points, and a conclusion.\n\
             Ensure the content is well-structured and flows logically.\n",
            topic
        ),
        GenerationInput::File { text, .. } => format!(
            "You are an expert presentation creator. You will be given text content to summarize into a presentation.\n\
             Content:\n\
             ---\n\
             {}\n\
             ---\n\
             Based on the text above, create a compelling presentation.\n\
             Generate a JSON array of slide objects.\n\
             Create a logical number of slides to effectively summarize the content, including an introduction, key points, and a conclusion.\n",
            text
        ),
    }
}

/// Schema constraining the model's output to an array of
/// `{title, content[], notes}` objects, all fields required.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "A concise and engaging title for the slide."
                },
                "content": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "An array of strings, where each string is a key takeaway or bullet point. Keep points brief."
                },
                "notes": {
                    "type": "STRING",
                    "description": "Detailed speaker notes for the presenter for this slide."
                }
            },
            "required": ["title", "content", "notes"]
        }
    })
}
