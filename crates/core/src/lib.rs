//! Core domain types, prompt contract, response normalization and editor
//! state for AI-generated slide decks.

pub mod error;
pub mod export;
pub mod normalize;
pub mod print;
pub mod prompt;
pub mod state;
pub mod theme;
pub mod types;

pub use error::{Error, GenerationError, Result, ValidationError};
pub use normalize::parse_slides;
pub use prompt::{build_prompt, response_schema, GenerationInput};
pub use state::{AppState, View};
pub use theme::Theme;
pub use types::{Deck, Slide};
