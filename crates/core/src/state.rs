//! Application state and its transitions.
//!
//! Every transition takes the current state by reference and returns the
//! next one. Refused actions return a [`ValidationError`] and leave the
//! caller's state as it was.

use crate::error::{GenerationError, ValidationError};
use crate::prompt::GenerationInput;
use crate::theme::Theme;
use crate::types::{Deck, Slide};

/// Shown when the model answered with no usable slides.
pub const NO_SLIDES_MESSAGE: &str =
    "The AI could not generate slides for this topic. Please try being more specific.";

/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Awaiting a topic or file.
    #[default]
    Input,
    /// Editing a generated deck.
    Editor,
}

/// Everything the front end renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: View,
    pub deck: Deck,
    pub theme: Theme,
    /// A generation request is in flight.
    pub loading: bool,
    /// Inline error for the input view.
    pub error: Option<String>,
    /// The last submitted input, kept for resubmission after a failure.
    pub last_input: Option<GenerationInput>,
}

impl AppState {
    /// Fresh state on the input view with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the editor directly on an existing deck.
    pub fn with_slides(slides: Vec<Slide>) -> Self {
        Self {
            view: View::Editor,
            deck: Deck::from_slides(slides),
            ..Self::default()
        }
    }

    /// Validate a form submission and mark the request as loading.
    ///
    /// `file` is `(file name, decoded text)`.
    pub fn apply_submit(
        &self,
        topic: &str,
        file: Option<(String, String)>,
    ) -> Result<(AppState, GenerationInput), ValidationError> {
        let input = GenerationInput::from_form(topic, file)?;
        let next = AppState {
            loading: true,
            error: None,
            last_input: Some(input.clone()),
            ..self.clone()
        };
        Ok((next, input))
    }

    /// Fold a generation result into the state.
    pub fn apply_generate(&self, result: Result<Vec<Slide>, GenerationError>) -> AppState {
        let mut next = AppState {
            loading: false,
            ..self.clone()
        };
        match result {
            Ok(slides) if !slides.is_empty() => {
                log::info!("Loaded {} generated slides", slides.len());
                next.deck.replace_all(slides);
                next.view = View::Editor;
                next.error = None;
            }
            Ok(_) => {
                next.error = Some(NO_SLIDES_MESSAGE.to_string());
                next.view = View::Input;
            }
            Err(err) => {
                log::warn!("Generation failed: {}", err);
                next.error = Some(format!(
                    "An error occurred while generating slides: {}",
                    err.user_message()
                ));
                next.view = View::Input;
            }
        }
        next
    }

    /// Replace the selected slide.
    pub fn apply_update(&self, slide: Slide) -> Result<AppState, ValidationError> {
        let mut next = self.clone();
        next.deck.update_at(self.deck.current(), slide)?;
        Ok(next)
    }

    /// Replace the slide at `index`.
    pub fn apply_update_at(&self, index: usize, slide: Slide) -> Result<AppState, ValidationError> {
        let mut next = self.clone();
        next.deck.update_at(index, slide)?;
        Ok(next)
    }

    /// Insert a placeholder after the selected slide.
    pub fn apply_insert(&self) -> AppState {
        self.apply_insert_after(self.deck.current())
    }

    /// Insert a placeholder after `index` and select it.
    pub fn apply_insert_after(&self, index: usize) -> AppState {
        let mut next = self.clone();
        next.deck.insert_after(index);
        next
    }

    /// Delete the selected slide.
    pub fn apply_delete(&self) -> Result<AppState, ValidationError> {
        self.apply_delete_at(self.deck.current())
    }

    /// Delete the slide at `index`; refused when it is the last one.
    pub fn apply_delete_at(&self, index: usize) -> Result<AppState, ValidationError> {
        let mut next = self.clone();
        next.deck.delete_at(index)?;
        Ok(next)
    }

    /// Move the selection to `index`.
    pub fn apply_select(&self, index: usize) -> Result<AppState, ValidationError> {
        let mut next = self.clone();
        next.deck.select(index)?;
        Ok(next)
    }

    /// Switch to `theme`.
    pub fn apply_theme(&self, theme: Theme) -> AppState {
        AppState {
            theme,
            ..self.clone()
        }
    }

    /// Back to the input view with an empty deck.
    pub fn apply_reset(&self) -> AppState {
        let mut next = self.clone();
        next.deck.reset();
        next.view = View::Input;
        next.error = None;
        next
    }
}
