//! Domain types for representing a slide deck.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A single slide: title, bullet lines and speaker notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide heading.
    pub title: String,

    /// Bullet lines in display order. Never absent, possibly empty.
    pub content: Vec<String>,

    /// Speaker narration for this slide.
    pub notes: String,
}

impl Slide {
    /// Create a slide from its parts.
    pub fn new(
        title: impl Into<String>,
        content: impl IntoIterator<Item = impl Into<String>>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into_iter().map(Into::into).collect(),
            notes: notes.into(),
        }
    }

    /// The slide inserted by "add slide".
    pub fn placeholder() -> Self {
        Self::new("New Slide", ["Add your content here."], "")
    }

    /// Bullets as editable text, one per line.
    pub fn content_text(&self) -> String {
        self.content.join("\n")
    }

    /// Replace the bullets from editor text. Every line becomes a bullet,
    /// blank lines included.
    pub fn set_content_text(&mut self, text: &str) {
        self.content = text.split('\n').map(str::to_string).collect();
    }
}

/// An ordered sequence of slides plus the current selection.
///
/// `current` is always a valid index while the deck is non-empty, and 0
/// when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
    current: usize,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck holding `slides`, selection on the first.
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides, current: 0 }
    }

    /// All slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Consume the deck, returning its slides.
    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the selected slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The selected slide, if the deck is non-empty.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Replace every slide and reset the selection to 0.
    pub fn replace_all(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        self.current = 0;
    }

    /// Replace the slide at `index`.
    pub fn update_at(&mut self, index: usize, slide: Slide) -> Result<(), ValidationError> {
        let len = self.slides.len();
        let target = self
            .slides
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfRange { index, len })?;
        *target = slide;
        Ok(())
    }

    /// Insert a placeholder slide right after `index` and select it.
    ///
    /// On an empty deck the placeholder becomes the only slide. An index past
    /// the end is treated as the last slide.
    pub fn insert_after(&mut self, index: usize) -> usize {
        let position = if self.slides.is_empty() {
            0
        } else {
            index.min(self.slides.len() - 1) + 1
        };
        self.slides.insert(position, Slide::placeholder());
        self.current = position;
        position
    }

    /// Remove the slide at `index`. Refused when it is the only slide.
    pub fn delete_at(&mut self, index: usize) -> Result<Slide, ValidationError> {
        let len = self.slides.len();
        if len == 1 {
            return Err(ValidationError::LastSlide);
        }
        if index >= len {
            return Err(ValidationError::IndexOutOfRange { index, len });
        }
        let removed = self.slides.remove(index);
        self.current = index.saturating_sub(1);
        Ok(removed)
    }

    /// Move the selection to `index`.
    pub fn select(&mut self, index: usize) -> Result<(), ValidationError> {
        if index >= self.slides.len() {
            return Err(ValidationError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Drop every slide.
    pub fn reset(&mut self) {
        self.slides.clear();
        self.current = 0;
    }
}
