//! Slide generation with a single in-flight request.

use crate::client::ContentModel;
use deck_core::{build_prompt, parse_slides, response_schema, GenerationError, GenerationInput, Slide};
use serde_json::Value;
use std::path::Path;
use tokio::sync::Semaphore;

/// Turns a topic or file into validated slides through a [`ContentModel`].
///
/// Only one request may be outstanding at a time; a second call while one
/// is running fails with [`GenerationError::Busy`].
pub struct SlideGenerator<M> {
    model: M,
    schema: Value,
    slot: Semaphore,
}

impl<M: ContentModel> SlideGenerator<M> {
    /// Wrap `model` with an idle request slot.
    pub fn new(model: M) -> Self {
        Self {
            model,
            schema: response_schema(),
            slot: Semaphore::new(1),
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }

    /// The underlying model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Generate slides for `input`. An empty vector means the model
    /// produced nothing usable.
    pub async fn generate(&self, input: &GenerationInput) -> Result<Vec<Slide>, GenerationError> {
        let _permit = self.slot.try_acquire().map_err(|_| {
            log::warn!("Rejected generation for '{}': request in flight", input.label());
            GenerationError::Busy
        })?;

        let prompt = build_prompt(input);
        log::debug!("Generating slides for '{}'", input.label());

        let raw = self.model.generate(&prompt, &self.schema).await?;
        let slides = parse_slides(&raw)?;

        log::info!(
            "Generated {} slides for '{}'",
            slides.len(),
            input.label()
        );
        Ok(slides)
    }

    /// Generate slides about `topic`.
    pub async fn generate_from_topic(&self, topic: &str) -> Result<Vec<Slide>, GenerationError> {
        self.generate(&GenerationInput::Topic(topic.to_string()))
            .await
    }

    /// Read `path` as UTF-8 text and generate slides summarizing it.
    pub async fn generate_from_file(&self, path: &Path) -> Result<Vec<Slide>, GenerationError> {
        let (name, text) = read_source_file(path).await?;
        self.generate(&GenerationInput::File { name, text }).await
    }
}

/// Read a source text file, returning `(file name, text)`.
pub async fn read_source_file(path: &Path) -> Result<(String, String), GenerationError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| GenerationError::FileRead(format!("{}: {}", path.display(), e)))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    Ok((name, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    /// Replies with a fixed response and records the prompts it saw.
    struct ScriptedModel {
        reply: Result<String, GenerationError>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: GenerationError) -> Self {
            Self {
                reply: Err(err),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ContentModel for ScriptedModel {
        async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, GenerationError> {
            assert_eq!(schema["type"], "ARRAY");
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    /// Blocks until released, then replies with one slide.
    struct GatedModel {
        gate: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ContentModel for GatedModel {
        async fn generate(&self, _prompt: &str, _schema: &Value) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(r#"[{"title":"Done","content":[],"notes":""}]"#.to_string())
        }
    }

    const SIX_SLIDES: &str = r#"[
        {"title":"Intro","content":["What is photosynthesis?"],"notes":"Welcome the audience"},
        {"title":"Light","content":["Photons"],"notes":""},
        {"title":"Water","content":["Roots"],"notes":""},
        {"title":"Sugar","content":["Glucose"],"notes":""},
        {"title":"Oxygen","content":["Byproduct"],"notes":""},
        {"title":"Conclusion","content":["Recap"],"notes":"Thank the audience"}
    ]"#;

    #[tokio::test]
    async fn test_topic_generation() {
        let generator = SlideGenerator::new(ScriptedModel::replying(SIX_SLIDES));
        let slides = generator.generate_from_topic("Photosynthesis").await.unwrap();

        assert_eq!(slides.len(), 6);
        assert_eq!(slides[0].title, "Intro");
        assert_eq!(slides[5].notes, "Thank the audience");

        let prompts = generator.model().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Topic: \"Photosynthesis\""));
    }

    #[tokio::test]
    async fn test_empty_array_is_not_an_error() {
        let generator = SlideGenerator::new(ScriptedModel::replying("[]"));
        assert!(generator.generate_from_topic("x").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let generator = SlideGenerator::new(ScriptedModel::replying("not json"));
        let err = generator.generate_from_topic("x").await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_service_failure_propagates_and_frees_slot() {
        let generator = SlideGenerator::new(ScriptedModel::failing(GenerationError::Request(
            "connection refused".into(),
        )));
        let err = generator.generate_from_topic("x").await.unwrap_err();
        assert_eq!(err, GenerationError::Request("connection refused".into()));
        assert!(!generator.is_busy());
    }

    #[tokio::test]
    async fn test_file_generation_embeds_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Chlorophyll absorbs light.").unwrap();

        let generator = SlideGenerator::new(ScriptedModel::replying(SIX_SLIDES));
        let slides = generator.generate_from_file(&path).await.unwrap();
        assert_eq!(slides.len(), 6);

        let prompts = generator.model().prompts.lock().unwrap();
        assert!(prompts[0].contains("Chlorophyll absorbs light."));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let generator = SlideGenerator::new(ScriptedModel::replying(SIX_SLIDES));
        let err = generator
            .generate_from_file(Path::new("/definitely/not/here.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::FileRead(_)));
        assert!(generator.model().prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_request_rejected_while_first_in_flight() {
        let gate = Arc::new(Notify::new());
        let generator = Arc::new(SlideGenerator::new(GatedModel {
            gate: gate.clone(),
            calls: AtomicUsize::new(0),
        }));

        let first = {
            let generator = generator.clone();
            tokio::spawn(async move { generator.generate_from_topic("first").await })
        };

        while generator.model().calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(generator.is_busy());

        let second = generator.generate_from_topic("second").await;
        assert_eq!(second, Err(GenerationError::Busy));
        assert_eq!(generator.model().calls.load(Ordering::SeqCst), 1);

        gate.notify_one();
        let slides = first.await.unwrap().unwrap();
        assert_eq!(slides[0].title, "Done");
        assert!(!generator.is_busy());
    }
}
