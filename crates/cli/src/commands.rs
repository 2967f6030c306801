//! Command handlers. Each one maps onto an [`AppState`] transition.

use crate::{EditArgs, ExportArgs, Format, GenerateArgs};
use anyhow::{bail, Context, Result};
use deck_core::export::{read_json, write_json, JSON_FILE_NAME};
use deck_core::print::{render_print_html, PRINT_FILE_NAME};
use deck_core::{AppState, Slide, Theme};
use deck_genai::{read_source_file, GeminiClient, SlideGenerator};
use deck_pptx::{PptxWriter, PPTX_FILE_NAME};
use std::path::{Path, PathBuf};

/// Generate a deck and export it.
pub async fn generate(args: GenerateArgs) -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let theme = Theme::by_name(&args.theme)?;
    let client = GeminiClient::from_env().context("Cannot start slide generation")?;
    log::debug!("Using model {}", client.model());
    let generator = SlideGenerator::new(client);

    let file = match &args.file {
        Some(path) => Some(read_source_file(path).await?),
        None => None,
    };

    let state = AppState::new().apply_theme(theme);
    let (state, input) = state.apply_submit(args.topic.as_deref().unwrap_or(""), file)?;

    eprintln!("Generating slides for '{}'...", input.label());
    let result = generator.generate(&input).await;
    let state = state.apply_generate(result);

    if let Some(message) = &state.error {
        bail!("{}", message);
    }

    let path = write_export(state.deck.slides(), &state.theme, args.format, args.output)?;
    println!(
        "Generated {} slides, written to {}",
        state.deck.len(),
        path.display()
    );
    Ok(())
}

/// List preset themes.
pub fn themes() -> Result<()> {
    for theme in Theme::presets() {
        println!(
            "{:<13} bg {}  title {}  text {}  accent {}",
            theme.name, theme.bg, theme.title, theme.text, theme.accent
        );
    }
    Ok(())
}

/// Print a deck.
pub fn show(deck: &Path) -> Result<()> {
    let state = load(deck)?;
    for (i, slide) in state.deck.slides().iter().enumerate() {
        println!("[{}] {}", i, slide.title);
        for point in &slide.content {
            println!("    - {}", point);
        }
        if !slide.notes.is_empty() {
            println!("    notes: {}", slide.notes);
        }
    }
    Ok(())
}

/// Insert a placeholder slide after `after`.
pub fn add(deck: &Path, after: usize) -> Result<()> {
    let state = load(deck)?;
    let state = state.apply_insert_after(after);
    save(deck, &state)?;
    println!(
        "Added slide at index {} ({} slides)",
        state.deck.current(),
        state.deck.len()
    );
    Ok(())
}

/// Delete the slide at `index`.
pub fn delete(deck: &Path, index: usize) -> Result<()> {
    let state = load(deck)?;
    let state = state.apply_delete_at(index)?;
    save(deck, &state)?;
    println!("Deleted slide {} ({} slides left)", index, state.deck.len());
    Ok(())
}

/// Edit fields of one slide.
pub fn edit(args: EditArgs) -> Result<()> {
    let state = load(&args.deck)?;
    let state = state.apply_select(args.index)?;

    let mut slide: Slide = state
        .deck
        .current_slide()
        .cloned()
        .context("Deck has no slides")?;
    if let Some(title) = args.title {
        slide.title = title;
    }
    if let Some(content) = args.content {
        slide.set_content_text(&content);
    }
    if let Some(notes) = args.notes {
        slide.notes = notes;
    }

    let state = state.apply_update(slide)?;
    save(&args.deck, &state)?;
    println!("Updated slide {}", args.index);
    Ok(())
}

/// Export a saved deck.
pub fn export(args: ExportArgs) -> Result<()> {
    let theme = Theme::by_name(&args.theme)?;
    let state = load(&args.deck)?.apply_theme(theme);
    let path = write_export(state.deck.slides(), &state.theme, args.format, args.output)?;
    println!("Exported {} slides to {}", state.deck.len(), path.display());
    Ok(())
}

/// Load a saved deck into the editor. A deck must hold at least one slide.
fn load(path: &Path) -> Result<AppState> {
    let slides =
        read_json(path).with_context(|| format!("Failed to load deck {}", path.display()))?;
    if slides.is_empty() {
        bail!("Deck {} has no slides", path.display());
    }
    Ok(AppState::with_slides(slides))
}

fn save(path: &Path, state: &AppState) -> Result<()> {
    write_json(path, state.deck.slides())
        .with_context(|| format!("Failed to save deck {}", path.display()))
}

/// Write slides in `format`, returning the path written.
fn write_export(
    slides: &[Slide],
    theme: &Theme,
    format: Format,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(match format {
            Format::Json => JSON_FILE_NAME,
            Format::Pptx => PPTX_FILE_NAME,
            Format::Print => PRINT_FILE_NAME,
        })
    });

    match format {
        Format::Json => write_json(&path, slides)?,
        Format::Pptx => {
            let mut writer = PptxWriter::new(theme.clone());
            writer.add_slides(slides.iter().cloned());
            writer.write_to(&path)?;
        }
        Format::Print => {
            let html = render_print_html(slides, theme);
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }

    log::debug!("Wrote {:?} export to {}", format, path.display());
    Ok(path)
}
