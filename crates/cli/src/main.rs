//! CLI tool for generating, editing and exporting AI slide decks.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Generate slide decks with AI, then edit, theme and export them.
#[derive(Parser, Debug)]
#[command(name = "deckgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a deck from a topic or a text file
    Generate(GenerateArgs),

    /// List the available themes
    Themes,

    /// Print the slides of a saved deck
    Show {
        /// Deck JSON file
        deck: PathBuf,
    },

    /// Insert a new slide after the given index
    Add {
        /// Deck JSON file
        deck: PathBuf,

        /// Index of the slide to insert after (0-based)
        #[arg(short, long, default_value = "0")]
        after: usize,
    },

    /// Delete the slide at the given index
    Delete {
        /// Deck JSON file
        deck: PathBuf,

        /// Index of the slide to delete (0-based)
        #[arg(short, long)]
        index: usize,
    },

    /// Change the title, bullets or notes of a slide
    Edit(EditArgs),

    /// Export a saved deck
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Topic to build the presentation around
    #[arg(short, long)]
    topic: Option<String>,

    /// Text file (.txt) to summarize into a presentation; wins over --topic
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Theme name (see `deckgen themes`)
    #[arg(long, default_value = "Professional")]
    theme: String,

    /// Output file (default depends on format)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EditArgs {
    /// Deck JSON file
    deck: PathBuf,

    /// Index of the slide to edit (0-based)
    #[arg(short, long)]
    index: usize,

    /// New title
    #[arg(long)]
    title: Option<String>,

    /// New bullets, one per line
    #[arg(long)]
    content: Option<String>,

    /// New speaker notes
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Deck JSON file
    deck: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Pptx)]
    format: Format,

    /// Theme name (see `deckgen themes`)
    #[arg(long, default_value = "Professional")]
    theme: String,

    /// Output file (default depends on format)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Export formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// JSON array of slides
    Json,
    /// PowerPoint document
    Pptx,
    /// Printable HTML (print to PDF from a browser)
    Print,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command {
        Command::Generate(args) => commands::generate(args).await,
        Command::Themes => commands::themes(),
        Command::Show { deck } => commands::show(&deck),
        Command::Add { deck, after } => commands::add(&deck, after),
        Command::Delete { deck, index } => commands::delete(&deck, index),
        Command::Edit(args) => commands::edit(args),
        Command::Export(args) => commands::export(args),
    }
}
