//! Generative-AI boundary: turns a topic or text file into slides via the
//! Gemini API.

pub mod client;
pub mod config;
pub mod generator;

pub use client::{ContentModel, GeminiClient};
pub use config::GenaiConfig;
pub use generator::{read_source_file, SlideGenerator};
