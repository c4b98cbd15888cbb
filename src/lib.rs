//! Vision Translator - object recognition and multilingual naming
//!
//! This library sends an image to a local Ollama vision model, parses the
//! objects it names, and translates each object into several languages
//! through the same service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod pipeline;
pub mod processors;

// Re-export key types for convenience
pub use core::{
    client::VisionClient,
    config::PipelineConfig,
    errors::VisionError,
    models::{OutputMode, TargetLanguage, Translation, TranslationRecord},
};

pub use pipeline::Pipeline;

pub use processors::{
    objects::{clean_text, parse_objects},
    report::{format_record, render_records},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
