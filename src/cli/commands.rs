//! CLI argument definitions and handler

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::info;

use crate::core::config::{normalize_endpoint, PipelineConfig};
use crate::core::models::{OutputMode, TargetLanguage};
use crate::pipeline::Pipeline;
use crate::processors::report::render_records;

/// Vision Translator - name the objects in an image in several languages
#[derive(Parser, Debug)]
#[command(name = "vision-translator", version, about, long_about = None)]
pub struct Args {
    /// Image path or URL
    pub input: String,

    /// Vision model to use (default: llava)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Vision service address (default: http://localhost:11434)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Comma-separated target languages, e.g. zh,ja,ko
    #[arg(short, long)]
    pub languages: Option<String>,

    /// Per-request timeout in milliseconds (default: none)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Maximum concurrent translation requests (default: 1)
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Output mode: table or furigana
    #[arg(long)]
    pub mode: Option<OutputMode>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Layer CLI flags over the loaded configuration
    pub fn apply(&self, mut config: PipelineConfig) -> anyhow::Result<PipelineConfig> {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = normalize_endpoint(endpoint);
        }
        if let Some(languages) = &self.languages {
            config.languages = TargetLanguage::parse_list(languages)?;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = Some(timeout_ms);
        }
        if let Some(max_concurrent) = self.max_concurrent {
            config.max_concurrent = max_concurrent;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run the pipeline and print its result lines to stdout
pub async fn handle_run(args: Args) -> anyhow::Result<()> {
    let config = args.apply(PipelineConfig::load()?)?;
    let start_time = Instant::now();

    info!("Input: {}", args.input);
    info!("Model: {}", config.model);
    info!("Endpoint: {}", config.endpoint);
    info!("Mode: {}", config.mode);

    let mode = config.mode;
    let pipeline = Pipeline::new(config)?;

    match mode {
        OutputMode::Table => {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                    .progress_chars("=>-"),
            );

            let records = pipeline.run(&args.input, &pb).await;
            pb.finish_and_clear();

            print!("{}", render_records(&records?));
        }
        OutputMode::Furigana => {
            for line in pipeline.run_furigana(&args.input).await? {
                println!("{}", line);
            }
        }
    }

    info!("Completed in {:?}", start_time.elapsed());
    Ok(())
}
