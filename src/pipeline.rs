//! Acquire → recognize → parse → translate, end to end

use indicatif::ProgressBar;
use std::sync::Arc;
use tracing::info;

use crate::core::client::{build_http_client, VisionClient};
use crate::core::config::PipelineConfig;
use crate::core::errors::{Result, VisionError};
use crate::core::models::TranslationRecord;
use crate::processors::acquire::{ImageAcquirer, ImageSource};
use crate::processors::objects::{list_lines, parse_objects};
use crate::processors::recognition::Recognizer;
use crate::processors::translation::ObjectTranslator;

/// The full recognition and translation pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    acquirer: ImageAcquirer,
    recognizer: Recognizer,
    translator: ObjectTranslator,
}

impl Pipeline {
    /// Build every stage over one shared HTTP client
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let http = build_http_client(&config)?;
        let client = VisionClient::new(http.clone(), Arc::new(config));

        Ok(Self {
            acquirer: ImageAcquirer::new(http),
            recognizer: Recognizer::new(client.clone()),
            translator: ObjectTranslator::new(client),
        })
    }

    /// Acquire the image and return the raw recognition text
    pub async fn recognize(&self, input: &str) -> Result<String> {
        let image = self.acquirer.acquire(&ImageSource::parse(input)).await?;
        self.recognizer.recognize(&image).await
    }

    /// Recognize objects and translate each into every configured language
    pub async fn run(&self, input: &str, progress: &ProgressBar) -> Result<Vec<TranslationRecord>> {
        let raw = self.recognize(input).await?;

        let objects = parse_objects(&raw);
        if objects.is_empty() {
            return Err(VisionError::EmptyRecognitionError);
        }
        info!("Recognized {} objects: {}", objects.len(), objects.join(", "));

        Ok(self.translator.translate_all(&objects, progress).await)
    }

    /// Recognize objects and list them in Japanese with readings
    pub async fn run_furigana(&self, input: &str) -> Result<Vec<String>> {
        let raw = self.recognize(input).await?;
        if raw.trim().is_empty() {
            return Err(VisionError::EmptyRecognitionError);
        }

        let japanese = self.translator.translate_furigana_list(&raw).await?;
        Ok(list_lines(&japanese))
    }
}
