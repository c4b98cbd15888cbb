//! Per-object translation into the configured target languages

use indicatif::ProgressBar;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::core::client::VisionClient;
use crate::core::errors::{Result, VisionError};
use crate::core::models::{GenerateRequest, TargetLanguage, Translation, TranslationRecord};
use crate::processors::objects::clean_text;

/// Instruction for rendering a whole object list in Japanese with readings
pub const FURIGANA_LIST_PROMPT: &str = "Translate the following English object names into \
    Japanese and add the hiragana reading after each one. \
    Put one object per line in this format:\n\n\
    Japanese word (ひらがな)\n\n\
    For example:\n\n\
    林檎 (りんご)\n\n\
    猫 (ねこ)\n\n\
    Return ONLY the list, no explanations or extra text.\n\n";

/// Translates object names, one request per (object, language) pair
#[derive(Debug, Clone)]
pub struct ObjectTranslator {
    client: VisionClient,
}

impl ObjectTranslator {
    /// Create a translator over the service client
    pub fn new(client: VisionClient) -> Self {
        Self { client }
    }

    /// Translate one word into one language
    pub async fn translate(&self, text: &str, language: TargetLanguage) -> Result<String> {
        let request = GenerateRequest::new(&self.client.config().model, language.prompt(text));

        let translated = self
            .client
            .generate(&request)
            .await
            .map_err(|e| VisionError::TranslationError {
                text: text.to_string(),
                language: language.to_string(),
                message: e.to_string(),
            })?;

        Ok(clean_text(&translated))
    }

    /// Translate one cell, degrading any failure to an empty string
    pub async fn translate_cell(&self, text: &str, language: TargetLanguage) -> String {
        match self.translate(text, language).await {
            Ok(translated) => {
                debug!("{} -> [{}] {}", text, language, translated);
                translated
            }
            Err(e) => {
                warn!("{}", e);
                String::new()
            }
        }
    }

    /// Translate every object into every configured language.
    ///
    /// Records come back in object order with one field per configured
    /// language regardless of how many calls failed.
    pub async fn translate_all(
        &self,
        objects: &[String],
        progress: &ProgressBar,
    ) -> Vec<TranslationRecord> {
        let languages = self.client.config().languages.clone();
        progress.set_length((objects.len() * languages.len()) as u64);

        let grid = if self.client.config().max_concurrent <= 1 {
            self.translate_sequential(objects, &languages, progress).await
        } else {
            self.translate_concurrent(objects, &languages, progress).await
        };

        objects
            .iter()
            .zip(grid)
            .map(|(object, row)| {
                let translations = languages
                    .iter()
                    .zip(row)
                    .map(|(language, text)| Translation {
                        language: *language,
                        text,
                    })
                    .collect();
                TranslationRecord::new(object.clone(), translations)
            })
            .collect()
    }

    async fn translate_sequential(
        &self,
        objects: &[String],
        languages: &[TargetLanguage],
        progress: &ProgressBar,
    ) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(objects.len());

        for object in objects {
            progress.set_message(object.clone());
            let mut row = Vec::with_capacity(languages.len());
            for language in languages {
                row.push(self.translate_cell(object, *language).await);
                progress.inc(1);
            }
            grid.push(row);
        }

        grid
    }

    async fn translate_concurrent(
        &self,
        objects: &[String],
        languages: &[TargetLanguage],
        progress: &ProgressBar,
    ) -> Vec<Vec<String>> {
        let semaphore = Arc::new(Semaphore::new(self.client.config().max_concurrent));
        let mut tasks = JoinSet::new();

        for (object_idx, object) in objects.iter().enumerate() {
            for (language_idx, language) in languages.iter().enumerate() {
                let translator = self.clone();
                let semaphore = semaphore.clone();
                let object = object.clone();
                let language = *language;

                tasks.spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok();
                    let text = translator.translate_cell(&object, language).await;
                    (object_idx, language_idx, text)
                });
            }
        }

        let mut grid = vec![vec![String::new(); languages.len()]; objects.len()];

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((object_idx, language_idx, text)) => {
                    grid[object_idx][language_idx] = text;
                }
                Err(e) => warn!("Translation task failed: {}", e),
            }
            progress.inc(1);
        }

        grid
    }

    /// Render the raw object list as Japanese lines with readings in one call
    pub async fn translate_furigana_list(&self, objects: &str) -> Result<String> {
        let prompt = format!("{}{}", FURIGANA_LIST_PROMPT, objects);
        let request = GenerateRequest::new(&self.client.config().model, prompt);

        self.client
            .generate(&request)
            .await
            .map_err(|e| VisionError::TranslationError {
                text: objects.to_string(),
                language: TargetLanguage::Ja.to_string(),
                message: e.to_string(),
            })
    }
}
