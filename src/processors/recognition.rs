//! Object recognition through the vision model

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, info};

use crate::core::client::VisionClient;
use crate::core::errors::{Result, VisionError};
use crate::core::models::{GenerateRequest, ImageFile};

/// Instruction sent with every image
pub const RECOGNITION_PROMPT: &str = "Please identify the main objects in this image. \
    List ONLY the object names in English, separated by commas. \
    Example format: apple, cat, keyboard. \
    Do not include any explanations, sentences, or extra text.";

/// Asks the vision model which objects an image contains
#[derive(Debug, Clone)]
pub struct Recognizer {
    client: VisionClient,
}

impl Recognizer {
    /// Create a recognizer over the service client
    pub fn new(client: VisionClient) -> Self {
        Self { client }
    }

    /// Fail unless the configured model shows up in the service's model listing
    pub async fn ensure_model_available(&self) -> Result<()> {
        let model = &self.client.config().model;

        let tags = self
            .client
            .list_models()
            .await
            .map_err(|e| VisionError::ModelListingError {
                message: e.to_string(),
            })?;

        if !tags.contains_model(model) {
            return Err(VisionError::ModelUnavailableError {
                model: model.clone(),
            });
        }

        debug!("Model {} is available", model);
        Ok(())
    }

    /// Recognize objects in an image, returning the model's trimmed answer
    pub async fn recognize(&self, image: &ImageFile) -> Result<String> {
        self.ensure_model_available().await?;

        let bytes = tokio::fs::read(&image.path)
            .await
            .map_err(|e| VisionError::RecognitionError {
                message: format!("cannot read {}: {}", image.path.display(), e),
            })?;

        info!(
            "Recognizing objects in {} ({} bytes)",
            image.path.display(),
            bytes.len()
        );

        let request = GenerateRequest::new(&self.client.config().model, RECOGNITION_PROMPT)
            .with_image(BASE64.encode(&bytes));

        let text = self
            .client
            .generate(&request)
            .await
            .map_err(|e| VisionError::RecognitionError {
                message: e.to_string(),
            })?;

        debug!("Recognition result: {}", text);
        Ok(text)
    }
}
