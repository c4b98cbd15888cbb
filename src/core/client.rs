//! HTTP client for the local vision service

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::config::PipelineConfig;
use crate::core::errors::{Result, VisionError};
use crate::core::models::{GenerateRequest, GenerateResponse, TagsResponse};

/// Build the shared HTTP client, applying the configured timeout if any
pub fn build_http_client(config: &PipelineConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .pool_max_idle_per_host(10);

    if let Some(timeout_ms) = config.timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }

    Ok(builder.build()?)
}

/// Client for the generate and model-listing endpoints
#[derive(Debug, Clone)]
pub struct VisionClient {
    client: reqwest::Client,
    config: Arc<PipelineConfig>,
}

impl VisionClient {
    /// Create a new client
    pub fn new(client: reqwest::Client, config: Arc<PipelineConfig>) -> Self {
        Self { client, config }
    }

    /// Create from configuration, building its own HTTP client
    pub fn from_config(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let client = build_http_client(&config)?;
        Ok(Self::new(client, Arc::new(config)))
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// List installed models
    pub async fn list_models(&self) -> Result<TagsResponse> {
        let url = self.config.tags_url();
        debug!("Listing models: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(VisionError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(VisionError::ApiError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| VisionError::InvalidResponseError {
                message: e.to_string(),
            })
    }

    /// Send one non-streaming generate request and return the raw answer text
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        debug!(
            "Generate request: model={}, images={}",
            request.model,
            request.images.as_ref().map_or(0, Vec::len)
        );

        let response = self
            .client
            .post(self.config.generate_url())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(VisionError::from_transport)?;

        let status = response.status();

        if status.is_success() {
            let body: GenerateResponse =
                response
                    .json()
                    .await
                    .map_err(|e| VisionError::InvalidResponseError {
                        message: e.to_string(),
                    })?;

            body.response
                .map(|text| text.trim().to_string())
                .ok_or_else(|| VisionError::InvalidResponseError {
                    message: "No response field in body".to_string(),
                })
        } else {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            Err(VisionError::ApiError {
                status: status_code,
                message: error_text,
            })
        }
    }
}
