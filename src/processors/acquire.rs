//! Resolving the CLI input to a local image file

use reqwest::Url;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::errors::{Result, VisionError};
use crate::core::models::ImageFile;

/// Extension used when the URL path carries none
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Where the image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Filesystem path, passed through as-is
    Local(PathBuf),
    /// `http://` or `https://` URL to download
    Remote(String),
}

impl ImageSource {
    /// Classify raw CLI input by its scheme prefix
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            ImageSource::Remote(input.to_string())
        } else {
            ImageSource::Local(PathBuf::from(input))
        }
    }
}

/// File extension from the last path segment of a URL, ignoring the query
pub fn extension_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            let segment = parsed.path_segments()?.last()?.to_string();
            Path::new(&segment)
                .extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext| !ext.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Downloads remote images and passes local paths through
#[derive(Debug, Clone)]
pub struct ImageAcquirer {
    client: reqwest::Client,
}

impl ImageAcquirer {
    /// Create an acquirer sharing the pipeline's HTTP client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Resolve a source to a local file. Local paths are not checked here.
    pub async fn acquire(&self, source: &ImageSource) -> Result<ImageFile> {
        match source {
            ImageSource::Local(path) => {
                debug!("Using local image: {}", path.display());
                Ok(ImageFile { path: path.clone() })
            }
            ImageSource::Remote(url) => self.download(url).await,
        }
    }

    /// Fetch once into a fresh temporary directory that outlives the run
    async fn download(&self, url: &str) -> Result<ImageFile> {
        let acquisition_error = |message: String| VisionError::AcquisitionError {
            url: url.to_string(),
            message,
        };

        info!("Downloading image: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| acquisition_error(VisionError::from_transport(e).to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(acquisition_error(format!(
                "HTTP status code: {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| acquisition_error(e.to_string()))?;

        let dir = tempfile::Builder::new()
            .prefix("vision-translator-")
            .tempdir()
            .map_err(|e| acquisition_error(e.to_string()))?
            .keep();

        let path = dir.join(format!("downloaded_image.{}", extension_from_url(url)));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| acquisition_error(e.to_string()))?;

        debug!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(ImageFile { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_classification() {
        assert_eq!(
            ImageSource::parse("https://example.com/a.png"),
            ImageSource::Remote("https://example.com/a.png".to_string())
        );
        assert_eq!(
            ImageSource::parse("http://example.com/a.png"),
            ImageSource::Remote("http://example.com/a.png".to_string())
        );
        assert_eq!(
            ImageSource::parse("photos/http_cat.jpg"),
            ImageSource::Local(PathBuf::from("photos/http_cat.jpg"))
        );
        assert_eq!(
            ImageSource::parse("ftp://example.com/a.png"),
            ImageSource::Local(PathBuf::from("ftp://example.com/a.png"))
        );
    }

    #[test]
    fn test_extension_from_url() {
        assert_eq!(extension_from_url("https://example.com/cat.png"), "png");
        assert_eq!(extension_from_url("https://example.com/a/b/cat.webp?w=200&h=1.5"), "webp");
        assert_eq!(extension_from_url("https://example.com/photo"), "jpg");
        assert_eq!(extension_from_url("https://example.com/"), "jpg");
        assert_eq!(extension_from_url("https://cdn.example.com/img?name=a.gif"), "jpg");
    }

    #[tokio::test]
    async fn test_local_path_passes_through_unchecked() {
        let acquirer = ImageAcquirer::new(reqwest::Client::new());
        let source = ImageSource::parse("/definitely/missing.png");
        let image = acquirer.acquire(&source).await.unwrap();
        assert_eq!(image.path, PathBuf::from("/definitely/missing.png"));
    }

    #[tokio::test]
    async fn test_unreachable_url_is_acquisition_error() {
        let acquirer = ImageAcquirer::new(reqwest::Client::new());
        let source = ImageSource::parse("http://127.0.0.1:9/cat.png");
        let result = acquirer.acquire(&source).await;
        assert!(matches!(result, Err(VisionError::AcquisitionError { .. })));
    }
}
