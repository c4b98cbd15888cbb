//! Custom error types for the recognition and translation pipeline

use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum VisionError {
    /// Remote image could not be fetched or stored
    #[error("Failed to download image {url}: {message}")]
    AcquisitionError {
        /// Requested URL
        url: String,
        /// Transport failure or status
        message: String,
    },

    /// Requested model is not installed on the vision service
    #[error("Model {model} not found, install it first: ollama pull {model}")]
    ModelUnavailableError {
        /// Configured model identifier
        model: String,
    },

    /// Model listing call itself failed
    #[error("Failed to list installed models: {message}")]
    ModelListingError {
        /// Underlying failure
        message: String,
    },

    /// Recognition call failed or returned unusable content
    #[error("Recognition failed: {message}")]
    RecognitionError {
        /// Underlying failure
        message: String,
    },

    /// Recognition succeeded but yielded no objects
    #[error("No objects recognized")]
    EmptyRecognitionError,

    /// A single translation call failed
    #[error("Translation to {language} failed for '{text}': {message}")]
    TranslationError {
        /// Text that was being translated
        text: String,
        /// Target language code
        language: String,
        /// Underlying failure
        message: String,
    },

    /// API request failed
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error text
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Offending setting
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<config::ConfigError> for VisionError {
    fn from(err: config::ConfigError) -> Self {
        VisionError::ConfigError {
            message: err.to_string(),
        }
    }
}

impl VisionError {
    /// Map a transport failure onto the matching variant
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            VisionError::TimeoutError
        } else {
            VisionError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, VisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_unavailable_message() {
        let err = VisionError::ModelUnavailableError {
            model: "llava".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Model llava not found, install it first: ollama pull llava"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: VisionError = config::ConfigError::Message("bad value".to_string()).into();
        assert!(matches!(err, VisionError::ConfigError { .. }));
        assert!(err.to_string().contains("bad value"));
    }
}
