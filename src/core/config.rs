//! Configuration management

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{Result, VisionError};
use crate::core::models::{OutputMode, TargetLanguage, DEFAULT_LANGUAGES};

/// Default vision service address
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Port assumed for a bare host with no scheme, as Ollama does
pub const DEFAULT_PORT: u16 = 11434;

/// Default vision model
pub const DEFAULT_MODEL: &str = "llava";

/// Prefix for environment overrides, e.g. `VISION_TRANSLATOR_MODEL`
const ENV_PREFIX: &str = "VISION_TRANSLATOR";

/// Optional config file, looked up in the working directory
const CONFIG_FILE: &str = "vision-translator";

/// Configuration for the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Vision service base URL, without trailing slash
    pub endpoint: String,
    /// Model used for recognition and translation
    pub model: String,
    /// Target languages, in output column order
    pub languages: Vec<TargetLanguage>,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout_ms: Option<u64>,
    /// Translation calls in flight at once; 1 means strictly sequential
    pub max_concurrent: usize,
    /// How results are rendered
    pub mode: OutputMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            languages: DEFAULT_LANGUAGES.to_vec(),
            timeout_ms: None,
            max_concurrent: 1,
            mode: OutputMode::Table,
        }
    }
}

/// Flat settings as read from file and environment
#[derive(Debug, Deserialize)]
struct RawSettings {
    endpoint: String,
    model: String,
    languages: String,
    timeout_ms: Option<u64>,
    max_concurrent: usize,
    mode: String,
}

impl PipelineConfig {
    /// Load configuration from defaults, optional config file and environment
    pub fn load() -> Result<Self> {
        let endpoint = std::env::var("OLLAMA_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .map(|h| normalize_endpoint(&h))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let settings = config::Config::builder()
            .set_default("endpoint", endpoint)?
            .set_default("model", DEFAULT_MODEL)?
            .set_default("languages", "zh,ja,ko")?
            .set_default("max_concurrent", 1)?
            .set_default("mode", "table")?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let raw: RawSettings = settings.try_deserialize()?;
        debug!("Loaded settings: {:?}", raw);

        Ok(Self {
            endpoint: normalize_endpoint(&raw.endpoint),
            model: raw.model,
            languages: TargetLanguage::parse_list(&raw.languages)?,
            timeout_ms: raw.timeout_ms,
            max_concurrent: raw.max_concurrent,
            mode: raw.mode.parse()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(config_error("endpoint is required"));
        }

        if self.model.trim().is_empty() {
            return Err(config_error("model is required"));
        }

        if self.languages.is_empty() {
            return Err(config_error("at least one target language is required"));
        }

        if self.max_concurrent == 0 {
            return Err(config_error("max_concurrent must be greater than 0"));
        }

        Ok(())
    }

    /// URL of the generation endpoint
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }

    /// URL of the model listing endpoint
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.endpoint)
    }
}

fn config_error(message: &str) -> VisionError {
    VisionError::ConfigError {
        message: message.to_string(),
    }
}

/// Drop trailing slashes and complete bare `host[:port]` values.
///
/// Values with a scheme are kept as given. A bare host gets `http://` and,
/// when it names no port, [`DEFAULT_PORT`].
pub fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if endpoint.is_empty() || endpoint.contains("://") {
        return endpoint.to_string();
    }

    let (authority, path) = match endpoint.find('/') {
        Some(idx) => endpoint.split_at(idx),
        None => (endpoint, ""),
    };

    // `[::1]:8080` style hosts carry colons inside the brackets
    let has_port = match authority.rfind(']') {
        Some(bracket) => authority[bracket..].contains(':'),
        None => authority.contains(':'),
    };

    if has_port {
        format!("http://{}{}", authority, path)
    } else {
        format!("http://{}:{}{}", authority, DEFAULT_PORT, path)
    }
}
