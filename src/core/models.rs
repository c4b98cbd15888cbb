//! Core data models for recognition and translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::errors::VisionError;

/// Target language for object-name translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// Traditional Chinese
    Zh,
    /// Japanese, with hiragana reading
    Ja,
    /// Korean
    Ko,
}

/// Instruction table entry for one target language
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    /// Language this entry describes
    pub language: TargetLanguage,
    /// Short code used on the command line and in output
    pub code: &'static str,
    /// English name used in prompts
    pub name: &'static str,
    /// Prompt with a `{word}` placeholder
    pub template: &'static str,
}

/// Traditional Chinese entry
const ZH: LanguageSpec = LanguageSpec {
    language: TargetLanguage::Zh,
    code: "zh",
    name: "Traditional Chinese",
    template: "Translate the following English word to Traditional Chinese. \
               Return ONLY the translated word, no explanations or extra text.\n\n{word}",
};

/// Japanese entry
const JA: LanguageSpec = LanguageSpec {
    language: TargetLanguage::Ja,
    code: "ja",
    name: "Japanese",
    template: "Translate the following English word to Japanese with hiragana reading. \
               Format: Japanese word (ひらがな). \
               Return ONLY this format, no explanations or extra text.\n\n{word}",
};

/// Korean entry
const KO: LanguageSpec = LanguageSpec {
    language: TargetLanguage::Ko,
    code: "ko",
    name: "Korean",
    template: "Translate the following English word to Korean. \
               Return ONLY the translated word, no explanations or extra text.\n\n{word}",
};

/// Supported languages and their instruction templates
pub const LANGUAGE_TABLE: &[LanguageSpec] = &[ZH, JA, KO];

/// Default column order of the output
pub const DEFAULT_LANGUAGES: &[TargetLanguage] =
    &[TargetLanguage::Zh, TargetLanguage::Ja, TargetLanguage::Ko];

impl TargetLanguage {
    /// Look up this language's table entry
    pub fn spec(&self) -> &'static LanguageSpec {
        match self {
            TargetLanguage::Zh => &ZH,
            TargetLanguage::Ja => &JA,
            TargetLanguage::Ko => &KO,
        }
    }

    /// Short language code
    pub fn code(&self) -> &'static str {
        self.spec().code
    }

    /// Build the translation prompt for a word
    pub fn prompt(&self, word: &str) -> String {
        self.spec().template.replace("{word}", word)
    }

    /// Parse a comma-separated language list, keeping the given order
    pub fn parse_list(list: &str) -> Result<Vec<Self>, VisionError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = VisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-tw" | "chinese" => Ok(TargetLanguage::Zh),
            "ja" | "japanese" => Ok(TargetLanguage::Ja),
            "ko" | "korean" => Ok(TargetLanguage::Ko),
            other => Err(VisionError::ConfigError {
                message: format!("Unsupported target language: {}", other),
            }),
        }
    }
}

/// Output rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One `object | t1 | t2 | ...` line per object
    #[default]
    Table,
    /// Whole object list rendered in Japanese with readings, one per line
    Furigana,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Table => write!(f, "table"),
            OutputMode::Furigana => write!(f, "furigana"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = VisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputMode::Table),
            "furigana" => Ok(OutputMode::Furigana),
            other => Err(VisionError::ConfigError {
                message: format!("Unknown output mode: {}", other),
            }),
        }
    }
}

/// Request body for `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier
    pub model: String,
    /// Instruction text
    pub prompt: String,
    /// Base64-encoded images, recognition calls only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Always false: one complete reply per request
    pub stream: bool,
}

impl GenerateRequest {
    /// Text-only, non-streaming request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            images: None,
            stream: false,
        }
    }

    /// Attach one base64-encoded image
    pub fn with_image(mut self, image_base64: String) -> Self {
        self.images = Some(vec![image_base64]);
        self
    }
}

/// Response body of `POST /api/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Model answer; absent on malformed replies
    pub response: Option<String>,
}

/// Response body of `GET /api/tags`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsResponse {
    /// Installed models
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// One installed model
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    /// Name with tag, e.g. `llava:latest`
    pub name: String,
    /// Model identifier, when the service reports one
    #[serde(default)]
    pub model: Option<String>,
}

impl TagsResponse {
    /// Render the listing as text, one identifier per line
    pub fn listing(&self) -> String {
        self.models
            .iter()
            .flat_map(|m| std::iter::once(m.name.as_str()).chain(m.model.as_deref()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether `model` appears anywhere in the listing
    pub fn contains_model(&self, model: &str) -> bool {
        self.listing().contains(model)
    }
}

/// Local image ready for recognition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Path of the readable image
    pub path: PathBuf,
}

/// One translated cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Target language of this cell
    pub language: TargetLanguage,
    /// Empty when the translation call failed
    pub text: String,
}

/// An object together with its translations, in configured language order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRecord {
    /// Cleaned object name as recognized
    pub object: String,
    /// One cell per configured language
    pub translations: Vec<Translation>,
}

impl TranslationRecord {
    /// Group an object with its translations
    pub fn new(object: impl Into<String>, translations: Vec<Translation>) -> Self {
        Self {
            object: object.into(),
            translations,
        }
    }

    /// Translation for a language, if that language was configured
    pub fn get(&self, language: TargetLanguage) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.language == language)
            .map(|t| t.text.as_str())
    }
}
