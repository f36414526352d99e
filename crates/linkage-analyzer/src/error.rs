//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can occur while loading or applying a lexicon
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Lexicon failed validation
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(e: toml::de::Error) -> Self {
        AnalyzerError::TomlParse(e.to_string())
    }
}

impl From<toml::ser::Error> for AnalyzerError {
    fn from(e: toml::ser::Error) -> Self {
        AnalyzerError::TomlSerialize(e.to_string())
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::JsonParse(e.to_string())
    }
}
