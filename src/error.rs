//! Error types for say

use std::io;
use thiserror::Error;

/// Main error type for say
#[derive(Error, Debug)]
pub enum SayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Voice selection error: {0}")]
    Voice(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cache format error: {0}")]
    CacheFormat(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for say operations
pub type Result<T> = std::result::Result<T, SayError>;

impl From<String> for SayError {
    fn from(s: String) -> Self {
        SayError::Other(s)
    }
}

impl From<&str> for SayError {
    fn from(s: &str) -> Self {
        SayError::Other(s.to_string())
    }
}
