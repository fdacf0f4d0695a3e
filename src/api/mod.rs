//! ElevenLabs API types and the service trait
//!
//! The `TtsService` trait is the seam between orchestration and the network:
//! everything above it (catalog cache, voice selection, the speaker) is
//! exercised in tests against an in-memory implementation.

pub mod client;

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use client::ElevenLabsClient;

/// A named synthetic speaker profile provided by the TTS service
///
/// Fetched from the API and cached verbatim to disk; read-only after fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,

    /// Provider-assigned labels; gender lives under the `"gender"` key
    /// with values `"male"` or `"female"`
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Voice {
    /// Gender label, if the provider assigned one
    pub fn gender(&self) -> Option<&str> {
        self.labels.get("gender").map(String::as_str)
    }
}

/// A TTS synthesis engine version/variant identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub model_id: String,
}

/// Text-to-speech service operations
///
/// Implemented by `ElevenLabsClient` for production and by in-memory fakes
/// in tests.
pub trait TtsService {
    /// List the voices available to this account
    fn voices(&self) -> Result<Vec<Voice>>;

    /// List the available synthesis models
    fn models(&self) -> Result<Vec<Model>>;

    /// Synthesize `text` with the given voice and model, returning MP3 bytes
    fn synthesize(&self, voice_id: &str, text: &str, model_id: &str) -> Result<Vec<u8>>;
}
