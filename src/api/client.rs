//! Blocking HTTP client for the ElevenLabs API

use super::{Model, TtsService, Voice};
use crate::{Result, SayError};
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Per-request timeout; synthesis of long text can take a while
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// ElevenLabs REST client
///
/// Authenticates with the `xi-api-key` header. All calls are synchronous
/// and blocking; there is no connection reuse requirement beyond what
/// reqwest provides by default.
pub struct ElevenLabsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Wrapper for the `GET /voices` response
#[derive(Deserialize)]
struct VoicesResponse {
    voices: Vec<Voice>,
}

/// Body for `POST /text-to-speech/{voice_id}`
#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Check the response status, turning non-2xx into an API error
    /// carrying whatever body the server sent back
    fn check(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(SayError::Api(format!("HTTP {}: {}", status, body)))
    }
}

impl TtsService for ElevenLabsClient {
    fn voices(&self) -> Result<Vec<Voice>> {
        let url = format!("{}/voices", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .send()?;

        let parsed: VoicesResponse = Self::check(response)?.json()?;
        Ok(parsed.voices)
    }

    fn models(&self) -> Result<Vec<Model>> {
        let url = format!("{}/models", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .send()?;

        let models: Vec<Model> = Self::check(response)?.json()?;
        Ok(models)
    }

    fn synthesize(&self, voice_id: &str, text: &str, model_id: &str) -> Result<Vec<u8>> {
        let url = format!("{}/text-to-speech/{}", self.base_url, voice_id);
        debug!("POST {} (model {})", url, model_id);

        let body = SynthesisRequest { text, model_id };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&body)
            .send()?;

        let bytes = Self::check(response)?.bytes()?;
        Ok(bytes.to_vec())
    }
}
