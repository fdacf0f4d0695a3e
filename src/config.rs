//! Configuration management
//!
//! All settings come from the process environment, optionally seeded from a
//! `.env` file in the working directory. Nothing is written back.

use crate::{Result, SayError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the API credential
const API_KEY_VAR: &str = "ELEVENLABS_API_KEY";

/// Environment variable overriding the cache root
const CACHE_HOME_VAR: &str = "XDG_CACHE_HOME";

/// Environment variable overriding the fallback voice
const DEFAULT_VOICE_VAR: &str = "DEFAULT_VOICE_NAME";

/// Voice used when no selector is given and the override is unset
const DEFAULT_VOICE_NAME: &str = "Sarah";

/// Application configuration
///
/// Holds the API key, the fallback voice name, and the cache directory.
/// The cache directory (and its `audio/` subdirectory) is created on load.
pub struct Config {
    /// API key for the TTS service, if set
    api_key: Option<String>,

    /// Voice name used when no `--voice` argument is given
    default_voice: String,

    /// Cache root: `$XDG_CACHE_HOME/elevenlabs` or the platform cache dir
    cache_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads a `.env` file first if one exists, so local overrides work the
    /// same way as exported variables.
    pub fn load() -> Result<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {:?}", path),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(SayError::Config(format!("Failed to read .env: {}", e))),
        }

        let api_key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty());
        let default_voice =
            std::env::var(DEFAULT_VOICE_VAR).unwrap_or_else(|_| DEFAULT_VOICE_NAME.to_string());

        let cache_dir = Self::cache_dir_path();
        fs::create_dir_all(cache_dir.join("audio"))?;
        debug!("Cache directory: {:?}", cache_dir);

        Ok(Self {
            api_key,
            default_voice,
            cache_dir,
        })
    }

    /// Resolve the cache root
    ///
    /// `$XDG_CACHE_HOME` wins when set; otherwise the platform cache
    /// directory (`~/.cache` on Linux), falling back to the current
    /// directory if even that is unavailable.
    fn cache_dir_path() -> PathBuf {
        let root = std::env::var(CACHE_HOME_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::cache_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        root.join("elevenlabs")
    }

    /// API key, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Fallback voice name
    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    /// Cache directory for catalogs and audio
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
