//! Voice and model catalog cache
//!
//! Fetch-or-load: an existing cache file is deserialized and returned;
//! otherwise the API is called and the result persisted. A fetch failure is
//! logged and degrades to an empty list rather than aborting the run, and
//! an unreadable cache file is treated as a miss.

use crate::api::{Model, TtsService, Voice};
use crate::Result;
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Cache file for the voice list
const VOICES_FILE: &str = "voices.json";

/// Cache file for the model list
const MODELS_FILE: &str = "models.json";

/// Model used when the API offers nothing
const FALLBACK_MODEL_ID: &str = "eleven_flash_v2_5";

/// Substring marking the fast model family
const PREFERRED_MODEL_MARKER: &str = "flash";

/// Load the voice list from cache, fetching and persisting on a miss
///
/// An API failure yields an empty list; callers are expected to handle
/// having no voices gracefully.
pub fn load_voices(service: &dyn TtsService, cache_dir: &Path) -> Result<Vec<Voice>> {
    let voices = fetch_or_load(cache_dir.join(VOICES_FILE), "voices", || service.voices())?;
    debug!(
        "Voices: {:?}",
        voices.iter().map(|v| v.name.as_str()).collect::<Vec<_>>()
    );
    Ok(voices)
}

/// Load the model list from cache, fetching and persisting on a miss
pub fn load_models(service: &dyn TtsService, cache_dir: &Path) -> Result<Vec<Model>> {
    let models = fetch_or_load(cache_dir.join(MODELS_FILE), "models", || service.models())?;
    info!("Found {} models", models.len());
    Ok(models)
}

/// Pick the model to synthesize with
///
/// Prefers the first model whose id mentions the fast family, then the
/// first model at all, then a hardcoded default.
pub fn preferred_model_id(models: &[Model]) -> String {
    let flash: Vec<&Model> = models
        .iter()
        .filter(|m| m.model_id.contains(PREFERRED_MODEL_MARKER))
        .collect();
    info!("Found {} flash models", flash.len());

    flash
        .first()
        .copied()
        .or_else(|| models.first())
        .map(|m| m.model_id.clone())
        .unwrap_or_else(|| FALLBACK_MODEL_ID.to_string())
}

/// Generic fetch-or-load over a JSON cache file
///
/// The fetch result is persisted even when it degraded to empty, matching
/// the no-refresh cache policy: a bad day at the API is cached too, and
/// clearing it is a manual operation.
fn fetch_or_load<T, F>(path: std::path::PathBuf, what: &str, fetch: F) -> Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Result<Vec<T>>,
{
    if path.is_file() {
        debug!("Loading {} from cache: {:?}", what, path);
        match read_json(&path) {
            Ok(items) => return Ok(items),
            Err(e) => warn!("Ignoring unreadable {} cache {:?}: {}", what, path, e),
        }
    }

    debug!("Fetching {} from API", what);
    let items = match fetch() {
        Ok(items) => items,
        Err(e) => {
            error!("Failed to fetch {}: {}", what, e);
            Vec::new()
        }
    };

    write_json(&path, &items)?;
    Ok(items)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn write_json<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let data = serde_json::to_string(items)?;
    fs::write(path, data)?;
    Ok(())
}
