//! On-disk caches
//!
//! Two flavors live under the cache directory:
//! - `catalog`: fetch-or-load JSON snapshots of the voice and model lists
//! - `audio`: content-addressed MP3 clips keyed by (voice, text)
//!
//! Neither cache expires or evicts; a stale entry is permanent until the
//! file is deleted by hand (or, for audio, after a playback failure).

pub mod audio;
pub mod catalog;

pub use audio::AudioCache;
pub use catalog::{load_models, load_voices, preferred_model_id};
