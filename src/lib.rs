//! say - cloud text-to-speech from the command line
//!
//! Converts text to audible speech through the ElevenLabs API, caching the
//! voice catalog, the model catalog, and every generated audio clip on disk
//! so repeated utterances never hit the network twice.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod playback;
pub mod speak;
pub mod voice;

pub use error::{Result, SayError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "say";
