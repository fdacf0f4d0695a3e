//! Local audio playback
//!
//! A thin seam over rodio so the orchestration layer can be tested with a
//! fake player. The production implementation opens the default output
//! device per clip and blocks until the sink drains.

use crate::{Result, SayError};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Plays cached audio clips
pub trait Player {
    /// Play the clip at `path` to completion
    fn play(&self, path: &Path) -> Result<()>;
}

/// rodio-backed player for the default output device
pub struct RodioPlayer;

impl RodioPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RodioPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        debug!("Playing audio from {:?}", path);

        let file = File::open(path)?;

        // The stream must stay alive for the duration of playback
        let (_stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| SayError::Playback(format!("No audio output device: {}", e)))?;
        let sink = rodio::Sink::try_new(&handle)
            .map_err(|e| SayError::Playback(format!("Failed to open audio sink: {}", e)))?;

        let source = rodio::Decoder::new(BufReader::new(file))
            .map_err(|e| SayError::Playback(format!("Failed to decode {:?}: {}", path, e)))?;

        sink.append(source);
        sink.sleep_until_end();

        Ok(())
    }
}
