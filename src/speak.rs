//! Utterance orchestration
//!
//! Ties the synthesis service, the audio cache, and the player together.
//! A cache hit replays the stored clip without touching the API; a cache
//! miss synthesizes, persists, then plays. A clip that fails to play is
//! assumed corrupt and evicted so the next run re-synthesizes it.

use crate::api::{TtsService, Voice};
use crate::cache::AudioCache;
use crate::playback::Player;
use crate::{Result, SayError};
use log::{debug, error};

/// Speaks utterances through a synthesis service
pub struct Speaker<'a> {
    service: &'a dyn TtsService,
    cache: AudioCache,
    player: &'a dyn Player,
    model_id: String,
}

impl<'a> Speaker<'a> {
    pub fn new(
        service: &'a dyn TtsService,
        cache: AudioCache,
        player: &'a dyn Player,
        model_id: String,
    ) -> Self {
        Self {
            service,
            cache,
            player,
            model_id,
        }
    }

    /// Speak `text` with `voice`, synthesizing only on a cache miss
    pub fn say(&self, voice: &Voice, text: &str) -> Result<()> {
        debug!("Picking voice: {}", voice.name);

        let path = self.cache.path_for(&voice.name, text);

        if !self.cache.contains(&voice.name, text) {
            debug!("Generating audio");
            let audio = self
                .service
                .synthesize(&voice.voice_id, text, &self.model_id)?;
            self.cache.store(&voice.name, text, &audio)?;
        } else {
            debug!("Playing audio from cache: {:?}", path);
        }

        if let Err(e) = self.player.play(&path) {
            error!("Failed to play audio: {}", e);
            self.cache.evict(&path)?;
            return Err(e);
        }

        Ok(())
    }

    /// Speak `text` once per voice, in catalog order
    ///
    /// Every voice is attempted even when an earlier one fails; the first
    /// failure is reported after the loop finishes.
    pub fn say_all(&self, voices: &[Voice], text: &str) -> Result<()> {
        let mut first_error: Option<SayError> = None;

        for voice in voices {
            debug!("{}", voice.name);
            if let Err(e) = self.say(voice, text) {
                error!("Voice '{}' failed: {}", voice.name, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
