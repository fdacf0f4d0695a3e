//! Speaker orchestration tests
//!
//! Exercises the synthesize-or-replay flow against an in-memory service
//! and player, verifying that cache hits skip the API and that playback
//! failures evict the suspect clip.

use say::api::{Model, TtsService, Voice};
use say::cache::AudioCache;
use say::playback::Player;
use say::speak::Speaker;
use say::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Service fake that records every synthesize call
struct RecordingService {
    synthesized: RefCell<Vec<String>>,
}

impl RecordingService {
    fn new() -> Self {
        Self {
            synthesized: RefCell::new(Vec::new()),
        }
    }

    fn synth_count(&self) -> usize {
        self.synthesized.borrow().len()
    }
}

impl TtsService for RecordingService {
    fn voices(&self) -> Result<Vec<Voice>> {
        Ok(Vec::new())
    }

    fn models(&self) -> Result<Vec<Model>> {
        Ok(Vec::new())
    }

    fn synthesize(&self, voice_id: &str, _text: &str, _model_id: &str) -> Result<Vec<u8>> {
        self.synthesized.borrow_mut().push(voice_id.to_string());
        Ok(b"fake mp3 bytes".to_vec())
    }
}

/// Player fake that can be told to fail
struct FakePlayer {
    fail: bool,
    played: RefCell<Vec<PathBuf>>,
}

impl FakePlayer {
    fn ok() -> Self {
        Self {
            fail: false,
            played: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            played: RefCell::new(Vec::new()),
        }
    }
}

impl Player for FakePlayer {
    fn play(&self, path: &Path) -> Result<()> {
        self.played.borrow_mut().push(path.to_path_buf());
        if self.fail {
            Err(say::SayError::Playback("decoder blew up".to_string()))
        } else {
            Ok(())
        }
    }
}

fn voice(name: &str) -> Voice {
    Voice {
        voice_id: format!("id-{}", name.to_lowercase()),
        name: name.to_string(),
        labels: HashMap::new(),
    }
}

#[test]
fn test_cache_miss_synthesizes_then_hit_does_not() {
    let tmp = tempfile::tempdir().unwrap();
    let service = RecordingService::new();
    let player = FakePlayer::ok();
    let cache = AudioCache::open(tmp.path()).unwrap();
    let speaker = Speaker::new(&service, cache, &player, "eleven_flash_v2_5".to_string());

    let sarah = voice("Sarah");

    speaker.say(&sarah, "hello").unwrap();
    assert_eq!(service.synth_count(), 1);

    // Identical request replays the cached clip without touching the API
    speaker.say(&sarah, "hello").unwrap();
    assert_eq!(service.synth_count(), 1);
    assert_eq!(player.played.borrow().len(), 2);

    // Different text is a fresh cache entry
    speaker.say(&sarah, "goodbye").unwrap();
    assert_eq!(service.synth_count(), 2);
}

#[test]
fn test_playback_failure_evicts_cached_file() {
    let tmp = tempfile::tempdir().unwrap();
    let service = RecordingService::new();
    let player = FakePlayer::failing();
    let cache = AudioCache::open(tmp.path()).unwrap();
    let speaker = Speaker::new(&service, cache, &player, "eleven_flash_v2_5".to_string());

    let sarah = voice("Sarah");
    let clip = AudioCache::open(tmp.path())
        .unwrap()
        .path_for(&sarah.name, "hello");

    assert!(speaker.say(&sarah, "hello").is_err());
    assert!(!clip.exists(), "suspect clip should have been removed");
}

#[test]
fn test_say_all_attempts_every_voice() {
    let tmp = tempfile::tempdir().unwrap();
    let service = RecordingService::new();
    let player = FakePlayer::ok();
    let cache = AudioCache::open(tmp.path()).unwrap();
    let speaker = Speaker::new(&service, cache, &player, "eleven_flash_v2_5".to_string());

    let voices = vec![voice("Sarah"), voice("George"), voice("Aria")];

    speaker.say_all(&voices, "hello").unwrap();

    let synthesized = service.synthesized.borrow();
    assert_eq!(
        *synthesized,
        vec!["id-sarah", "id-george", "id-aria"],
        "every voice should be attempted, in catalog order"
    );
}

#[test]
fn test_say_all_keeps_going_after_a_failure_and_reports_it() {
    let tmp = tempfile::tempdir().unwrap();
    let service = RecordingService::new();
    let player = FakePlayer::failing();
    let cache = AudioCache::open(tmp.path()).unwrap();
    let speaker = Speaker::new(&service, cache, &player, "eleven_flash_v2_5".to_string());

    let voices = vec![voice("Sarah"), voice("George")];

    assert!(speaker.say_all(&voices, "hello").is_err());
    // Both voices were still attempted
    assert_eq!(service.synth_count(), 2);
}

#[test]
fn test_cache_key_is_stable_across_runs() {
    // The key must not depend on anything but (voice name, text)
    let key = AudioCache::key("Sarah", "hello world");
    assert_eq!(key, AudioCache::key("Sarah", "hello world"));
    assert_eq!(key.len(), 64);
}
