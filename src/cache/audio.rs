//! Content-addressed audio cache
//!
//! Each clip is stored under `<cache dir>/audio/<sha256 hex>.mp3`, where the
//! hash covers `"{voice name}:{text}"`. The key is deterministic, so an
//! identical request on a later run replays the same file without touching
//! the synthesis API.

use crate::Result;
use log::debug;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory holding cached clips
const AUDIO_SUBDIR: &str = "audio";

/// Extension for cached clips; the API returns MP3
const AUDIO_EXT: &str = "mp3";

/// Audio clip store keyed by (voice name, text)
pub struct AudioCache {
    dir: PathBuf,
}

impl AudioCache {
    /// Open the cache under `cache_dir`, creating the audio directory
    pub fn open(cache_dir: &Path) -> Result<Self> {
        let dir = cache_dir.join(AUDIO_SUBDIR);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Cache key for a (voice name, text) pair: lowercase hex SHA-256 of
    /// `"{voice}:{text}"`
    pub fn key(voice_name: &str, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(voice_name.as_bytes());
        hasher.update(b":");
        hasher.update(text.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Path of the clip for a (voice name, text) pair
    pub fn path_for(&self, voice_name: &str, text: &str) -> PathBuf {
        self.dir
            .join(Self::key(voice_name, text))
            .with_extension(AUDIO_EXT)
    }

    /// Does a clip for this pair already exist?
    pub fn contains(&self, voice_name: &str, text: &str) -> bool {
        self.path_for(voice_name, text).is_file()
    }

    /// Persist synthesized audio, returning the clip path
    pub fn store(&self, voice_name: &str, text: &str, audio: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(voice_name, text);
        fs::write(&path, audio)?;
        debug!("Cached {} bytes at {:?}", audio.len(), path);
        Ok(path)
    }

    /// Remove a suspect clip, e.g. after it failed to play
    ///
    /// Removing an already-missing file is not an error.
    pub fn evict(&self, path: &Path) -> Result<()> {
        debug!("Removing cached audio file {:?}", path);
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        let a = AudioCache::key("Sarah", "hello world");
        let b = AudioCache::key("Sarah", "hello world");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_key_depends_on_voice_and_text() {
        let base = AudioCache::key("Sarah", "hello");
        assert_ne!(base, AudioCache::key("George", "hello"));
        assert_ne!(base, AudioCache::key("Sarah", "goodbye"));
    }

    #[test]
    fn test_store_then_contains() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = AudioCache::open(tmp.path()).unwrap();

        assert!(!cache.contains("Sarah", "hi"));
        let path = cache.store("Sarah", "hi", b"mp3data").unwrap();
        assert!(cache.contains("Sarah", "hi"));
        assert_eq!(path.extension().unwrap(), "mp3");

        cache.evict(&path).unwrap();
        assert!(!cache.contains("Sarah", "hi"));
        // Evicting again is a no-op
        cache.evict(&path).unwrap();
    }
}
