//! Voice selection
//!
//! Maps the `--voice` argument onto concrete voices from the catalog.
//! `Any` and the gender selectors pick at random, `All` yields every voice
//! in catalog order, and a literal name is matched by case-insensitive
//! substring with the configured default as fallback.

use crate::api::Voice;
use crate::{Result, SayError};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Reserved selector names, offered alongside the live voice list
pub const RESERVED_SELECTORS: [&str; 4] = ["Any", "Male", "Female", "All"];

/// What the user asked for on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceSelector {
    /// Uniform random over the whole catalog
    Any,
    /// Random over voices labeled with this gender
    Gender(GenderLabel),
    /// Every voice, sequentially
    All,
    /// A literal voice name (substring match)
    Named(String),
    /// No argument given; use the configured default name
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderLabel {
    Male,
    Female,
}

impl GenderLabel {
    /// Label value as it appears in the provider's voice metadata
    fn as_label(&self) -> &'static str {
        match self {
            GenderLabel::Male => "male",
            GenderLabel::Female => "female",
        }
    }
}

/// Result of resolving a selector against the catalog
#[derive(Debug)]
pub enum Selection<'a> {
    /// Speak with this one voice
    One(&'a Voice),
    /// Speak with every voice in catalog order
    Every(&'a [Voice]),
}

impl VoiceSelector {
    /// Interpret the raw `--voice` argument
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => VoiceSelector::Default,
            Some("Any") => VoiceSelector::Any,
            Some("Male") => VoiceSelector::Gender(GenderLabel::Male),
            Some("Female") => VoiceSelector::Gender(GenderLabel::Female),
            Some("All") => VoiceSelector::All,
            Some(name) => VoiceSelector::Named(name.to_string()),
        }
    }

    /// Resolve against the known voices
    ///
    /// Fails when the catalog is empty or nothing matches; never panics.
    pub fn resolve<'a, R: Rng>(
        &self,
        voices: &'a [Voice],
        default_name: &str,
        rng: &mut R,
    ) -> Result<Selection<'a>> {
        if voices.is_empty() {
            return Err(SayError::Voice("No voices available".to_string()));
        }

        match self {
            VoiceSelector::All => Ok(Selection::Every(voices)),

            VoiceSelector::Any => {
                // Catalog is non-empty, so choose cannot return None
                let voice = voices.choose(rng).ok_or_else(|| {
                    SayError::Voice("No voices available".to_string())
                })?;
                Ok(Selection::One(voice))
            }

            VoiceSelector::Gender(gender) => {
                let matching: Vec<&Voice> = voices
                    .iter()
                    .filter(|v| v.gender() == Some(gender.as_label()))
                    .collect();
                debug!("{} voices labeled {}", matching.len(), gender.as_label());

                matching
                    .choose(rng)
                    .copied()
                    .map(Selection::One)
                    .ok_or_else(|| {
                        SayError::Voice(format!("No voices labeled {}", gender.as_label()))
                    })
            }

            VoiceSelector::Named(name) => find_by_name(voices, name)
                .or_else(|| find_by_name(voices, default_name))
                .map(Selection::One)
                .ok_or_else(|| {
                    SayError::Voice(format!(
                        "No voice matching '{}' (default '{}' not found either)",
                        name, default_name
                    ))
                }),

            VoiceSelector::Default => find_by_name(voices, default_name)
                .map(Selection::One)
                .ok_or_else(|| {
                    SayError::Voice(format!("Default voice '{}' not found", default_name))
                }),
        }
    }
}

/// Case-insensitive substring match against voice names
///
/// An exact match wins over a substring match so "Sarah" never picks up
/// "Sarah 2" when both exist.
fn find_by_name<'a>(voices: &'a [Voice], name: &str) -> Option<&'a Voice> {
    let needle = name.to_lowercase();

    voices
        .iter()
        .find(|v| v.name.to_lowercase() == needle)
        .or_else(|| voices.iter().find(|v| v.name.to_lowercase().contains(&needle)))
}
