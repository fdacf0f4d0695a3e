//! say main entry point
//!
//! One run per invocation: load config, fetch-or-load the voice and model
//! catalogs, parse arguments against the live voice list, resolve the
//! requested voice, then speak (from cache when possible).

use log::{debug, error, warn};
use say::api::ElevenLabsClient;
use say::cache::{self, AudioCache};
use say::cli;
use say::config::Config;
use say::playback::RodioPlayer;
use say::speak::Speaker;
use say::voice::{Selection, VoiceSelector};
use say::Result;
use std::process;

fn main() {
    // The voice list has to be fetched before clap can enumerate the
    // --voice choices, so the debug flag is scanned from the raw
    // arguments first to get logging configured up front
    let debug_mode = cli::debug_flag_present(std::env::args().skip(1));

    let level = if debug_mode {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;

    let api_key = match config.api_key() {
        Some(key) => key.to_string(),
        None => {
            warn!("ELEVENLABS_API_KEY is not set; API calls will fail");
            String::new()
        }
    };
    let client = ElevenLabsClient::new(api_key)?;

    // Catalog caches degrade to empty lists on API failure; an empty
    // voice list surfaces as a selection error further down
    let voices = cache::load_voices(&client, config.cache_dir())?;
    let voice_names: Vec<String> = voices.iter().map(|v| v.name.clone()).collect();

    let args = cli::parse(&voice_names);

    let models = cache::load_models(&client, config.cache_dir())?;
    let model_id = cache::preferred_model_id(&models);
    debug!("Using model: {}", model_id);

    let audio_cache = AudioCache::open(config.cache_dir())?;
    let player = RodioPlayer::new();
    let speaker = Speaker::new(&client, audio_cache, &player, model_id);

    let selector = VoiceSelector::from_arg(args.voice.as_deref());
    let mut rng = rand::thread_rng();

    match selector.resolve(&voices, config.default_voice(), &mut rng)? {
        Selection::One(voice) => speaker.say(voice, &args.text),
        Selection::Every(all) => speaker.say_all(all, &args.text),
    }
}
