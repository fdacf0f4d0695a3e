//! Command line parsing
//!
//! The command is built at runtime because the `--voice` choices include
//! the live voice catalog, which is only known after the fetch-or-load
//! step. The `--debug` flag is additionally pre-scanned from the raw
//! arguments so logging can be configured before any of that happens.

use crate::voice::RESERVED_SELECTORS;
use crate::{APP_NAME, VERSION};
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Parsed command line arguments
#[derive(Debug)]
pub struct Args {
    /// Utterance text, words joined with single spaces
    pub text: String,

    /// Raw `--voice` argument, if given
    pub voice: Option<String>,

    /// Enable debug logging
    pub debug: bool,
}

/// Check the raw arguments for the debug flag before clap runs
pub fn debug_flag_present<I: IntoIterator<Item = String>>(args: I) -> bool {
    args.into_iter().any(|a| a == "--debug" || a == "-d")
}

/// Build the clap command with voice choices from the live catalog
pub fn build_command(voice_names: &[String]) -> Command {
    let mut choices: Vec<String> = RESERVED_SELECTORS.iter().map(|s| s.to_string()).collect();
    choices.extend(voice_names.iter().cloned());

    Command::new(APP_NAME)
        .version(VERSION)
        .about("Convert text to audible speech")
        .arg(
            Arg::new("text")
                .help("Text to speak")
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("voice")
                .short('v')
                .long("voice")
                .help("Voice name, or Any/Male/Female/All")
                .value_parser(PossibleValuesParser::new(choices)),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

/// Parse the process arguments against the built command
pub fn parse(voice_names: &[String]) -> Args {
    from_matches(build_command(voice_names).get_matches())
}

fn from_matches(matches: ArgMatches) -> Args {
    let text = matches
        .get_many::<String>("text")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    Args {
        text,
        voice: matches.get_one::<String>("voice").cloned(),
        debug: matches.get_flag("debug"),
    }
}
