use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Codec to encode with (base16/hex, base32, base64) [default: from config]
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Wrap encoded lines after COLS characters (0 disables wrapping)
    #[arg(short = 'w', long, value_name = "COLS")]
    pub wrap: Option<usize>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Codec to decode from (base16/hex, base32, base64) [default: from config]
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Drop every character outside the codec's alphabet before decoding
    #[arg(short = 'i', long)]
    pub ignore_garbage: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the round-trip self-check
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Text to round-trip (defaults to a multi-script sample)
    pub text: Option<String>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available codecs
    List {
        /// What to list: codecs, aliases
        #[arg(value_name = "TYPE")]
        category: Option<ConfigCategory>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific codec
    Show {
        /// Codec name or alias
        codec: String,
    },
}

/// Categories for config list command
#[derive(Clone, ValueEnum, Debug)]
pub enum ConfigCategory {
    Codecs,
    Aliases,
}
