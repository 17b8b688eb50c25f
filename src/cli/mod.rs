mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};

use args::{CheckArgs, ConfigAction, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "rfc-basenc")]
#[command(version)]
#[command(about = "Encode and decode data with the RFC 4648 base16, base32 and base64 codecs", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data to text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// Inspect available codecs and settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Round-trip sample text through every codec
    Check(CheckArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Unsafe: environment variable access (not thread-safe)
        // Runs before anything else has been spawned.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &registry),
        Commands::Check(args) => handlers::check::handle(args, &cli.global),
    }
}
