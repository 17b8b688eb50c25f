use crate::cli::{
    args::{ConfigAction, ConfigCategory},
    config::resolve_codec,
    global::GlobalArgs,
};
use rfc_basenc::{Codec, CodecRegistry};

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { category, json } => handle_list(category, json, registry),
        ConfigAction::Show { codec } => handle_show(&codec, registry),
    }
}

/// Built-in aliases followed by any configured ones not already listed.
fn aliases_for(codec: Codec, registry: &CodecRegistry) -> Vec<String> {
    let mut aliases: Vec<String> = codec.aliases().map(str::to_string).collect();
    if let Some(entry) = registry.get_codec(codec) {
        for alias in &entry.aliases {
            if !aliases.contains(alias) {
                aliases.push(alias.clone());
            }
        }
    }
    aliases
}

fn handle_list(
    category: Option<ConfigCategory>,
    json: bool,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec_list: Vec<&str> = Codec::ALL.iter().map(|c| c.as_str()).collect();
    let alias_list: Vec<String> = Codec::ALL
        .iter()
        .flat_map(|&c| aliases_for(c, registry))
        .collect();

    if json {
        let output = match category {
            Some(ConfigCategory::Codecs) => serde_json::json!({ "codecs": codec_list }),
            Some(ConfigCategory::Aliases) => serde_json::json!({ "aliases": alias_list }),
            None => {
                let codecs: Vec<_> = Codec::ALL
                    .iter()
                    .map(|&codec| {
                        let alphabet = codec.alphabet();
                        serde_json::json!({
                            "name": codec.as_str(),
                            "base": alphabet.base(),
                            "block_size": alphabet.block_size(),
                            "padding": alphabet.padding().map(|p| (p as char).to_string()),
                            "aliases": aliases_for(codec, registry),
                            "wrap": registry.wrap_for(codec),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "codecs": codecs,
                    "default_codec": registry.settings.default_codec,
                })
            }
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match category {
        Some(ConfigCategory::Codecs) => println!("{}", codec_list.join(",")),
        Some(ConfigCategory::Aliases) => println!("{}", alias_list.join(",")),
        None => {
            println!("Available codecs:\n");
            for codec in Codec::ALL {
                let alphabet = codec.alphabet();
                let padding = alphabet
                    .padding()
                    .map_or_else(|| "none".to_string(), |p| (p as char).to_string());
                println!(
                    "  {:<8} base-{:<3} block {:<2} pad {:<5} aliases: {}",
                    codec.as_str(),
                    alphabet.base(),
                    alphabet.block_size(),
                    padding,
                    aliases_for(codec, registry).join(", ")
                );
            }
            println!("\nUse 'config list codecs|aliases' for machine-readable output");
            println!("Use --json for structured output");
        }
    }

    Ok(())
}

fn handle_show(name: &str, registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(registry, Some(name))?;
    let alphabet = codec.alphabet();

    println!("Codec: {}", codec);
    if let Some(entry) = registry.get_codec(codec)
        && !entry.description.is_empty()
    {
        println!("  Description: {}", entry.description);
    }
    println!("  Base: {}", alphabet.base());
    println!("  Bits per symbol: {}", alphabet.bits_per_symbol());
    println!(
        "  Block: {} symbols per {} bytes",
        alphabet.block_size(),
        alphabet.block_bytes()
    );
    println!(
        "  Alphabet: {}",
        alphabet.symbols().iter().map(|&b| b as char).collect::<String>()
    );
    match alphabet.padding() {
        Some(pad) => println!("  Padding: {}", pad as char),
        None => println!("  Padding: none"),
    }
    println!("  Aliases: {}", aliases_for(codec, registry).join(", "));
    println!("  Wrap: {}", registry.wrap_for(codec));

    Ok(())
}
