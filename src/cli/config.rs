use rfc_basenc::{Codec, CodecRegistry};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Used when neither the command line nor the config sets a limit.
const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

/// Loads the codec registry honouring `--config`, then validates it.
pub fn load_registry(global: &GlobalArgs) -> Result<CodecRegistry, Box<dyn std::error::Error>> {
    let registry = match &global.config {
        Some(path) => {
            let mut registry = CodecRegistry::load_default()?;
            registry.merge(CodecRegistry::load_from_file(path)?);
            registry
        }
        None => CodecRegistry::load_with_overrides()?,
    };
    registry.validate()?;
    Ok(registry)
}

/// Resolves the codec named on the command line, falling back to the
/// configured default.
pub fn resolve_codec(
    registry: &CodecRegistry,
    name: Option<&str>,
) -> Result<Codec, Box<dyn std::error::Error>> {
    match name {
        Some(name) => registry.resolve(name),
        None => registry.default_codec()?.ok_or_else(|| {
            "No codec given and no default_codec configured. Name one of: base16, base32, base64"
                .into()
        }),
    }
}

/// Prints a warning to stderr unless `--quiet` is set.
pub fn warn(global: &GlobalArgs, message: &str) {
    if global.quiet {
        return;
    }
    if use_color() {
        eprintln!("\x1b[1;33mwarning:\x1b[0m {}", message);
    } else {
        eprintln!("warning: {}", message);
    }
}

fn use_color() -> bool {
    use std::io::IsTerminal;
    std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
}

/// Reads FILE or stdin, enforcing the input size limit.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let max_size = global
        .max_size
        .or(registry.settings.max_size)
        .unwrap_or(DEFAULT_MAX_SIZE);

    if let Some(file_path) = file {
        if max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > max_size {
                if !global.force {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, max_size
                    )
                    .into());
                }
                warn(
                    global,
                    &format!(
                        "processing large file ({} bytes, limit: {} bytes)",
                        file_size, max_size
                    ),
                );
            }
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if max_size > 0 && buffer.len() > max_size {
        if !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                max_size
            )
            .into());
        }
        warn(
            global,
            &format!(
                "processing large input ({} bytes, limit: {} bytes)",
                buffer.len(),
                max_size
            ),
        );
    }

    Ok(buffer)
}

/// Writes to the output file, or stdout when none is given.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
