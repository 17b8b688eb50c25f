use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_codec, write_output},
    global::GlobalArgs,
};
use rfc_basenc::{Alphabet, Codec, CodecRegistry, DecodeError};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(registry, args.codec.as_deref())?;
    let input = read_input(args.file.as_ref(), global, registry)?;

    let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    let text = if args.ignore_garbage {
        strip_garbage(&text, codec.alphabet())
    } else {
        join_lines(&text)
    };

    let data = decode_text(&text, codec)?;
    write_output(args.output.as_ref(), &data)
}

/// Decodes cleaned-up stream text. A stream with nothing but whitespace is
/// what `encode` prints for empty input, so it decodes to nothing.
fn decode_text(text: &str, codec: Codec) -> Result<Vec<u8>, DecodeError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    codec.decode(text)
}

/// Removes line breaks and the whitespace around each line, so wrapped
/// output decodes as one block sequence.
fn join_lines(text: &str) -> String {
    text.lines().map(str::trim).collect()
}

/// Keeps only alphabet symbols and the pad character.
fn strip_garbage(text: &str, alphabet: &Alphabet) -> String {
    text.chars()
        .filter(|c| c.is_ascii() && alphabet.is_encoding_char(*c as u8))
        .collect()
}
