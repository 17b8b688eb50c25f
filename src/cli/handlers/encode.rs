use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_codec, write_output},
    global::GlobalArgs,
};
use rfc_basenc::CodecRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(registry, args.codec.as_deref())?;
    let data = read_input(args.file.as_ref(), global, registry)?;

    let encoded = codec.encode(&data);
    let width = args.wrap.unwrap_or_else(|| registry.wrap_for(codec));

    let mut text = wrap_lines(&encoded, width);
    text.push('\n');

    write_output(args.output.as_ref(), text.as_bytes())
}

/// Breaks `encoded` into lines of at most `width` characters (0 = no wrapping).
fn wrap_lines(encoded: &str, width: usize) -> String {
    if width == 0 || encoded.len() <= width {
        return encoded.to_string();
    }

    // Encoded text is pure ASCII, so byte chunks are character chunks
    encoded
        .as_bytes()
        .chunks(width)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines() {
        assert_eq!(wrap_lines("ABCDEFGH", 0), "ABCDEFGH");
        assert_eq!(wrap_lines("ABCDEFGH", 8), "ABCDEFGH");
        assert_eq!(wrap_lines("ABCDEFGH", 3), "ABC\nDEF\nGH");
        assert_eq!(wrap_lines("", 4), "");
    }
}
