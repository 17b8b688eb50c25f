//! RFC 4648 base16 (uppercase hex). Two symbols per byte, no padding.

use crate::core::alphabet::{Alphabet, BASE16};

pub use super::errors::DecodeError;

const ALPHABET: &Alphabet = &BASE16;

/// Encoded length for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    len * 2
}

pub fn encode(data: &[u8]) -> String {
    let mut result = String::with_capacity(encoded_len(data.len()));

    for &byte in data {
        result.push(ALPHABET.symbol((byte >> 4) as usize));
        result.push(ALPHABET.symbol((byte & 0x0F) as usize));
    }

    result
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    DecodeError::check_length(encoded, ALPHABET)?;

    let bytes = encoded.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() / 2);

    for (pair_index, pair) in bytes.chunks_exact(2).enumerate() {
        let offset = pair_index * 2;
        let high = digit(encoded, pair[0], offset)?;
        let low = digit(encoded, pair[1], offset + 1)?;
        result.push((high << 4) | low);
    }

    Ok(result)
}

#[inline]
fn digit(encoded: &str, byte: u8, offset: usize) -> Result<u8, DecodeError> {
    ALPHABET
        .value(byte)
        .ok_or_else(|| DecodeError::invalid_character_at(encoded, offset, ALPHABET))
}
