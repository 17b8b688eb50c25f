//! RFC 4648 base32. Five input bytes become eight symbols; a short final
//! group is completed with `=`.

use crate::core::alphabet::{Alphabet, BASE32, PAD};

pub use super::errors::DecodeError;

const ALPHABET: &Alphabet = &BASE32;
const BITS: u32 = 5;
const MASK: u64 = 0x1F;
const BLOCK_BYTES: usize = 5;
const BLOCK_SIZE: usize = 8;

/// Encoded length for `len` input bytes, padding included.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_BYTES) * BLOCK_SIZE
}

pub fn encode(data: &[u8]) -> String {
    let mut result = String::with_capacity(encoded_len(data.len()));

    for chunk in data.chunks(BLOCK_BYTES) {
        let mut bit_buffer = 0u64;
        let mut bits_in_buffer = 0u32;

        for &byte in chunk {
            bit_buffer = (bit_buffer << 8) | byte as u64;
            bits_in_buffer += 8;
        }

        while bits_in_buffer >= BITS {
            bits_in_buffer -= BITS;
            let index = (bit_buffer >> bits_in_buffer) & MASK;
            result.push(ALPHABET.symbol(index as usize));
        }

        // Short final chunk: left-align the leftover bits into one more symbol
        if bits_in_buffer > 0 {
            let index = (bit_buffer << (BITS - bits_in_buffer)) & MASK;
            result.push(ALPHABET.symbol(index as usize));
        }
    }

    while result.len() % BLOCK_SIZE != 0 {
        result.push(PAD as char);
    }

    result
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    DecodeError::check_length(encoded, ALPHABET)?;

    let bytes = encoded.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() / BLOCK_SIZE * BLOCK_BYTES);

    for (block_index, block) in bytes.chunks_exact(BLOCK_SIZE).enumerate() {
        let offset = block_index * BLOCK_SIZE;
        let mut bit_buffer = 0u64;
        let mut bits_in_buffer = 0u32;

        for (i, &byte) in block.iter().enumerate() {
            // The first pad ends the meaningful symbols of this block
            if byte == PAD {
                break;
            }

            let value = ALPHABET
                .value(byte)
                .ok_or_else(|| DecodeError::invalid_character_at(encoded, offset + i, ALPHABET))?;

            bit_buffer = (bit_buffer << BITS) | value as u64;
            bits_in_buffer += BITS;
        }

        while bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    Ok(result)
}
