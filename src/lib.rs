//! RFC 4648 base16, base32 and base64 codecs.
//!
//! Every codec pairs a compile-time alphabet with a 256-entry reverse
//! lookup table held in a `static`, so encoding and decoding share no
//! mutable state and are safe to call from any number of threads.
//!
//! ```
//! use rfc_basenc::{Codec, decode, encode};
//!
//! assert_eq!(encode(b"Hi", Codec::Base64), "SGk=");
//! assert_eq!(decode("MY======", Codec::Base32).unwrap(), b"f");
//! ```

mod codec;
mod core;
mod encoders;

pub mod prelude;

pub use codec::Codec;
pub use crate::core::alphabet::{Alphabet, BASE16, BASE32, BASE64, INVALID, PAD, build_reverse_table};
pub use crate::core::config::{CodecConfig, CodecRegistry, Settings};
pub use encoders::algorithms::{CodecNotFoundError, DecodeError, find_closest_codec};
pub use encoders::{base16, base32, base64};

/// Encodes `data` with the given codec. Never fails.
pub fn encode(data: &[u8], codec: Codec) -> String {
    codec.encode(data)
}

/// Decodes `encoded` with the given codec.
///
/// Fails with [`DecodeError::InvalidLength`] for empty input or a length
/// that is not a whole number of blocks, and with
/// [`DecodeError::InvalidCharacter`] for anything outside the alphabet and
/// its pad character.
pub fn decode(encoded: &str, codec: Codec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(encoded)
}

#[cfg(test)]
mod tests;
