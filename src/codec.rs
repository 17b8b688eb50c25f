use std::fmt;
use std::str::FromStr;

use crate::core::alphabet::{Alphabet, BASE16, BASE32, BASE64};
use crate::encoders::algorithms::{CodecNotFoundError, DecodeError, find_closest_codec};
use crate::encoders::{base16, base32, base64};

/// Supported RFC 4648 codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Base16,
    Base32,
    Base64,
}

/// Accepted spellings, canonical name first.
const NAMES: &[(&str, Codec)] = &[
    ("base16", Codec::Base16),
    ("hex", Codec::Base16),
    ("b16", Codec::Base16),
    ("base32", Codec::Base32),
    ("b32", Codec::Base32),
    ("base64", Codec::Base64),
    ("b64", Codec::Base64),
];

impl Codec {
    pub const ALL: [Codec; 3] = [Codec::Base16, Codec::Base32, Codec::Base64];

    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::Base16 => "base16",
            Codec::Base32 => "base32",
            Codec::Base64 => "base64",
        }
    }

    /// Built-in aliases for this codec (not including the canonical name).
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        NAMES
            .iter()
            .filter(move |(name, codec)| codec == self && *name != self.as_str())
            .map(|(name, _)| *name)
    }

    /// The codec's alphabet and reverse table.
    pub fn alphabet(&self) -> &'static Alphabet {
        match self {
            Codec::Base16 => &BASE16,
            Codec::Base32 => &BASE32,
            Codec::Base64 => &BASE64,
        }
    }

    pub fn encode(&self, data: &[u8]) -> String {
        match self {
            Codec::Base16 => base16::encode(data),
            Codec::Base32 => base32::encode(data),
            Codec::Base64 => base64::encode(data),
        }
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        match self {
            Codec::Base16 => base16::decode(encoded),
            Codec::Base32 => base32::decode(encoded),
            Codec::Base64 => base64::decode(encoded),
        }
    }

    /// Exact encoded length for `len` input bytes.
    pub fn encoded_len(&self, len: usize) -> usize {
        match self {
            Codec::Base16 => base16::encoded_len(len),
            Codec::Base32 => base32::encoded_len(len),
            Codec::Base64 => base64::encoded_len(len),
        }
    }
}

impl FromStr for Codec {
    type Err = CodecNotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        if let Some((_, codec)) = NAMES.iter().find(|(name, _)| *name == lowered) {
            return Ok(*codec);
        }

        let known: Vec<&str> = NAMES.iter().map(|(name, _)| *name).collect();
        let suggestion = find_closest_codec(&lowered, &known);
        Err(CodecNotFoundError::new(s, suggestion))
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
