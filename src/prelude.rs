//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use rfc_basenc::prelude::*;
//!
//! let encoded = encode(b"Hello", Codec::Base32);
//! assert_eq!(decode(&encoded, Codec::Base32).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Core encoding/decoding
    Codec,
    CodecNotFoundError,
    // Config
    CodecRegistry,
    DecodeError,
    decode,
    encode,
};
