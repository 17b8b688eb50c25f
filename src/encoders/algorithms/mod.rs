pub mod base16;
pub mod base32;
pub mod base64;
pub mod errors;

// Re-export error types for public API
pub use errors::{CodecNotFoundError, DecodeError, find_closest_codec};
