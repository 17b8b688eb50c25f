pub mod algorithms;

pub use algorithms::{base16, base32, base64};
