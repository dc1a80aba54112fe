//! Block level helpers that are not part of the compressor.

mod bc1_decode;
pub use bc1_decode::*;
