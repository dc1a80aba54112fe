//! Block level helpers that are not part of the compressor.

mod bc3_decode;
pub use bc3_decode::*;
