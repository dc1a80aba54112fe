//! BC5 block decoding.

mod bc5_decode;
mod decoded_4x4_block_rg16;

pub use bc5_decode::*;
pub use decoded_4x4_block_rg16::*;
