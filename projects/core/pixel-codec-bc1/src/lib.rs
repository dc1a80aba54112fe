#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod compress;
pub mod util;

pub use compress::{
    compress_bc1, Bc1Compressor, BlockEncoder, CompressError, CompressSettings, CompressStats,
    CompressionBackend, PartialBlockPolicy, QualityLevel,
};
pub use util::{decode_bc1_block, decode_bc1_block_from_slice};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
