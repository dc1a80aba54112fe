#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod compress;
pub mod util;

pub use compress::{compress_bc3, emit_alpha_indices, Bc3Compressor};
pub use util::{decode_bc3_block, decode_bc3_block_from_slice};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
