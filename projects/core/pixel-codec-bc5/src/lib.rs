#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod util;

pub use error::Bc5DecodeError;
pub use util::{decode_bc5_block, decode_bc5_block_from_slice, Decoded4x4BlockRg16};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
