#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod accessor;
pub mod color_565;
pub mod color_8888;
pub mod component;
pub mod decoded_4x4_block;
pub mod division;
pub mod error;
pub mod format;

pub use accessor::{ComponentAccessor, PixelAccessor};
pub use component::{PixelComponent, PixelComponents};
pub use error::FormatError;
pub use format::{describe, describe_raw, FormatDescriptor, NumericFormat, PixelFormat};
