#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
pub mod buffer;
pub mod convert;
pub mod decompress;
pub mod error;
pub mod layout;
pub mod options;
pub mod orchestrate;
pub mod view;

// Re-export main functionality at crate root
pub use buffer::{PxBuffer, extract_component, has_alpha_channel};
pub use convert::{PixelConverter, convert_buffer, convert_buffer_with_options, convert_pixel};
pub use decompress::{decompress_level, decompressed_format};
pub use error::ConvertError;
pub use layout::{ImageLayout, image_size, max_mip_count};
pub use options::{CompressionSupport, ConvertOptions, ConvertOptionsBuilder};
pub use orchestrate::{compress_buffer, copy_buffer, decompress_buffer, transcode};
pub use view::{PixelBufferView, PixelBufferViewMut};

// Re-export the compressor knobs and edge padding helpers
pub use pixel_codec_bc1::compress::padding;
pub use pixel_codec_bc1::{CompressionBackend, PartialBlockPolicy, QualityLevel};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
