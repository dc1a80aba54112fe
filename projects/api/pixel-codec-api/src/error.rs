//! Error types for conversion, compression and buffer operations.

use pixel_codec_bc1::CompressError;
use pixel_codec_common::{FormatError, PixelComponent, PixelFormat};
use thiserror::Error;

/// Errors that can occur while converting, compressing or decompressing pixel data.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConvertError {
    /// The format is unknown, or the operation is not implemented for it.
    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(u32),

    /// No format is registered under the given name.
    #[error("Unknown pixel format name")]
    UnsupportedFormatName,

    /// The format does not store the requested component.
    #[error("Pixel format {format:?} has no {component} component")]
    UnsupportedComponent {
        /// The format that was queried.
        format: PixelFormat,
        /// The component that was requested.
        component: PixelComponent,
    },

    /// A buffer is smaller than its dimensions and format require.
    #[error("Buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    SizeMismatch {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// A compressed block could not be decoded.
    #[error("Malformed block at index {block_index}")]
    MalformedBlock {
        /// Index of the block inside the level being decoded.
        block_index: usize,
    },

    /// The image does not divide into whole blocks and padding was not allowed.
    #[error("Image of {width}x{height} does not divide into 4x4 blocks")]
    PartialBlock {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
}

impl ConvertError {
    /// Shorthand for [`ConvertError::UnsupportedFormat`] from a typed tag.
    #[inline]
    pub const fn unsupported(format: PixelFormat) -> Self {
        ConvertError::UnsupportedFormat(format as u32)
    }
}

impl From<FormatError> for ConvertError {
    fn from(error: FormatError) -> Self {
        match error {
            FormatError::UnsupportedFormat(raw) => ConvertError::UnsupportedFormat(raw),
            FormatError::UnsupportedFormatName => ConvertError::UnsupportedFormatName,
            FormatError::UnsupportedComponent { format, component } => {
                ConvertError::UnsupportedComponent { format, component }
            }
        }
    }
}

impl From<CompressError> for ConvertError {
    fn from(error: CompressError) -> Self {
        match error {
            CompressError::Format(error) => error.into(),
            CompressError::SizeMismatch { needed, actual } => {
                ConvertError::SizeMismatch { needed, actual }
            }
            CompressError::PartialBlock { width, height } => {
                ConvertError::PartialBlock { width, height }
            }
        }
    }
}
