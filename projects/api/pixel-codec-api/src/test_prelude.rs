//! Common test imports and utilities for the conversion API tests
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::buffer::*;
pub use crate::convert::*;
pub use crate::decompress::*;
pub use crate::error::*;
pub use crate::layout::*;
pub use crate::options::*;
pub use crate::orchestrate::*;
pub use crate::view::*;

// Block codecs
pub use pixel_codec_bc1::{
    CompressSettings, CompressionBackend, PartialBlockPolicy, QualityLevel, compress_bc1,
    decode_bc1_block_from_slice,
};
pub use pixel_codec_bc3::{compress_bc3, decode_bc3_block};

// Common types from pixel_codec_common
pub use pixel_codec_common::color_8888::Color8888;
pub use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;
pub use pixel_codec_common::{FormatError, PixelComponent, PixelFormat};

/// Builds an RGBA8 image of `width` x `height` pixels where every pixel is `color`.
pub fn solid_rgba8(width: u32, height: u32, color: Color8888) -> Vec<u8> {
    color.to_bytes().repeat(width as usize * height as usize)
}

/// Builds an RGBA8 image whose pixels all differ in their first rows and columns.
pub fn gradient_rgba8(width: u32, height: u32) -> Vec<u8> {
    let mut image = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height as usize {
        for x in 0..width as usize {
            image.extend_from_slice(&[(x * 17) as u8, (y * 29) as u8, ((x + y) * 7) as u8, 255]);
        }
    }
    image
}
