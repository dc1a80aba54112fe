//! Common test imports and utilities for BC3 tests
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{vec, vec::Vec};

pub use rstest::rstest;

pub use crate::compress::*;
pub use crate::util::*;

pub use pixel_codec_bc1::compress::{block_count, CompressError, CompressSettings, PartialBlockPolicy};
pub use pixel_codec_bc1::{CompressionBackend, QualityLevel};
pub use pixel_codec_common::color_8888::Color8888;
pub use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;
pub use pixel_codec_common::PixelFormat;

/// Builds an RGBA8 image where alpha follows a diagonal ramp and colour stays constant.
pub fn alpha_ramp_rgba8(width: u32, height: u32, color: Color8888) -> Vec<u8> {
    let mut image = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let alpha = ((x + y) * 255 / (width + height - 2).max(1)) as u8;
            image.extend_from_slice(&color.with_alpha(alpha).to_bytes());
        }
    }
    image
}
