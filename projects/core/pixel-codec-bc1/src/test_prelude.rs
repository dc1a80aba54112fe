//! Common test imports and utilities for BC1 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::compress::base::*;
pub use crate::compress::*;
pub use crate::util::*;

// Common types from pixel_codec_common
pub use pixel_codec_common::color_565::Color565;
pub use pixel_codec_common::color_8888::Color8888;
pub use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;
pub use pixel_codec_common::{PixelAccessor, PixelFormat};

/// Builds an RGBA8 image of `width` x `height` pixels where every pixel is `color`.
pub fn solid_rgba8(width: u32, height: u32, color: Color8888) -> Vec<u8> {
    let pixels = width as usize * height as usize;
    let mut image = Vec::with_capacity(pixels * 4);
    for _ in 0..pixels {
        image.extend_from_slice(&color.to_bytes());
    }
    image
}

/// Builds an RGBA8 image with a deterministic gradient, useful for exercising every index.
pub fn gradient_rgba8(width: u32, height: u32) -> Vec<u8> {
    let (width, height) = (width as usize, height as usize);
    let mut image = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            image.extend_from_slice(&[
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) * 31 % 256) as u8,
                (255 - x * 16 % 256) as u8,
            ]);
        }
    }
    image
}
