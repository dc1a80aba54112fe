//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure, the staging area for one 4x4 tile
//! of RGBA8 pixels. Block decoders produce it and block compressors consume it.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! Serialized with [`Decoded4x4Block::to_bytes`] this is the 64-byte `R8G8B8A8` block that
//! buffer-level code copies into images.
//!
//! ## Usage
//!
//! ```
//! use pixel_codec_common::color_8888::Color8888;
//! use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//! assert!(block.has_identical_pixels());
//! ```

use crate::color_8888::Color8888;

/// Number of bytes in a serialized [`Decoded4x4Block`].
pub const DECODED_BLOCK_BYTES: usize = 16 * 4;

/// Represents a decoded 4x4 block of RGBA8 pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Default for Decoded4x4Block {
    fn default() -> Self {
        Self::new(Color8888::default())
    }
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Reads a block from 64 bytes of `R8G8B8A8` pixels in row-major order.
    pub fn from_bytes(bytes: &[u8; DECODED_BLOCK_BYTES]) -> Self {
        let mut result = Self::default();
        for (pixel, chunk) in result.pixels.iter_mut().zip(bytes.chunks_exact(4)) {
            *pixel = Color8888::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        result
    }

    /// Serializes the block into 64 bytes of `R8G8B8A8` pixels in row-major order.
    pub fn to_bytes(&self) -> [u8; DECODED_BLOCK_BYTES] {
        let mut out = [0u8; DECODED_BLOCK_BYTES];
        for (chunk, pixel) in out.chunks_exact_mut(4).zip(self.pixels.iter()) {
            chunk.copy_from_slice(&pixel.to_bytes());
        }
        out
    }

    /// Gets a pixel at the specified coordinates (0-3, 0-3)
    ///
    /// # Panics
    ///
    /// If `x >= 4` or `y >= 4`.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "pixel coordinates out of range");
        self.pixels[y * 4 + x]
    }

    /// Sets a pixel at the specified coordinates (0-3, 0-3)
    ///
    /// # Panics
    ///
    /// If `x >= 4` or `y >= 4`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        assert!(x < 4 && y < 4, "pixel coordinates out of range");
        self.pixels[y * 4 + x] = pixel;
    }

    /// Gets a pixel at the specified coordinates (0-3, 0-3) without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `x < 4` and `y < 4`.
    #[inline]
    pub unsafe fn get_pixel_unchecked(&self, x: usize, y: usize) -> Color8888 {
        *self.pixels.get_unchecked(y * 4 + x)
    }

    /// Sets a pixel at the specified coordinates (0-3, 0-3) without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `x < 4` and `y < 4`.
    #[inline]
    pub unsafe fn set_pixel_unchecked(&mut self, x: usize, y: usize, pixel: Color8888) {
        *self.pixels.get_unchecked_mut(y * 4 + x) = pixel;
    }

    /// Checks if all pixels in the block have the same color values
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }
}
