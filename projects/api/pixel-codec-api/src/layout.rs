//! # Image Layout
//!
//! Size and offset arithmetic for buffers holding several array layers, each with a full or
//! partial mip chain.
//!
//! Data is stored layer after layer. Inside a layer, levels follow each other starting from
//! the largest. Every level is padded up to a multiple of the layout's alignment, which
//! defaults to the format's bytes per pixel (bytes per block for compressed formats).
//!
//! ```text
//! | layer 0: level 0 | level 1 | ... | layer 1: level 0 | level 1 | ... |
//! ```
//!
//! Compressed levels are always stored in whole blocks, so a 2x2 BC1 level still takes 8 bytes.

use crate::error::ConvertError;
use core::ops::Range;
use pixel_codec_common::{PixelFormat, describe};

/// Bytes needed for `width` x `height` pixels of `format`, rounded up to whole blocks.
#[inline]
pub fn image_size(format: PixelFormat, width: u32, height: u32) -> usize {
    let descriptor = describe(format);
    let (block_width, block_height) = descriptor.block_extent;
    width.div_ceil(block_width) as usize
        * height.div_ceil(block_height) as usize
        * descriptor.byte_size as usize
}

/// Number of levels in a full mip chain for an image of `width` x `height`.
///
/// `floor(log2(max(width, height))) + 1`, and 1 for empty images.
#[inline]
pub const fn max_mip_count(width: u32, height: u32) -> u32 {
    let largest = if width > height { width } else { height };
    if largest == 0 {
        1
    } else {
        u32::BITS - largest.leading_zeros()
    }
}

/// Extent and size of one block of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize {
    /// Width and height in pixels, `(1, 1)` for uncompressed formats.
    pub extent: (u32, u32),
    /// Bytes per block, which is bytes per pixel for uncompressed formats.
    pub bytes: u32,
}

/// Metadata of a buffer: format, dimensions, layer and level counts and level alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageLayout {
    /// Format of every level.
    pub format: PixelFormat,
    /// Width of level 0 in pixels.
    pub width: u32,
    /// Height of level 0 in pixels.
    pub height: u32,
    /// Number of array layers.
    pub layers: u32,
    /// Number of mip levels per layer.
    pub levels: u32,
    /// Alignment of every level in bytes; 0 means the format's bytes per pixel.
    pub align: u32,
}

impl ImageLayout {
    /// A single layer, single level layout with default alignment.
    pub const fn new(format: PixelFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            width,
            height,
            layers: 1,
            levels: 1,
            align: 0,
        }
    }

    /// Returns a copy with `layers` array layers.
    pub const fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Returns a copy with `levels` mip levels.
    pub const fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Returns a copy with levels aligned to `align` bytes.
    pub const fn with_align(mut self, align: u32) -> Self {
        self.align = align;
        self
    }

    /// Block extent and size of the format.
    #[inline]
    pub fn block_size(&self) -> BlockSize {
        let descriptor = describe(self.format);
        BlockSize {
            extent: descriptor.block_extent,
            bytes: descriptor.byte_size,
        }
    }

    /// The alignment actually applied to levels.
    #[inline]
    pub fn effective_align(&self) -> usize {
        match self.align {
            0 => (self.block_size().bytes as usize).max(1),
            align => align as usize,
        }
    }

    /// Pixel dimensions of `level`, never below 1x1.
    #[inline]
    pub fn level_extent(&self, level: u32) -> (u32, u32) {
        (
            self.width.checked_shr(level).unwrap_or(0).max(1),
            self.height.checked_shr(level).unwrap_or(0).max(1),
        )
    }

    /// Dimensions of `level` rounded up to whole blocks.
    pub fn subresource_extent(&self, level: u32) -> (u32, u32) {
        let (width, height) = self.level_extent(level);
        let (block_width, block_height) = self.block_size().extent;
        (
            width.next_multiple_of(block_width),
            height.next_multiple_of(block_height),
        )
    }

    /// Bytes taken by one level, including alignment padding.
    pub fn level_size(&self, level: u32) -> usize {
        let (width, height) = self.level_extent(level);
        image_size(self.format, width, height).next_multiple_of(self.effective_align())
    }

    /// Bytes taken by `count` consecutive levels starting at `first`.
    pub fn levels_size(&self, first: u32, count: u32) -> usize {
        (first..first + count).map(|level| self.level_size(level)).sum()
    }

    /// Bytes taken by all levels of one layer.
    #[inline]
    pub fn layer_size(&self) -> usize {
        self.levels_size(0, self.levels)
    }

    /// Bytes taken by the whole buffer.
    #[inline]
    pub fn total_size(&self) -> usize {
        self.layers as usize * self.layer_size()
    }

    /// Offset of the first byte of `level` in `layer`.
    #[inline]
    pub fn level_offset(&self, layer: u32, level: u32) -> usize {
        layer as usize * self.layer_size() + self.levels_size(0, level)
    }

    /// Byte range of `level` in `layer`.
    #[inline]
    pub fn level_range(&self, layer: u32, level: u32) -> Range<usize> {
        let start = self.level_offset(layer, level);
        start..start + self.level_size(level)
    }

    /// Offset of the pixel at `(x, y)` of `level` in `layer`.
    ///
    /// For compressed formats this is the offset of the block containing the pixel.
    pub fn pixel_offset(&self, x: u32, y: u32, layer: u32, level: u32) -> usize {
        let block = self.block_size();
        let (width, _) = self.level_extent(level);
        let (block_width, block_height) = block.extent;
        let blocks_per_row = width.div_ceil(block_width) as usize;
        let index = (y / block_height) as usize * blocks_per_row + (x / block_width) as usize;
        self.level_offset(layer, level) + index * block.bytes as usize
    }

    /// Whether a buffer of `len` bytes holds `level` of `layer`.
    #[inline]
    pub fn has_buffer(&self, len: usize, layer: u32, level: u32) -> bool {
        self.level_range(layer, level).end <= len
    }

    /// Checks that a buffer of `len` bytes holds `level` of `layer`.
    ///
    /// # Errors
    ///
    /// [`ConvertError::SizeMismatch`] when the buffer ends before the level does.
    pub fn check_buffer(&self, len: usize, layer: u32, level: u32) -> Result<(), ConvertError> {
        let needed = self.level_range(layer, level).end;
        if needed > len {
            return Err(ConvertError::SizeMismatch {
                needed,
                actual: len,
            });
        }
        Ok(())
    }
}
