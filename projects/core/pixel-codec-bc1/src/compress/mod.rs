//! BC1 block compression, plus the block driver shared with the BC3 compressor.
//!
//! The driver walks the source image in 4x4 steps, converts each block to RGBA8 through a
//! [`ComponentReader`], and hands it to a [`BlockEncoder`] which writes the compressed bytes.

pub mod base;
pub mod padding;
mod bc1;
mod refine;
mod settings;

pub use base::ComponentReader;
pub use bc1::*;
pub use settings::*;

use pixel_codec_common::{
    accessor::PixelAccessor, decoded_4x4_block::Decoded4x4Block, error::FormatError,
    format::PixelFormat,
};
use likely_stable::likely;
use thiserror::Error;

/// An error that happened while compressing an image into blocks.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CompressError {
    /// The source format cannot be read as RGBA8.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A buffer is smaller than the image dimensions require.
    #[error("Buffer too small: needed {needed} bytes, got {actual}")]
    SizeMismatch {
        /// Bytes the operation requires.
        needed: usize,
        /// Bytes the caller provided.
        actual: usize,
    },

    /// The image does not divide into whole 4x4 blocks and [`PartialBlockPolicy::Reject`]
    /// was requested.
    #[error("Image of {width}x{height} does not divide into 4x4 blocks")]
    PartialBlock {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
}

/// Totals reported by a successful compression call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CompressStats {
    /// Blocks written.
    pub blocks: usize,
    /// Source bytes read.
    pub bytes_read: usize,
    /// Compressed bytes written.
    pub bytes_written: usize,
    /// Blocks that were padded because they hung over the image edge.
    pub padded_blocks: usize,
}

/// Encodes one decoded 4x4 block into a fixed number of bytes.
pub trait BlockEncoder {
    /// Size of one encoded block.
    const BLOCK_BYTES: usize;

    /// Encodes `block` into the first [`Self::BLOCK_BYTES`] bytes of `dst`.
    fn encode_block(&self, block: &Decoded4x4Block, dst: &mut [u8]);
}

/// Number of blocks needed to cover `width` x `height` pixels.
#[inline]
pub const fn block_count(width: u32, height: u32) -> usize {
    (width.div_ceil(4) as usize) * (height.div_ceil(4) as usize)
}

/// Compresses an image of `src_format` pixels with `encoder`.
///
/// # Parameters
///
/// - `encoder`: Writes one compressed block.
/// - `src`: Tightly packed source pixels, row after row.
/// - `src_format`: Any uncompressed format with colour or luminance data.
/// - `(width, height)`: Image dimensions in pixels.
/// - `dst`: Receives `ceil(width/4) * ceil(height/4) * E::BLOCK_BYTES` bytes.
/// - `partial_blocks`: What to do if the dimensions are not multiples of 4.
///
/// # Errors
///
/// - [`CompressError::Format`] if `src_format` is compressed.
/// - [`CompressError::SizeMismatch`] if `src` or `dst` are too small; nothing is written.
/// - [`CompressError::PartialBlock`] under [`PartialBlockPolicy::Reject`].
pub fn compress_blocks<E: BlockEncoder>(
    encoder: &E,
    src: &[u8],
    src_format: PixelFormat,
    (width, height): (u32, u32),
    dst: &mut [u8],
    partial_blocks: PartialBlockPolicy,
) -> Result<CompressStats, CompressError> {
    let reader = PixelAccessor::new(src_format)?;
    let pixel_size = reader.byte_size();
    let row_pitch = width as usize * pixel_size;

    let is_partial = width % 4 != 0 || height % 4 != 0;
    if is_partial && partial_blocks == PartialBlockPolicy::Reject {
        return Err(CompressError::PartialBlock { width, height });
    }

    let src_needed = row_pitch * height as usize;
    if src.len() < src_needed {
        return Err(CompressError::SizeMismatch {
            needed: src_needed,
            actual: src.len(),
        });
    }

    let dst_needed = block_count(width, height) * E::BLOCK_BYTES;
    if dst.len() < dst_needed {
        return Err(CompressError::SizeMismatch {
            needed: dst_needed,
            actual: dst.len(),
        });
    }

    let mut stats = CompressStats::default();
    let mut tile = [0u8; padding::TILE_BYTES];
    let mut block = Decoded4x4Block::default();
    let mut out = dst.chunks_exact_mut(E::BLOCK_BYTES);

    for block_y in (0..height as usize).step_by(4) {
        let rows = (height as usize - block_y).min(4);
        for block_x in (0..width as usize).step_by(4) {
            let columns = (width as usize - block_x).min(4);
            let origin = &src[block_y * row_pitch + block_x * pixel_size..];

            if likely(rows == 4 && columns == 4) {
                stats.bytes_read += base::extract_block(origin, row_pitch, pixel_size, &reader, &mut block);
            } else {
                stats.bytes_read += padding::copy_block_data(
                    origin, row_pitch, pixel_size, columns, rows, &mut tile,
                );
                base::extract_block(&tile, 4 * pixel_size, pixel_size, &reader, &mut block);
                stats.padded_blocks += 1;
            }

            // Sized by the check above.
            if let Some(encoded) = out.next() {
                encoder.encode_block(&block, encoded);
                stats.bytes_written += E::BLOCK_BYTES;
            }
            stats.blocks += 1;
        }
    }

    debug_assert_eq!(stats.bytes_written, dst_needed);
    debug_assert_eq!(stats.bytes_read, src_needed);
    Ok(stats)
}

/// Compresses an image into BC1 blocks.
///
/// See [`compress_blocks`] for the parameters and errors.
///
/// # Example
///
/// ```
/// use pixel_codec_bc1::{compress_bc1, decode_bc1_block_from_slice, CompressSettings};
/// use pixel_codec_common::format::PixelFormat;
///
/// let src = [255u8, 0, 0, 255].repeat(16);
/// let mut dst = [0u8; 8];
/// let stats = compress_bc1(&src, PixelFormat::R8G8B8A8Unorm, (4, 4), &mut dst, &CompressSettings::default()).unwrap();
/// assert_eq!(stats.blocks, 1);
///
/// let decoded = decode_bc1_block_from_slice(&dst).unwrap();
/// assert_eq!(decoded.get_pixel(0, 0).r, 255);
/// ```
pub fn compress_bc1(
    src: &[u8],
    src_format: PixelFormat,
    dims: (u32, u32),
    dst: &mut [u8],
    settings: &CompressSettings,
) -> Result<CompressStats, CompressError> {
    Bc1Compressor::new(*settings).compress(src, src_format, dims, dst)
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(4, 4, 1)]
    #[case(8, 4, 2)]
    #[case(5, 5, 4)]
    #[case(1, 1, 1)]
    #[case(16, 12, 12)]
    fn block_count_rounds_up(#[case] width: u32, #[case] height: u32, #[case] expected: usize) {
        assert_eq!(block_count(width, height), expected);
    }

    #[test]
    fn rejects_small_destination() {
        let src = solid_rgba8(8, 8, Color8888::new(1, 2, 3, 255));
        let mut dst = vec![0u8; 31];
        let result = compress_bc1(&src, PixelFormat::R8G8B8A8Unorm, (8, 8), &mut dst, &CompressSettings::default());
        assert_eq!(result, Err(CompressError::SizeMismatch { needed: 32, actual: 31 }));
        assert!(dst.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn rejects_small_source() {
        let src = solid_rgba8(4, 3, Color8888::new(1, 2, 3, 255));
        let mut dst = vec![0u8; 8];
        let result = compress_bc1(&src, PixelFormat::R8G8B8A8Unorm, (4, 4), &mut dst, &CompressSettings::default());
        assert_eq!(result, Err(CompressError::SizeMismatch { needed: 64, actual: 48 }));
    }

    #[test]
    fn rejects_compressed_source() {
        let mut dst = vec![0u8; 8];
        let result = compress_bc1(&[0u8; 8], PixelFormat::Bc1RgbUnormBlock, (4, 4), &mut dst, &CompressSettings::default());
        assert!(matches!(result, Err(CompressError::Format(_))));
    }

    #[rstest]
    #[case(6, 4)]
    #[case(4, 2)]
    #[case(3, 3)]
    fn reject_policy_refuses_partial_blocks(#[case] width: u32, #[case] height: u32) {
        let src = solid_rgba8(width, height, Color8888::new(1, 2, 3, 255));
        let mut dst = vec![0u8; block_count(width, height) * 8];
        let settings = CompressSettings {
            partial_blocks: PartialBlockPolicy::Reject,
            ..Default::default()
        };
        let result = compress_bc1(&src, PixelFormat::R8G8B8A8Unorm, (width, height), &mut dst, &settings);
        assert_eq!(result, Err(CompressError::PartialBlock { width, height }));
    }

    #[test]
    fn pad_policy_fills_partial_blocks() {
        let color = Color8888::new(255, 0, 0, 255);
        let src = solid_rgba8(6, 3, color);
        let mut dst = vec![0u8; 16];
        let stats = compress_bc1(&src, PixelFormat::R8G8B8A8Unorm, (6, 3), &mut dst, &CompressSettings::default()).unwrap();

        assert_eq!(
            stats,
            CompressStats {
                blocks: 2,
                bytes_read: 6 * 3 * 4,
                bytes_written: 16,
                padded_blocks: 2,
            }
        );
        for block in dst.chunks_exact(8) {
            let decoded = decode_bc1_block_from_slice(block).unwrap();
            assert_eq!(decoded, Decoded4x4Block::new(color));
        }
    }

    #[test]
    fn reads_other_source_formats() {
        // B8G8R8A8: blue in byte 0.
        let src = [255u8, 0, 0, 255].repeat(16);
        let mut dst = [0u8; 8];
        compress_bc1(&src, PixelFormat::B8G8R8A8Unorm, (4, 4), &mut dst, &CompressSettings::default()).unwrap();
        let decoded = decode_bc1_block(&dst);
        assert_eq!(decoded.get_pixel(0, 0), Color8888::new(0, 0, 255, 255));
    }
}
