//! Level decompression for BC1, BC3 and BC5.
//!
//! Blocks are decoded whole and then clipped, so only the columns and rows inside the image are
//! written for blocks on the right and bottom edges.

use crate::error::ConvertError;
use crate::layout::image_size;
use alloc::{vec, vec::Vec};
use pixel_codec_bc1::decode_bc1_block_from_slice;
use pixel_codec_bc3::decode_bc3_block_from_slice;
use pixel_codec_bc5::decode_bc5_block_from_slice;
use pixel_codec_bc5::util::bc5_channel_palette;
use pixel_codec_common::decoded_4x4_block::DECODED_BLOCK_BYTES;
use pixel_codec_common::{PixelFormat, describe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockFamily {
    Bc1,
    Bc3,
    Bc5,
}

impl BlockFamily {
    const fn of(format: PixelFormat) -> Option<Self> {
        match format {
            PixelFormat::Bc1RgbUnormBlock
            | PixelFormat::Bc1RgbSrgbBlock
            | PixelFormat::Bc1RgbaUnormBlock
            | PixelFormat::Bc1RgbaSrgbBlock => Some(BlockFamily::Bc1),
            PixelFormat::Bc3UnormBlock | PixelFormat::Bc3SrgbBlock => Some(BlockFamily::Bc3),
            PixelFormat::Bc5UnormBlock | PixelFormat::Bc5SnormBlock => Some(BlockFamily::Bc5),
            _ => None,
        }
    }

    const fn block_bytes(self) -> usize {
        match self {
            BlockFamily::Bc1 => 8,
            BlockFamily::Bc3 | BlockFamily::Bc5 => 16,
        }
    }

    /// Checks the endpoints of every block, so a malformed block is reported before anything
    /// is written.
    fn validate(self, blocks: &[u8]) -> Result<(), ConvertError> {
        if self != BlockFamily::Bc5 {
            return Ok(());
        }

        for (block_index, block) in blocks.chunks_exact(self.block_bytes()).enumerate() {
            let malformed = [0, 8]
                .into_iter()
                .any(|half| bc5_channel_palette(block[half] as i8, block[half + 1] as i8).is_err());
            if malformed {
                return Err(ConvertError::MalformedBlock { block_index });
            }
        }
        Ok(())
    }

    /// Decodes one block into 64 bytes of rows of 4 pixels of the decompressed format.
    fn decode(self, block: &[u8], block_index: usize) -> Result<[u8; DECODED_BLOCK_BYTES], ConvertError> {
        let truncated = ConvertError::SizeMismatch {
            needed: self.block_bytes(),
            actual: block.len(),
        };
        match self {
            BlockFamily::Bc1 => decode_bc1_block_from_slice(block)
                .map(|decoded| decoded.to_bytes())
                .ok_or(truncated),
            BlockFamily::Bc3 => decode_bc3_block_from_slice(block)
                .map(|decoded| decoded.to_bytes())
                .ok_or(truncated),
            BlockFamily::Bc5 => match decode_bc5_block_from_slice(block) {
                Some(Ok(decoded)) => Ok(decoded.to_bytes()),
                Some(Err(_)) => Err(ConvertError::MalformedBlock { block_index }),
                None => Err(truncated),
            },
        }
    }
}

/// The uncompressed format `format` decompresses to.
///
/// - BC1 and BC3: `R8G8B8A8Unorm`, or `R8G8B8A8Srgb` for the sRGB variants.
/// - BC5: `R16G16Snorm`.
/// - Anything else: [`None`].
pub const fn decompressed_format(format: PixelFormat) -> Option<PixelFormat> {
    match BlockFamily::of(format) {
        Some(BlockFamily::Bc5) => Some(PixelFormat::R16G16Snorm),
        Some(_) => match format {
            PixelFormat::Bc1RgbSrgbBlock | PixelFormat::Bc1RgbaSrgbBlock | PixelFormat::Bc3SrgbBlock => {
                Some(PixelFormat::R8G8B8A8Srgb)
            }
            _ => Some(PixelFormat::R8G8B8A8Unorm),
        },
        None => None,
    }
}

/// Decompresses one level of `width` x `height` pixels into `dst`.
///
/// `dst` receives tightly packed pixels of [`decompressed_format`]`(format)`.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedFormat`] when `format` is not BC1, BC3 or BC5.
/// - [`ConvertError::SizeMismatch`] when `src` or `dst` are too small. Nothing is written.
/// - [`ConvertError::MalformedBlock`] for a BC5 block with invalid endpoints. Nothing is written.
pub fn decompress_into(
    format: PixelFormat,
    (width, height): (u32, u32),
    src: &[u8],
    dst: &mut [u8],
) -> Result<(), ConvertError> {
    let (Some(family), Some(target)) = (BlockFamily::of(format), decompressed_format(format))
    else {
        return Err(ConvertError::unsupported(format));
    };

    let src_needed = image_size(format, width, height);
    if src.len() < src_needed {
        return Err(ConvertError::SizeMismatch {
            needed: src_needed,
            actual: src.len(),
        });
    }

    let pixel_size = describe(target).byte_size as usize;
    let row_pitch = width as usize * pixel_size;
    let dst_needed = row_pitch * height as usize;
    if dst.len() < dst_needed {
        return Err(ConvertError::SizeMismatch {
            needed: dst_needed,
            actual: dst.len(),
        });
    }

    family.validate(&src[..src_needed])?;

    let blocks_per_row = width.div_ceil(4) as usize;
    let blocks = src[..src_needed].chunks_exact(family.block_bytes());
    for (block_index, block) in blocks.enumerate() {
        let decoded = family.decode(block, block_index)?;
        let x = (block_index % blocks_per_row) * 4;
        let y = (block_index / blocks_per_row) * 4;
        let columns = (width as usize - x).min(4);
        let rows = (height as usize - y).min(4);

        for (row, line) in decoded.chunks_exact(4 * pixel_size).take(rows).enumerate() {
            let start = (y + row) * row_pitch + x * pixel_size;
            dst[start..start + columns * pixel_size].copy_from_slice(&line[..columns * pixel_size]);
        }
    }
    Ok(())
}

/// Decompresses one level into a newly allocated buffer.
///
/// # Returns
///
/// The decompressed format and the tightly packed pixels.
///
/// # Errors
///
/// See [`decompress_into`].
pub fn decompress_level(
    format: PixelFormat,
    dims: (u32, u32),
    src: &[u8],
) -> Result<(PixelFormat, Vec<u8>), ConvertError> {
    let target = decompressed_format(format).ok_or(ConvertError::unsupported(format))?;
    let mut pixels = vec![0u8; image_size(target, dims.0, dims.1)];
    decompress_into(format, dims, src, &mut pixels)?;
    Ok((target, pixels))
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;
    use super::decompress_into;

    /// BC1 block: c0 = red, c1 = blue, all pixels index 0 except the last row (index 1).
    const RED_OVER_BLUE: [u8; 8] = [0x00, 0xF8, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x55];

    #[rstest]
    #[case(PixelFormat::Bc1RgbUnormBlock, Some(PixelFormat::R8G8B8A8Unorm))]
    #[case(PixelFormat::Bc1RgbaSrgbBlock, Some(PixelFormat::R8G8B8A8Srgb))]
    #[case(PixelFormat::Bc3UnormBlock, Some(PixelFormat::R8G8B8A8Unorm))]
    #[case(PixelFormat::Bc3SrgbBlock, Some(PixelFormat::R8G8B8A8Srgb))]
    #[case(PixelFormat::Bc5UnormBlock, Some(PixelFormat::R16G16Snorm))]
    #[case(PixelFormat::Bc5SnormBlock, Some(PixelFormat::R16G16Snorm))]
    #[case(PixelFormat::Bc7UnormBlock, None)]
    #[case(PixelFormat::R8G8B8A8Unorm, None)]
    fn decompressed_formats(#[case] format: PixelFormat, #[case] expected: Option<PixelFormat>) {
        assert_eq!(decompressed_format(format), expected);
    }

    #[test]
    fn full_block_decodes_every_pixel() {
        let (format, pixels) = decompress_level(PixelFormat::Bc1RgbUnormBlock, (4, 4), &RED_OVER_BLUE).unwrap();
        assert_eq!(format, PixelFormat::R8G8B8A8Unorm);
        assert_eq!(pixels.len(), 64);
        assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
        assert_eq!(&pixels[48..52], &[0, 0, 255, 255]);
    }

    #[test]
    fn edge_blocks_are_clipped() {
        // 6x5: 2x2 blocks, only 2 columns of the right blocks and 1 row of the bottom blocks.
        let src = RED_OVER_BLUE.repeat(4);
        let mut dst = vec![0xAAu8; 6 * 5 * 4 + 4];
        decompress_into(PixelFormat::Bc1RgbUnormBlock, (6, 5), &src, &mut dst).unwrap();

        // Rows 0-2 red, row 3 blue (last row of the top blocks), row 4 red.
        for y in 0..5 {
            for x in 0..6 {
                let offset = (y * 6 + x) * 4;
                let expected: [u8; 4] = if y == 3 { [0, 0, 255, 255] } else { [255, 0, 0, 255] };
                assert_eq!(&dst[offset..offset + 4], &expected, "pixel {x},{y}");
            }
        }
        assert_eq!(&dst[120..], &[0xAA; 4]);
    }

    #[test]
    fn bc3_keeps_alpha() {
        let mut block = [0u8; 16];
        block[0] = 128;
        block[1] = 128;
        let (_, pixels) = decompress_level(PixelFormat::Bc3UnormBlock, (2, 2), &block).unwrap();
        assert_eq!(pixels, [0u8, 0, 0, 128].repeat(4));
    }

    #[test]
    fn bc5_decodes_to_r16g16() {
        // Both halves: lum0 = 127, lum1 = -127, all indices 0 -> +1.0.
        let mut block = [0u8; 16];
        block[0] = 127;
        block[1] = 0x81;
        block[8] = 127;
        block[9] = 0x81;
        let (format, pixels) = decompress_level(PixelFormat::Bc5SnormBlock, (1, 1), &block).unwrap();
        assert_eq!(format, PixelFormat::R16G16Snorm);
        assert_eq!(pixels, [0xFFu8, 0x7F, 0xFF, 0x7F]);
    }

    #[test]
    fn malformed_bc5_reports_block_index() {
        let good = {
            let mut block = [0u8; 16];
            block[0] = 127;
            block[8] = 127;
            block
        };
        let mut bad = good;
        bad[8] = 0x81; // -127
        bad[9] = 0x80; // -128
        let src = [good, bad].concat();

        let result = decompress_level(PixelFormat::Bc5UnormBlock, (8, 4), &src);
        assert_eq!(result, Err(ConvertError::MalformedBlock { block_index: 1 }));
    }

    #[rstest]
    #[case(0)]
    #[case(8)]
    fn malformed_bc5_leaves_dst_untouched(#[case] half: usize) {
        let mut good = [0u8; 16];
        good[0] = 127;
        good[8] = 127;
        let mut bad = good;
        bad[half] = 0x81;
        bad[half + 1] = 0x80;
        let src = [good, good, bad].concat();

        let mut dst = vec![0xAAu8; 12 * 4 * 4];
        let result = decompress_into(PixelFormat::Bc5SnormBlock, (12, 4), &src, &mut dst);
        assert_eq!(result, Err(ConvertError::MalformedBlock { block_index: 2 }));
        assert!(dst.iter().all(|&byte| byte == 0xAA));
    }

    #[test]
    fn size_checks() {
        assert_eq!(
            decompress_level(PixelFormat::Bc1RgbUnormBlock, (8, 4), &[0u8; 15]),
            Err(ConvertError::SizeMismatch {
                needed: 16,
                actual: 15,
            })
        );

        let mut dst = [0u8; 63];
        assert_eq!(
            decompress_into(PixelFormat::Bc3UnormBlock, (4, 4), &[0u8; 16], &mut dst),
            Err(ConvertError::SizeMismatch {
                needed: 64,
                actual: 63,
            })
        );
        assert_eq!(
            decompress_level(PixelFormat::Bc7UnormBlock, (4, 4), &[0u8; 16]),
            Err(ConvertError::unsupported(PixelFormat::Bc7UnormBlock))
        );
    }
}
