//! Building blocks shared by the BC1 and BC3 compressors.
//!
//! The colour part follows the classic real-time DXT approach: take the bounding box of the
//! block's colours, pull it in by 1/16th of its size on every side, then pick the closest of
//! the 4 palette entries for each pixel without branching.

use pixel_codec_common::{
    accessor::PixelAccessor, color_565::Color565, color_8888::Color8888,
    decoded_4x4_block::Decoded4x4Block,
};

/// Reads a single pixel of some source format as RGBA8.
///
/// Implementations resolve the per-channel accessors once so the per pixel read is cheap.
pub trait ComponentReader {
    /// Bytes per source pixel.
    fn pixel_size(&self) -> usize;

    /// Reads the pixel starting at `pixel[0]`.
    fn read_rgba8(&self, pixel: &[u8]) -> Color8888;
}

impl ComponentReader for PixelAccessor {
    #[inline]
    fn pixel_size(&self) -> usize {
        self.byte_size()
    }

    #[inline]
    fn read_rgba8(&self, pixel: &[u8]) -> Color8888 {
        PixelAccessor::read_rgba8(self, pixel)
    }
}

/// Reads the 4x4 neighbourhood starting at `src[0]` into `block`.
///
/// # Parameters
///
/// - `src`: Source data, starting at the top left pixel of the block.
/// - `row_pitch`: Bytes between the starts of two consecutive rows.
/// - `pixel_size`: Bytes per pixel.
/// - `reader`: Converts one source pixel to RGBA8.
/// - `block`: Receives the 16 pixels in row-major order.
///
/// # Returns
///
/// Number of source bytes consumed, `16 * pixel_size`.
#[inline]
pub fn extract_block<R: ComponentReader + ?Sized>(
    src: &[u8],
    row_pitch: usize,
    pixel_size: usize,
    reader: &R,
    block: &mut Decoded4x4Block,
) -> usize {
    for (y, row) in block.pixels.chunks_exact_mut(4).enumerate() {
        let line = &src[y * row_pitch..];
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = reader.read_rgba8(&line[x * pixel_size..]);
        }
    }
    16 * pixel_size
}

#[inline(always)]
fn inset_range(min: u8, max: u8) -> (u8, u8) {
    let inset = (max - min) >> 4;
    (min.saturating_add(inset), max.saturating_sub(inset))
}

/// Finds the inset colour bounding box of a block, ignoring alpha.
///
/// # Returns
///
/// `(min, max)` where every channel of `min` is less than or equal to the same channel of
/// `max`. Alpha of both is 255.
#[inline]
pub fn get_min_max_colors(block: &Decoded4x4Block) -> (Color8888, Color8888) {
    let mut min = Color8888::new(255, 255, 255, 255);
    let mut max = Color8888::new(0, 0, 0, 255);
    for pixel in &block.pixels {
        min.r = min.r.min(pixel.r);
        min.g = min.g.min(pixel.g);
        min.b = min.b.min(pixel.b);
        max.r = max.r.max(pixel.r);
        max.g = max.g.max(pixel.g);
        max.b = max.b.max(pixel.b);
    }

    (min.r, max.r) = inset_range(min.r, max.r);
    (min.g, max.g) = inset_range(min.g, max.g);
    (min.b, max.b) = inset_range(min.b, max.b);
    (min, max)
}

/// Same as [`get_min_max_colors`], but the alpha channel is included in the box.
#[inline]
pub fn get_min_max_colors_with_alpha(block: &Decoded4x4Block) -> (Color8888, Color8888) {
    let (mut min, mut max) = get_min_max_colors(block);
    let mut min_alpha = 255u8;
    let mut max_alpha = 0u8;
    for pixel in &block.pixels {
        min_alpha = min_alpha.min(pixel.a);
        max_alpha = max_alpha.max(pixel.a);
    }

    (min.a, max.a) = inset_range(min_alpha, max_alpha);
    (min, max)
}

#[inline(always)]
const fn round_to_bits(value: u8, max: u32) -> u16 {
    ((value as u32 * max + 127) / 255) as u16
}

/// Packs a colour to 5:6:5, rounding each channel to the nearest representable value.
#[inline(always)]
pub const fn color_to_565(color: Color8888) -> u16 {
    (round_to_bits(color.r, 31) << 11) | (round_to_bits(color.g, 63) << 5) | round_to_bits(color.b, 31)
}

/// Chooses the closest palette entry for each pixel of a block.
///
/// The palette is built the way a decoder would see it: `max` and `min` packed with
/// [`color_to_565`] and expanded back, then the 2/3 and 1/3 blends between them.
///
/// # Returns
///
/// 16 2-bit indices, pixel 0 in the lowest bits.
#[inline]
pub fn emit_color_indices(block: &Decoded4x4Block, min: Color8888, max: Color8888) -> u32 {
    let expand = |color: Color8888| {
        let color = Color565::from_raw(color_to_565(color)).to_color_8888();
        [color.r as i32, color.g as i32, color.b as i32]
    };

    let c0 = expand(max);
    let c1 = expand(min);
    let mut c2 = [0i32; 3];
    let mut c3 = [0i32; 3];
    for channel in 0..3 {
        c2[channel] = (2 * c0[channel] + c1[channel]) / 3;
        c3[channel] = (c0[channel] + 2 * c1[channel]) / 3;
    }

    let distance = |palette: &[i32; 3], pixel: &Color8888| -> i32 {
        (palette[0] - pixel.r as i32).abs()
            + (palette[1] - pixel.g as i32).abs()
            + (palette[2] - pixel.b as i32).abs()
    };

    let mut result = 0u32;
    for i in (0..16).rev() {
        let pixel = &block.pixels[i];
        let d0 = distance(&c0, pixel);
        let d1 = distance(&c1, pixel);
        let d2 = distance(&c2, pixel);
        let d3 = distance(&c3, pixel);

        let b0 = (d0 > d3) as u32;
        let b1 = (d1 > d2) as u32;
        let b2 = (d0 > d2) as u32;
        let b3 = (d1 > d3) as u32;
        let b4 = (d2 > d3) as u32;

        let x0 = b1 & b2;
        let x1 = b0 & b3;
        let x2 = b0 & b4;

        result |= (x2 | ((x0 | x1) << 1)) << (i * 2);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn block_from_rgba8(bytes: &[u8]) -> Decoded4x4Block {
        let mut block = Decoded4x4Block::default();
        let reader = PixelAccessor::new(PixelFormat::R8G8B8A8Unorm).unwrap();
        extract_block(bytes, 16, 4, &reader, &mut block);
        block
    }

    #[test]
    fn extract_block_respects_row_pitch() {
        // 8x4 image, only the left half is read.
        let image = gradient_rgba8(8, 4);
        let mut block = Decoded4x4Block::default();
        let reader = PixelAccessor::new(PixelFormat::R8G8B8A8Unorm).unwrap();
        let read = extract_block(&image, 32, 4, &reader, &mut block);

        assert_eq!(read, 64);
        for y in 0..4 {
            for x in 0..4 {
                let offset = y * 32 + x * 4;
                let expected: [u8; 4] = image[offset..offset + 4].try_into().unwrap();
                assert_eq!(block.get_pixel(x, y), Color8888::from_bytes(expected));
            }
        }
    }

    #[test]
    fn extract_block_converts_formats() {
        // B5G6R5: pure green.
        let image = 0x07E0u16.to_le_bytes().repeat(16);
        let mut block = Decoded4x4Block::default();
        let reader = PixelAccessor::new(PixelFormat::B5G6R5UnormPack16).unwrap();
        extract_block(&image, 8, 2, &reader, &mut block);
        assert_eq!(block, Decoded4x4Block::new(Color8888::new(0, 255, 0, 255)));
    }

    #[rstest]
    #[case(0, 255)]
    #[case(0, 15)]
    #[case(100, 116)]
    #[case(17, 17)]
    #[case(250, 255)]
    fn inset_never_crosses(#[case] low: u8, #[case] high: u8) {
        let mut block = Decoded4x4Block::new(Color8888::new(low, low, low, low));
        block.set_pixel(3, 3, Color8888::new(high, high, high, high));

        let (min, max) = get_min_max_colors_with_alpha(&block);
        let inset = (high - low) >> 4;
        for channel in 0..4 {
            assert!(min.channel(channel) <= max.channel(channel));
            assert_eq!(min.channel(channel), low + inset);
            assert_eq!(max.channel(channel), high - inset);
        }
    }

    #[test]
    fn inset_stays_within_range_on_gradients() {
        let image = gradient_rgba8(4, 4);
        let block = block_from_rgba8(&image);
        let (min, max) = get_min_max_colors_with_alpha(&block);
        for channel in 0..4 {
            assert!(min.channel(channel) <= max.channel(channel));
        }
    }

    #[test]
    fn colour_only_box_keeps_opaque_alpha() {
        let block = Decoded4x4Block::new(Color8888::new(1, 2, 3, 0));
        let (min, max) = get_min_max_colors(&block);
        assert_eq!(min, Color8888::new(1, 2, 3, 255));
        assert_eq!(max, Color8888::new(1, 2, 3, 255));
    }

    #[rstest]
    #[case(Color8888::new(255, 0, 0, 255), 0xF800)]
    #[case(Color8888::new(0, 255, 0, 255), 0x07E0)]
    #[case(Color8888::new(0, 0, 255, 255), 0x001F)]
    #[case(Color8888::new(4, 2, 4, 255), 0x0000)]
    #[case(Color8888::new(5, 3, 5, 255), 0x0821)]
    #[case(Color8888::new(10, 20, 30, 255), 0x08A4)]
    #[case(Color8888::new(251, 253, 251, 255), 0xFFFF)]
    fn color_to_565_rounds(#[case] color: Color8888, #[case] expected: u16) {
        assert_eq!(color_to_565(color), expected);
    }

    #[test]
    fn indices_pick_endpoints_and_blends() {
        let white = Color8888::new(255, 255, 255, 255);
        let black = Color8888::new(0, 0, 0, 255);
        let mut block = Decoded4x4Block::new(white);
        block.set_pixel(1, 0, black);
        block.set_pixel(2, 0, Color8888::new(170, 170, 170, 255));
        block.set_pixel(3, 0, Color8888::new(85, 85, 85, 255));

        let indices = emit_color_indices(&block, black, white);
        assert_eq!(indices & 0xFF, 0b11_10_01_00);
        assert_eq!(indices >> 8, 0);
    }

    #[test]
    fn indices_decode_close_to_source() {
        let image = gradient_rgba8(4, 4);
        let block = block_from_rgba8(&image);
        let (min, max) = get_min_max_colors(&block);
        let indices = emit_color_indices(&block, min, max);

        let palette = bc1_palette(
            Color565::from_raw(color_to_565(max)),
            Color565::from_raw(color_to_565(min)),
            true,
        );
        for (index, pixel) in block.pixels.iter().enumerate() {
            let chosen = ((indices >> (index * 2)) & 0b11) as usize;
            let best = palette.iter().map(|entry| entry.rgb_distance(pixel)).min().unwrap();
            // The branch-free selection assumes the palette lies on a line.
            assert!(palette[chosen].rgb_distance(pixel) <= best + 24);
        }
    }
}
