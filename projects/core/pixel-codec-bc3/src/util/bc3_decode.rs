//! BC3 (DXT5) decoding implementation; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Interpolated alpha values use exact integer division through lookup tables, so results
//! match the DX9 'ideal' decoder rather than any particular vendor's hardware.

use pixel_codec_bc1::util::{bc1_palette, expand_indices};
use pixel_codec_common::{
    color_565::Color565,
    decoded_4x4_block::Decoded4x4Block,
    division::{div5, div7},
};

/// Size of a BC3 block in bytes.
pub const BC3_BLOCK_BYTES: usize = 16;

/// Builds the 8 entry alpha palette for a pair of alpha endpoints.
///
/// If `a0 > a1`, codes 2 to 7 interpolate between the endpoints in sevenths. Otherwise codes
/// 2 to 5 interpolate in fifths, code 6 is 0 and code 7 is 255.
#[inline]
pub fn bc3_alpha_palette(a0: u8, a1: u8) -> [u8; 8] {
    let (a0, a1) = (a0 as u32, a1 as u32);
    let mut palette = [0u8; 8];
    palette[0] = a0 as u8;
    palette[1] = a1 as u8;
    if a0 > a1 {
        for k in 2..8 {
            palette[k] = div7((8 - k as u32) * a0 + (k as u32 - 1) * a1);
        }
    } else {
        for k in 2..6 {
            palette[k] = div5((6 - k as u32) * a0 + (k as u32 - 1) * a1);
        }
        palette[6] = 0;
        palette[7] = 255;
    }
    palette
}

/// Decodes a BC3 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The 16 byte block. Bytes 0-1 are the alpha endpoints, 2-7 hold 16 3-bit alpha
///   indices (LSB first), 8-15 are a BC1 colour block.
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels with alpha
///
/// # Example
///
/// ```
/// use pixel_codec_bc3::util::decode_bc3_block;
///
/// let bc3_block = [0u8; 16];
/// let decoded = decode_bc3_block(&bc3_block);
/// assert_eq!(decoded.get_pixel(0, 0).a, 0);
/// ```
#[inline]
pub fn decode_bc3_block(src: &[u8; BC3_BLOCK_BYTES]) -> Decoded4x4Block {
    let alphas = bc3_alpha_palette(src[0], src[1]);
    let mut alpha_bits = 0u64;
    for (i, byte) in src[2..8].iter().enumerate() {
        alpha_bits |= (*byte as u64) << (i * 8);
    }

    let c0 = Color565::from_le_bytes([src[8], src[9]]);
    let c1 = Color565::from_le_bytes([src[10], src[11]]);
    let colour_indices = u32::from_le_bytes([src[12], src[13], src[14], src[15]]);

    let mut block = expand_indices(&bc1_palette(c0, c1, true), colour_indices);
    for (i, pixel) in block.pixels.iter_mut().enumerate() {
        pixel.a = alphas[((alpha_bits >> (i * 3)) & 0b111) as usize];
    }
    block
}

/// Slice wrapper around [`decode_bc3_block`]
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than 16 bytes.
#[inline]
pub fn decode_bc3_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC3_BLOCK_BYTES] = src.get(..BC3_BLOCK_BYTES)?.try_into().ok()?;
    Some(decode_bc3_block(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    // The fuzz target checks against rgbcx; these pin down a few known blocks.

    #[test]
    fn endpoint_codes_decode_to_endpoints() {
        let mut bc3_block = [0u8; 16];
        bc3_block[0] = 255;
        bc3_block[1] = 0;
        // Pixel 0 -> code 0, pixel 1 -> code 1.
        bc3_block[2] = 0b001_000;

        let decoded = decode_bc3_block(&bc3_block);
        assert_eq!(decoded.get_pixel(0, 0).a, 255);
        assert_eq!(decoded.get_pixel(1, 0).a, 0);
    }

    #[rstest]
    #[case(255, 0, [255, 0, 218, 182, 145, 109, 72, 36])]
    #[case(41, 1, [41, 1, 35, 29, 23, 18, 12, 6])]
    #[case(0, 255, [0, 255, 51, 102, 153, 204, 0, 255])]
    #[case(100, 100, [100, 100, 100, 100, 100, 100, 0, 255])]
    fn alpha_palettes(#[case] a0: u8, #[case] a1: u8, #[case] expected: [u8; 8]) {
        assert_eq!(bc3_alpha_palette(a0, a1), expected);
    }

    #[test]
    fn six_value_mode_block_with_white_colours() {
        let bc3_block = [
            0, 0, // a0 == a1, 6 value mode
            0, 255, 255, 255, 255, 255, // pixels 0-1 code 0, pixel 2 code 4, rest code 7
            255, 255, // c0 = white
            18, 0, // c1 = R:0 G:0 B:18
            0, 0, 0, 250, // last row uses codes 2, 2, 3, 3
        ];

        let white = |a| Color8888::new(255, 255, 255, a);
        let mut expected = Decoded4x4Block::new(white(255));
        expected.set_pixel(0, 0, white(0));
        expected.set_pixel(1, 0, white(0));
        expected.set_pixel(2, 0, white(0));
        expected.set_pixel(0, 3, Color8888::new(170, 170, 219, 255));
        expected.set_pixel(1, 3, Color8888::new(170, 170, 219, 255));
        expected.set_pixel(2, 3, Color8888::new(85, 85, 183, 255));
        expected.set_pixel(3, 3, Color8888::new(85, 85, 183, 255));

        assert_eq!(decode_bc3_block_from_slice(&bc3_block), Some(expected));
    }

    #[test]
    fn eight_value_mode_block() {
        let bc3_block = [
            41, 1, 253, 178, 0, 0, 0, 0, // a0 > a1
            10, 0, 0, 0, 0, 0, 77, 0, // c0 = B:10, c1 = black
        ];

        let decoded = decode_bc3_block(&bc3_block);
        let alphas: Vec<u8> = decoded.pixels.iter().map(|p| p.a).collect();
        assert_eq!(
            alphas,
            [18, 6, 29, 1, 29, 1, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41]
        );
        assert_eq!(decoded.get_pixel(0, 2), Color8888::new(0, 0, 0, 41));
        assert_eq!(decoded.get_pixel(1, 2), Color8888::new(0, 0, 27, 41));
        assert_eq!(decoded.get_pixel(2, 2), Color8888::new(0, 0, 82, 41));
    }

    #[test]
    fn colour_half_ignores_endpoint_order() {
        // c0 < c1 would select 3-colour mode in BC1; BC3 always uses 4 colours.
        let mut bc3_block = [0u8; 16];
        bc3_block[10..12].copy_from_slice(&0xFFFFu16.to_le_bytes());
        bc3_block[12] = 0b11_10_00_00;

        let decoded = decode_bc3_block(&bc3_block);
        assert_eq!(decoded.get_pixel(2, 0), Color8888::new(85, 85, 85, 0));
        assert_eq!(decoded.get_pixel(3, 0), Color8888::new(170, 170, 170, 0));
    }

    #[test]
    fn slice_too_small() {
        assert!(decode_bc3_block_from_slice(&[0u8; 15]).is_none());
    }
}
