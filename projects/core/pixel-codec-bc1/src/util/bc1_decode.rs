//! BC1 (DXT1) decoding implementation; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>
//!
//! Interpolated colours use exact integer division (`(2*c0 + c1) / 3`), through a lookup table.
//! The 3-colour mode decodes colour 3 as opaque black.

use pixel_codec_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block, division::div3,
};

/// Size of a BC1 block in bytes.
pub const BC1_BLOCK_BYTES: usize = 8;

/// Builds the 4 entry palette for a pair of endpoints.
///
/// Colours 2 and 3 are the 1/3 and 2/3 blends when `c0 > c1`; otherwise colour 2 is the
/// midpoint and colour 3 is black. Alpha is always 255.
///
/// With `force_four_colours` the comparison is skipped and the 4-colour palette is always
/// produced, which is how the colour half of a BC3 block is decoded.
#[inline(always)]
pub fn bc1_palette(c0: Color565, c1: Color565, force_four_colours: bool) -> [Color8888; 4] {
    let e0 = c0.to_color_8888();
    let e1 = c1.to_color_8888();

    let blend = |weight0: u32, weight1: u32| {
        Color8888::new(
            div3(weight0 * e0.r as u32 + weight1 * e1.r as u32),
            div3(weight0 * e0.g as u32 + weight1 * e1.g as u32),
            div3(weight0 * e0.b as u32 + weight1 * e1.b as u32),
            255,
        )
    };

    if force_four_colours || c0.greater_than(&c1) {
        [e0, e1, blend(2, 1), blend(1, 2)]
    } else {
        let midpoint = Color8888::new(
            ((e0.r as u32 + e1.r as u32) / 2) as u8,
            ((e0.g as u32 + e1.g as u32) / 2) as u8,
            ((e0.b as u32 + e1.b as u32) / 2) as u8,
            255,
        );
        [e0, e1, midpoint, Color8888::new(0, 0, 0, 255)]
    }
}

/// Expands 32 bits of 2-bit indices (LSB first, row-major) through `palette`.
///
/// Also used for the colour half of BC3 blocks.
#[inline(always)]
pub fn expand_indices(palette: &[Color8888; 4], indices: u32) -> Decoded4x4Block {
    let mut result = Decoded4x4Block::default();
    for (index, pixel) in result.pixels.iter_mut().enumerate() {
        *pixel = palette[((indices >> (index * 2)) & 0b11) as usize];
    }
    result
}

/// Decodes a BC1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The 8 byte BC1 block: two little-endian RGB565 endpoints followed by 32 bits of
///   2-bit indices.
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels, all fully opaque.
///
/// # Example
///
/// ```
/// use pixel_codec_bc1::util::decode_bc1_block;
///
/// let bc1_block = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0]; // solid red
/// let decoded = decode_bc1_block(&bc1_block);
/// assert_eq!(decoded.get_pixel(3, 3).r, 255);
/// ```
#[inline]
pub fn decode_bc1_block(src: &[u8; BC1_BLOCK_BYTES]) -> Decoded4x4Block {
    let c0 = Color565::from_le_bytes([src[0], src[1]]);
    let c1 = Color565::from_le_bytes([src[2], src[3]]);
    let indices = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);
    expand_indices(&bc1_palette(c0, c1, false), indices)
}

/// Slice wrapper around [`decode_bc1_block`]
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than 8 bytes.
#[inline]
pub fn decode_bc1_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC1_BLOCK_BYTES] = src.get(..BC1_BLOCK_BYTES)?.try_into().ok()?;
    Some(decode_bc1_block(block))
}
