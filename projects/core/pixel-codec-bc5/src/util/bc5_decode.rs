//! BC5 decoding, two BC4-style signed ramps per block.
//!
//! Endpoints are signed bytes. `-128` is treated as `-127`, except for the pair `-127, -128`
//! which is rejected. Decoded values in `[-127, 127]` are stretched to the full `i16` range.

use super::Decoded4x4BlockRg16;
use crate::error::Bc5DecodeError;
use pixel_codec_common::division::{div5_signed, div7_signed};

/// Size of a BC5 block in bytes.
pub const BC5_BLOCK_BYTES: usize = 16;

/// Builds the 8 entry ramp for one half of a BC5 block.
///
/// # Errors
///
/// [`Bc5DecodeError::MalformedBlock`] for the endpoint pair `-127, -128`.
pub fn bc5_channel_palette(lum0: i8, lum1: i8) -> Result<[i8; 8], Bc5DecodeError> {
    if lum0 == -127 && lum1 == -128 {
        return Err(Bc5DecodeError::MalformedBlock { lum0, lum1 });
    }

    let l0 = lum0.max(-127) as i32;
    let l1 = lum1.max(-127) as i32;
    let mut palette = [0i8; 8];
    palette[0] = l0 as i8;
    palette[1] = l1 as i8;
    if l0 > l1 {
        for k in 2..8 {
            let k = k as i32;
            palette[k as usize] = div7_signed((8 - k) * l0 + (k - 1) * l1);
        }
    } else {
        for k in 2..6 {
            let k = k as i32;
            palette[k as usize] = div5_signed((6 - k) * l0 + (k - 1) * l1);
        }
        palette[6] = -127;
        palette[7] = 127;
    }
    Ok(palette)
}

/// Maps a decoded value in `[-127, 127]` to `[-32768, 32767]`.
#[inline(always)]
pub const fn expand_snorm8(value: i8) -> i16 {
    ((value as i32 + 127) * 65535 / 254 - 32768) as i16
}

#[inline]
fn decode_channel(
    half: &[u8],
    channel: usize,
    block: &mut Decoded4x4BlockRg16,
) -> Result<(), Bc5DecodeError> {
    let palette = bc5_channel_palette(half[0] as i8, half[1] as i8)?;
    let mut bits = 0u64;
    for (i, byte) in half[2..8].iter().enumerate() {
        bits |= (*byte as u64) << (i * 8);
    }

    for (i, pixel) in block.pixels.iter_mut().enumerate() {
        let code = ((bits >> (i * 3)) & 0b111) as usize;
        pixel[channel] = expand_snorm8(palette[code]);
    }
    Ok(())
}

/// Decodes a BC5 block into 16 signed `R16G16` pixels.
///
/// # Parameters
///
/// - `src`: The 16 byte block. Bytes 0-7 hold the red ramp, bytes 8-15 the green ramp. Each half
///   is two signed endpoints followed by 16 3-bit codes, LSB first.
///
/// # Errors
///
/// [`Bc5DecodeError::MalformedBlock`] if either half uses the endpoint pair `-127, -128`.
///
/// # Example
///
/// ```
/// use pixel_codec_bc5::decode_bc5_block;
///
/// // Both ramps at +127.
/// let block = [127, 127, 0, 0, 0, 0, 0, 0, 127, 127, 0, 0, 0, 0, 0, 0];
/// let decoded = decode_bc5_block(&block).unwrap();
/// assert_eq!(decoded.get_pixel(0, 0), [i16::MAX, i16::MAX]);
/// ```
#[inline]
pub fn decode_bc5_block(src: &[u8; BC5_BLOCK_BYTES]) -> Result<Decoded4x4BlockRg16, Bc5DecodeError> {
    let mut block = Decoded4x4BlockRg16::default();
    decode_channel(&src[0..8], 0, &mut block)?;
    decode_channel(&src[8..16], 1, &mut block)?;
    Ok(block)
}

/// Slice wrapper around [`decode_bc5_block`]
///
/// # Returns
///
/// [`None`] if the slice is shorter than 16 bytes, else the result of [`decode_bc5_block`].
#[inline]
pub fn decode_bc5_block_from_slice(
    src: &[u8],
) -> Option<Result<Decoded4x4BlockRg16, Bc5DecodeError>> {
    let block: &[u8; BC5_BLOCK_BYTES] = src.get(..BC5_BLOCK_BYTES)?.try_into().ok()?;
    Some(decode_bc5_block(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(-127, i16::MIN)]
    #[case(127, i16::MAX)]
    #[case(0, -1)]
    #[case(-1, -259)]
    fn expands_to_full_range(#[case] value: i8, #[case] expected: i16) {
        assert_eq!(expand_snorm8(value), expected);
    }

    #[rstest]
    #[case(127, -127, [127, -127, 90, 54, 18, -18, -54, -90])]
    #[case(-127, 127, [-127, 127, -76, -25, 25, 76, -127, 127])]
    #[case(-128, 127, [-127, 127, -76, -25, 25, 76, -127, 127])]
    #[case(10, 10, [10, 10, 10, 10, 10, 10, -127, 127])]
    fn channel_palettes(#[case] lum0: i8, #[case] lum1: i8, #[case] expected: [i8; 8]) {
        assert_eq!(bc5_channel_palette(lum0, lum1), Ok(expected));
    }

    #[test]
    fn rejects_malformed_endpoints() {
        let mut block = [0u8; 16];
        block[8] = -127i8 as u8;
        block[9] = -128i8 as u8;
        assert_eq!(
            decode_bc5_block(&block),
            Err(Bc5DecodeError::MalformedBlock { lum0: -127, lum1: -128 })
        );
    }

    #[test]
    fn decodes_channels_independently() {
        let mut block = [0u8; 16];
        // Red: lum0 = 127, lum1 = -127, pixel 0 -> code 1, pixel 1 -> code 2.
        block[0] = 127;
        block[1] = -127i8 as u8;
        block[2] = 0b010_001;
        // Green: 6 value mode, pixel 0 -> code 7, pixel 1 -> code 6.
        block[8] = 0;
        block[9] = 0;
        block[10] = 0b110_111;

        let decoded = decode_bc5_block(&block).unwrap();
        assert_eq!(decoded.get_pixel(0, 0), [i16::MIN, i16::MAX]);
        assert_eq!(decoded.get_pixel(1, 0), [expand_snorm8(90), i16::MIN]);
        assert_eq!(decoded.get_pixel(2, 0), [i16::MAX, expand_snorm8(0)]);
    }

    #[test]
    fn slice_too_small() {
        assert!(decode_bc5_block_from_slice(&[0u8; 15]).is_none());
        assert!(matches!(decode_bc5_block_from_slice(&[0u8; 16]), Some(Ok(_))));
    }
}
