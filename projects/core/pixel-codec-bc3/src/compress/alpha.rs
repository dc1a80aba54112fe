use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Chooses the closest of the 8 interpolated alpha values for each pixel of a block.
///
/// The block is encoded with `max_alpha` as the first endpoint, so a decoder sees
/// `max_alpha > min_alpha` and uses the 8 value ramp. Each pixel's code is found by counting
/// how many midpoints between neighbouring ramp values it falls under, then remapping the count
/// to the order codes appear in the block (0 = max, 1 = min, 2..7 from max towards min).
///
/// # Returns
///
/// 16 3-bit codes packed LSB first, pixel 0 in the lowest bits.
#[inline]
pub fn emit_alpha_indices(block: &Decoded4x4Block, min_alpha: u8, max_alpha: u8) -> [u8; 6] {
    let (min, max) = (min_alpha as u32, max_alpha as u32);
    let mid = (max - min) / 14;

    let mut thresholds = [0u32; 7];
    thresholds[0] = min + mid;
    for (k, threshold) in thresholds.iter_mut().enumerate().skip(1) {
        let k = k as u32;
        *threshold = ((7 - k) * max + k * min) / 7 + mid;
    }

    let mut bits = 0u64;
    for (i, pixel) in block.pixels.iter().enumerate() {
        let alpha = pixel.a as u32;
        let below: u32 = thresholds.iter().map(|t| (alpha <= *t) as u32).sum();
        let mut index = (below + 1) & 7;
        index ^= (2 > index) as u32;
        bits |= (index as u64) << (i * 3);
    }

    let mut out = [0u8; 6];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (bits >> (i * 8)) as u8;
    }
    out
}
