//! Least-squares refinement of BC1 colour endpoints.
//!
//! Given an index assignment, each pixel is modelled as `w * c0 + (1 - w) * c1` with
//! `w = 1, 0, 2/3, 1/3` for codes 0 to 3. Solving the normal equations per channel gives the
//! endpoints that minimise the squared error for that assignment. Weights are kept scaled by 3
//! so the whole solve stays in integers and is reproducible on every target.

use super::base::emit_color_indices;
use crate::util::bc1_palette;
use pixel_codec_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Endpoint weight of `c0` for each index, times 3.
const WEIGHTS: [i64; 4] = [3, 0, 2, 1];

/// Encoded colour part of a block: two endpoints and the packed indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ColorEndpoints {
    pub c0: Color565,
    pub c1: Color565,
    pub indices: u32,
}

/// Sum of squared RGB differences between `block` and what a decoder makes of `endpoints`.
pub(crate) fn block_error(block: &Decoded4x4Block, endpoints: &ColorEndpoints) -> u32 {
    let palette = bc1_palette(endpoints.c0, endpoints.c1, false);
    let mut error = 0u32;
    for (index, pixel) in block.pixels.iter().enumerate() {
        let decoded = palette[((endpoints.indices >> (index * 2)) & 0b11) as usize];
        for channel in 0..3 {
            let diff = decoded.channel(channel) as i32 - pixel.channel(channel) as i32;
            error += (diff * diff) as u32;
        }
    }
    error
}

/// Rounds `numerator / denominator` to the nearest integer, clamped to `[0, max]`.
#[inline(always)]
fn quantize(numerator: i64, denominator: i64, max: i64) -> u16 {
    if numerator <= 0 {
        return 0;
    }
    ((numerator + denominator / 2) / denominator).min(max) as u16
}

/// Solves for new endpoints from the current indices, quantized to 5:6:5 with rounding.
fn solve_endpoints(block: &Decoded4x4Block, indices: u32) -> (Color565, Color565) {
    let mut aa = 0i64;
    let mut bb = 0i64;
    let mut ab = 0i64;
    let mut ax = [0i64; 3];
    let mut bx = [0i64; 3];
    for (index, pixel) in block.pixels.iter().enumerate() {
        let alpha = WEIGHTS[((indices >> (index * 2)) & 0b11) as usize];
        let beta = 3 - alpha;
        aa += alpha * alpha;
        bb += beta * beta;
        ab += alpha * beta;
        for channel in 0..3 {
            let value = pixel.channel(channel) as i64;
            ax[channel] += alpha * value;
            bx[channel] += beta * value;
        }
    }

    let det = aa * bb - ab * ab;
    let mut e0 = [0u16; 3];
    let mut e1 = [0u16; 3];
    let max = [31i64, 63, 31];
    for channel in 0..3 {
        if det == 0 {
            // Every pixel uses the same index, so only the mean is known.
            let sum: i64 = block.pixels.iter().map(|p| p.channel(channel) as i64).sum();
            e0[channel] = quantize(sum * max[channel], 16 * 255, max[channel]);
            e1[channel] = e0[channel];
        } else {
            // c = 3 * (x * other - y * cross) / det, then scaled from [0, 255] to [0, max].
            let n0 = 3 * (ax[channel] * bb - bx[channel] * ab);
            let n1 = 3 * (bx[channel] * aa - ax[channel] * ab);
            e0[channel] = quantize(n0 * max[channel], det * 255, max[channel]);
            e1[channel] = quantize(n1 * max[channel], det * 255, max[channel]);
        }
    }

    let pack = |e: [u16; 3]| Color565::from_raw((e[0] << 11) | (e[1] << 5) | e[2]);
    (pack(e0), pack(e1))
}

/// Runs up to `passes` refinement passes, keeping each only if it lowers [`block_error`].
pub(crate) fn refine_endpoints(
    block: &Decoded4x4Block,
    start: ColorEndpoints,
    passes: u32,
) -> ColorEndpoints {
    let mut best = start;
    let mut best_error = block_error(block, &best);

    for _ in 0..passes {
        if best_error == 0 {
            break;
        }

        let (mut c0, mut c1) = solve_endpoints(block, best.indices);
        if c1.greater_than(&c0) {
            core::mem::swap(&mut c0, &mut c1);
        }
        let max: Color8888 = c0.to_color_8888();
        let min: Color8888 = c1.to_color_8888();
        let candidate = ColorEndpoints {
            c0,
            c1,
            indices: emit_color_indices(block, min, max),
        };

        let error = block_error(block, &candidate);
        if error >= best_error {
            break;
        }
        best = candidate;
        best_error = error;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn inset_start(block: &Decoded4x4Block) -> ColorEndpoints {
        let (min, max) = get_min_max_colors(block);
        ColorEndpoints {
            c0: Color565::from_raw(color_to_565(max)),
            c1: Color565::from_raw(color_to_565(min)),
            indices: emit_color_indices(block, min, max),
        }
    }

    #[test]
    fn solid_block_stays_at_rounded_mean() {
        let block = Decoded4x4Block::new(Color8888::new(10, 20, 30, 255));
        let start = inset_start(&block);
        let refined = refine_endpoints(&block, start, 1);

        // 10 -> 1 (8), 20 -> 5 (20), 30 -> 4 (33)
        assert_eq!(refined.c0, Color565::from_raw((1 << 11) | (5 << 5) | 4));
        assert_eq!(refined.c0, refined.c1);
        assert_eq!(refined, start);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(8)]
    fn never_worse_than_start(#[case] passes: u32) {
        let mut block = Decoded4x4Block::default();
        let image = gradient_rgba8(4, 4);
        for (pixel, bytes) in block.pixels.iter_mut().zip(image.chunks_exact(4)) {
            *pixel = Color8888::new(bytes[0], bytes[1], bytes[2], 255);
        }

        let start = inset_start(&block);
        let refined = refine_endpoints(&block, start, passes);
        assert!(block_error(&block, &refined) <= block_error(&block, &start));
        if passes == 0 {
            assert_eq!(refined, start);
        }
    }

    #[test]
    fn exact_endpoints_are_recovered() {
        // Two colours that are exactly representable in 5:6:5.
        let a = Color565::from_raw(0xF81F).to_color_8888();
        let b = Color565::from_raw(0x07E0).to_color_8888();
        let mut block = Decoded4x4Block::new(a);
        for x in 0..4 {
            block.set_pixel(x, 2, b);
            block.set_pixel(x, 3, b);
        }

        let refined = refine_endpoints(&block, inset_start(&block), 2);
        assert_eq!(block_error(&block, &refined), 0);
    }

    #[test]
    fn quantize_rounds_and_clamps() {
        assert_eq!(quantize(-5, 3, 31), 0);
        assert_eq!(quantize(7, 2, 31), 4);
        assert_eq!(quantize(5, 2, 31), 3);
        assert_eq!(quantize(1000, 1, 31), 31);
    }
}
