//! Edge padding for blocks that hang over the right or bottom edge of an image.
//!
//! Missing pixels are filled by replicating the ones that are present:
//!
//! ```text
//! 1 pixel:  p0 p0 p0 p0
//! 2 pixels: p0 p0 p1 p1
//! 3 pixels: p0 p1 p2 p2
//! ```
//!
//! Lines are replicated the same way when the block is short.

/// Largest pixel size (in bytes) of any uncompressed format.
pub const MAX_PIXEL_BYTES: usize = 32;

/// Bytes needed to stage a padded 4x4 tile of the largest pixel format.
pub const TILE_BYTES: usize = 16 * MAX_PIXEL_BYTES;

/// Source index of each of the 4 destination positions when only `valid` of them exist.
///
/// # Panics
///
/// If `valid` is 0 or greater than 4.
#[inline]
pub const fn padding_sources(valid: usize) -> [usize; 4] {
    match valid {
        1 => [0, 0, 0, 0],
        2 => [0, 0, 1, 1],
        3 => [0, 1, 2, 2],
        4 => [0, 1, 2, 3],
        _ => panic!("a block line holds 1 to 4 pixels"),
    }
}

/// Copies one line of `valid` pixels into a line of 4, replicating edge pixels.
///
/// # Parameters
///
/// - `src`: At least `valid * pixel_size` bytes.
/// - `pixel_size`: Bytes per pixel.
/// - `valid`: Number of pixels present in `src` (1 to 4).
/// - `dst`: At least `4 * pixel_size` bytes.
#[inline]
pub fn copy_line_data(src: &[u8], pixel_size: usize, valid: usize, dst: &mut [u8]) {
    for (position, source) in padding_sources(valid).into_iter().enumerate() {
        dst[position * pixel_size..(position + 1) * pixel_size]
            .copy_from_slice(&src[source * pixel_size..(source + 1) * pixel_size]);
    }
}

/// Copies a partial block into a tightly packed 4x4 tile, replicating edge pixels and lines.
///
/// # Parameters
///
/// - `src`: Image data starting at the block's top left pixel.
/// - `row_pitch`: Bytes between two image rows.
/// - `pixel_size`: Bytes per pixel.
/// - `columns`, `rows`: Pixels present horizontally and vertically (1 to 4).
/// - `dst`: At least `16 * pixel_size` bytes; receives rows of `4 * pixel_size` bytes.
///
/// # Returns
///
/// Number of source bytes read.
pub fn copy_block_data(
    src: &[u8],
    row_pitch: usize,
    pixel_size: usize,
    columns: usize,
    rows: usize,
    dst: &mut [u8],
) -> usize {
    let line_bytes = 4 * pixel_size;
    for (line, source_row) in padding_sources(rows).into_iter().enumerate() {
        copy_line_data(
            &src[source_row * row_pitch..],
            pixel_size,
            columns,
            &mut dst[line * line_bytes..(line + 1) * line_bytes],
        );
    }
    rows * columns * pixel_size
}
