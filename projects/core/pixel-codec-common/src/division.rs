//! Exact integer division lookup tables used by the block decoders.
//!
//! Interpolated palette entries are weighted sums of two endpoints divided by a small constant.
//! The tables below hold the quotient for every possible numerator so decoding is a single
//! lookup per entry and never depends on floating point rounding.
//!
//! Unsigned tables cover `[0, 256 * divisor - 1]`, signed tables cover
//! `[-(128 * divisor - 1), 128 * divisor - 1]` and truncate toward zero.

/// Largest numerator accepted by [`div3`].
pub const DIV3_MAX: usize = 767;
/// Largest numerator accepted by [`div5`].
pub const DIV5_MAX: usize = 1279;
/// Largest numerator accepted by [`div7`].
pub const DIV7_MAX: usize = 1791;
/// Largest magnitude accepted by [`div5_signed`].
pub const SDIV5_MAX: i32 = 639;
/// Largest magnitude accepted by [`div7_signed`].
pub const SDIV7_MAX: i32 = 895;

const fn build_unsigned<const N: usize>(divisor: usize) -> [u8; N] {
    let mut table = [0u8; N];
    let mut x = 0;
    while x < N {
        table[x] = (x / divisor) as u8;
        x += 1;
    }
    table
}

const fn build_signed<const N: usize>(divisor: i32, max: i32) -> [i8; N] {
    let mut table = [0i8; N];
    let mut x = 0;
    while x < N {
        table[x] = ((x as i32 - max) / divisor) as i8;
        x += 1;
    }
    table
}

/// Quotients of `x / 3` for `x` in `0..=767`.
pub static DIV3_TABLE: [u8; DIV3_MAX + 1] = build_unsigned(3);
/// Quotients of `x / 5` for `x` in `0..=1279`.
pub static DIV5_TABLE: [u8; DIV5_MAX + 1] = build_unsigned(5);
/// Quotients of `x / 7` for `x` in `0..=1791`.
pub static DIV7_TABLE: [u8; DIV7_MAX + 1] = build_unsigned(7);
static SDIV5_TABLE: [i8; (SDIV5_MAX * 2 + 1) as usize] = build_signed(5, SDIV5_MAX);
static SDIV7_TABLE: [i8; (SDIV7_MAX * 2 + 1) as usize] = build_signed(7, SDIV7_MAX);

/// Returns `x / 3`.
///
/// # Panics
///
/// If `x > 767`.
#[inline(always)]
pub fn div3(x: u32) -> u8 {
    DIV3_TABLE[x as usize]
}

/// Returns `x / 5`.
///
/// # Panics
///
/// If `x > 1279`.
#[inline(always)]
pub fn div5(x: u32) -> u8 {
    DIV5_TABLE[x as usize]
}

/// Returns `x / 7`.
///
/// # Panics
///
/// If `x > 1791`.
#[inline(always)]
pub fn div7(x: u32) -> u8 {
    DIV7_TABLE[x as usize]
}

/// Returns `x / 5` truncated toward zero.
///
/// # Panics
///
/// If `x` is outside `-639..=639`.
#[inline(always)]
pub fn div5_signed(x: i32) -> i8 {
    SDIV5_TABLE[(x + SDIV5_MAX) as usize]
}

/// Returns `x / 7` truncated toward zero.
///
/// # Panics
///
/// If `x` is outside `-895..=895`.
#[inline(always)]
pub fn div7_signed(x: i32) -> i8 {
    SDIV7_TABLE[(x + SDIV7_MAX) as usize]
}
