/// Size in bytes of a [`Decoded4x4BlockRg16`] laid out as `R16G16` pixels.
pub const DECODED_RG16_BLOCK_BYTES: usize = 64;

/// Represents a decoded 4x4 block of two channel, signed 16-bit pixels.
///
/// Pixels are stored in row-major order as `[red, green]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decoded4x4BlockRg16 {
    /// The pixels of the block, row-major.
    pub pixels: [[i16; 2]; 16],
}

impl Decoded4x4BlockRg16 {
    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 4 or above.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> [i16; 2] {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside the 4x4 block");
        self.pixels[y * 4 + x]
    }

    /// Returns the block as 16 little-endian `R16G16` pixels.
    pub fn to_bytes(&self) -> [u8; DECODED_RG16_BLOCK_BYTES] {
        let mut bytes = [0u8; DECODED_RG16_BLOCK_BYTES];
        for (pixel, out) in self.pixels.iter().zip(bytes.chunks_exact_mut(4)) {
            out[0..2].copy_from_slice(&pixel[0].to_le_bytes());
            out[2..4].copy_from_slice(&pixel[1].to_le_bytes());
        }
        bytes
    }
}
