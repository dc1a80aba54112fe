/// Represents a single RGBA8888 pixel colour.
///
/// Used both as a decoded BC1/BC3 pixel and as an endpoint colour during compression.
/// The memory layout matches an `R8G8B8A8` pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_codec_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads a colour from 4 bytes laid out as `R8G8B8A8`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the colour as 4 bytes laid out as `R8G8B8A8`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the channel at `index` (0 = red .. 3 = alpha).
    ///
    /// # Panics
    ///
    /// If `index > 3`.
    #[inline]
    pub const fn channel(&self, index: usize) -> u8 {
        match index {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            3 => self.a,
            _ => panic!("channel index out of range"),
        }
    }

    /// Same colour with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Sum of absolute differences over the red, green and blue channels.
    #[inline]
    pub fn rgb_distance(&self, other: &Self) -> u32 {
        (self.r as i32 - other.r as i32).unsigned_abs()
            + (self.g as i32 - other.g as i32).unsigned_abs()
            + (self.b as i32 - other.b as i32).unsigned_abs()
    }
}
