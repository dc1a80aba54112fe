use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// as stored in the endpoints of BC1 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from two little-endian bytes
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// Quantizes 8-bit RGB components to 5:6:5 by truncating the low bits.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3),
        }
    }

    /// Quantizes the RGB part of a [`Color8888`], see [`Color565::from_rgb`].
    #[inline]
    pub const fn from_color_8888(color: Color8888) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Returns the value as two little-endian bytes, as written into a block.
    #[inline]
    pub const fn to_le_bytes(&self) -> [u8; 2] {
        self.value.to_le_bytes()
    }

    // Endpoints are expanded from 5 or 6 bits to 8 bits by replicating the top bits,
    // matching what hardware decoders do. A plain shift would decode 0xF800 as 248 red.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Compares two [`Color565`] values as plain 16-bit integers.
    ///
    /// This decides between the 4-colour and 3-colour BC1 modes.
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_codec_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_raw(0xF800).to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }
}
