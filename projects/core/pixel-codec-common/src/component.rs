//! Pixel components (channels) and small sets thereof.

use derive_enum_all_values::AllValues;

/// A single component (channel) of a pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum PixelComponent {
    /// Red colour channel.
    Red,
    /// Green colour channel.
    Green,
    /// Blue colour channel.
    Blue,
    /// Alpha (opacity) channel.
    Alpha,
    /// Luminance.
    ///
    /// Maps to the red field on one and two channel colour formats, and to a Rec.601
    /// weighted sum of red, green and blue on RGB formats.
    Luminance,
    /// Depth.
    Depth,
    /// Stencil.
    Stencil,
}

impl PixelComponent {
    /// Position of this component inside a [`PixelComponents`] mask.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            PixelComponent::Red => "red",
            PixelComponent::Green => "green",
            PixelComponent::Blue => "blue",
            PixelComponent::Alpha => "alpha",
            PixelComponent::Luminance => "luminance",
            PixelComponent::Depth => "depth",
            PixelComponent::Stencil => "stencil",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl core::fmt::Display for PixelComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`PixelComponent`]s, stored as a bit mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct PixelComponents(u8);

impl PixelComponents {
    /// The empty set.
    pub const NONE: Self = Self(0);
    /// Red only.
    pub const R: Self = Self(PixelComponent::Red.bit());
    /// Red and green.
    pub const RG: Self = Self::R.with(PixelComponent::Green);
    /// Red, green and blue.
    pub const RGB: Self = Self::RG.with(PixelComponent::Blue);
    /// Red, green, blue and alpha.
    pub const RGBA: Self = Self::RGB.with(PixelComponent::Alpha);
    /// Depth only.
    pub const D: Self = Self(PixelComponent::Depth.bit());
    /// Stencil only.
    pub const S: Self = Self(PixelComponent::Stencil.bit());
    /// Depth and stencil.
    pub const DS: Self = Self::D.with(PixelComponent::Stencil);

    /// Returns a copy of this set with `component` added.
    #[inline]
    pub const fn with(self, component: PixelComponent) -> Self {
        Self(self.0 | component.bit())
    }

    /// Returns a copy of this set with `component` removed.
    #[inline]
    pub const fn without(self, component: PixelComponent) -> Self {
        Self(self.0 & !component.bit())
    }

    /// Whether `component` is part of the set.
    #[inline]
    pub const fn contains(self, component: PixelComponent) -> bool {
        self.0 & component.bit() != 0
    }

    /// Number of components in the set.
    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the components in declaration order.
    pub fn iter(self) -> impl Iterator<Item = PixelComponent> {
        PixelComponent::all_values()
            .iter()
            .copied()
            .filter(move |c| self.contains(*c))
    }
}
