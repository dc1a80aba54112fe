//! # Format Registry
//!
//! Every [`PixelFormat`] tag has exactly one [`FormatDescriptor`], a piece of `const` data that
//! describes the memory layout of a pixel (or of a block, for compressed formats).
//!
//! The tags use the same integer values as `VkFormat`, so they can be handed straight to a GPU
//! API or stored in a file.
//!
//! ## Field Layout
//!
//! Uncompressed pixels are read as a little-endian bit array. A [`ChannelField`] names the
//! component stored at a given bit offset and width, which describes byte aligned formats
//! (`R8G8B8A8Unorm`: red at bit 0, green at bit 8, ...) and packed ones (`R5G6B5UnormPack16`:
//! red at bit 11, green at bit 5, blue at bit 0) the same way.
//!
//! Fields are listed in the order the components appear in the format's name, which is what
//! [`FormatDescriptor::channel_order`] is derived from.
//!
//! ## Usage
//!
//! ```
//! use pixel_codec_common::format::{describe, PixelFormat};
//!
//! let descriptor = describe(PixelFormat::B8G8R8A8Srgb);
//! assert_eq!(descriptor.byte_size, 4);
//! assert!(descriptor.has_alpha());
//! assert!(descriptor.is_srgb());
//! assert_eq!(PixelFormat::from_name("bgra32srgb"), Ok(PixelFormat::B8G8R8A8Srgb));
//! ```

mod table;

use crate::component::{PixelComponent, PixelComponents};
use crate::error::FormatError;
pub use table::PixelFormat;

/// How the bits of a field are interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumericFormat {
    /// Unsigned, normalised to `[0, 1]`.
    Unorm,
    /// Signed, normalised to `[-1, 1]`.
    Snorm,
    /// Unsigned integer value exposed as a float.
    Uscaled,
    /// Signed integer value exposed as a float.
    Sscaled,
    /// Unsigned integer.
    Uint,
    /// Signed integer.
    Sint,
    /// Unsigned, normalised, sRGB encoded colour.
    Srgb,
    /// IEEE floating point (16, 32 or 64 bits).
    Sfloat,
    /// Unsigned small floating point (10/11 bit floats, shared exponent).
    Ufloat,
}

impl NumericFormat {
    /// Stored as a plain unsigned integer that rescales exactly between bit widths.
    #[inline]
    pub const fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            NumericFormat::Unorm | NumericFormat::Uscaled | NumericFormat::Uint | NumericFormat::Srgb
        )
    }

    /// Stored as a two's complement integer.
    #[inline]
    pub const fn is_signed_integer(self) -> bool {
        matches!(
            self,
            NumericFormat::Snorm | NumericFormat::Sscaled | NumericFormat::Sint
        )
    }

    /// Stored as a floating point value.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, NumericFormat::Sfloat | NumericFormat::Ufloat)
    }

    /// Values are exposed as the raw integer rather than a normalised value.
    #[inline]
    pub const fn is_integer_valued(self) -> bool {
        matches!(
            self,
            NumericFormat::Uscaled | NumericFormat::Sscaled | NumericFormat::Uint | NumericFormat::Sint
        )
    }
}

/// The location of one component inside a pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChannelField {
    /// The component stored in this field.
    pub component: PixelComponent,
    /// Offset of the least significant bit, counted from bit 0 of byte 0.
    pub offset: u16,
    /// Width in bits.
    pub width: u8,
}

/// Boolean properties of a format, stored as a bit mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// The format stores an alpha channel.
    pub const ALPHA: Self = Self(1 << 0);
    /// The format stores floating point values.
    pub const FLOAT: Self = Self(1 << 1);
    /// The format stores sRGB encoded colour.
    pub const SRGB: Self = Self(1 << 2);
    /// The format is block compressed.
    pub const COMPRESSED: Self = Self(1 << 3);
    /// The format stores depth.
    pub const DEPTH: Self = Self(1 << 4);
    /// The format stores stencil.
    pub const STENCIL: Self = Self(1 << 5);
    /// The format stores colour.
    pub const COLOUR: Self = Self(1 << 6);
    /// Fields are packed into a single integer rather than laid out one after another.
    pub const PACKED: Self = Self(1 << 7);

    /// Whether all flags in `other` are set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    const fn with(self, other: Self, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | other.0)
        } else {
            self
        }
    }

    const fn derive(
        format: u32,
        components: PixelComponents,
        numeric: NumericFormat,
        block_extent: (u32, u32),
        fields: &[ChannelField],
    ) -> Self {
        let depth = components.contains(PixelComponent::Depth);
        let stencil = components.contains(PixelComponent::Stencil);
        Self(0)
            .with(Self::ALPHA, components.contains(PixelComponent::Alpha))
            .with(Self::FLOAT, numeric.is_float())
            .with(Self::SRGB, matches!(numeric, NumericFormat::Srgb))
            .with(Self::COMPRESSED, block_extent.0 > 1 || block_extent.1 > 1)
            .with(Self::DEPTH, depth)
            .with(Self::STENCIL, stencil)
            .with(Self::COLOUR, format != 0 && !depth && !stencil)
            .with(Self::PACKED, fields_are_packed(fields))
    }
}

const fn fields_are_packed(fields: &[ChannelField]) -> bool {
    let mut index = 0;
    while index < fields.len() {
        if fields[index].width % 8 != 0 {
            return true;
        }
        index += 1;
    }
    // Packed formats name their components from the most significant bit down.
    fields.len() > 1 && fields[0].offset > fields[fields.len() - 1].offset
}

/// Order in which the colour components appear in a format's name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// No fields (`Undefined`).
    None,
    /// A single colour channel.
    Single,
    /// Red first (`RG`, `RGB`, `RGBA`).
    Rgb,
    /// Blue first (`BGR`, `BGRA`).
    Bgr,
    /// Alpha, then red.
    Argb,
    /// Alpha, then blue.
    Abgr,
    /// Depth and/or stencil.
    DepthStencil,
    /// Block compressed.
    Compressed,
}

/// Immutable description of a [`PixelFormat`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// The described format.
    pub format: PixelFormat,
    /// Unique short name, see [`PixelFormat::name`].
    pub name: &'static str,
    /// Bytes per pixel, or bytes per block for compressed formats.
    pub byte_size: u32,
    /// Width and height of a block in pixels (`(1, 1)` for uncompressed formats).
    pub block_extent: (u32, u32),
    /// The components the format stores.
    pub components: PixelComponents,
    /// How stored values are interpreted.
    pub numeric: NumericFormat,
    /// Memory layout, empty for compressed formats.
    pub fields: &'static [ChannelField],
    /// Derived boolean properties.
    pub flags: FormatFlags,
}

impl FormatDescriptor {
    /// Whether the format stores an alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.flags.contains(FormatFlags::ALPHA)
    }

    /// Whether the format is block compressed.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        self.flags.contains(FormatFlags::COMPRESSED)
    }

    /// Whether the format stores floating point values.
    #[inline]
    pub const fn is_floating_point(&self) -> bool {
        self.flags.contains(FormatFlags::FLOAT)
    }

    /// Whether the format stores sRGB encoded colour.
    #[inline]
    pub const fn is_srgb(&self) -> bool {
        self.flags.contains(FormatFlags::SRGB)
    }

    /// Whether the format stores depth, stencil or both.
    #[inline]
    pub const fn is_depth_or_stencil(&self) -> bool {
        self.flags.contains(FormatFlags::DEPTH) || self.flags.contains(FormatFlags::STENCIL)
    }

    /// Whether the format stores colour.
    #[inline]
    pub const fn is_colour(&self) -> bool {
        self.flags.contains(FormatFlags::COLOUR)
    }

    /// Whether the fields are packed into a single integer.
    #[inline]
    pub const fn is_packed(&self) -> bool {
        self.flags.contains(FormatFlags::PACKED)
    }

    /// Number of components stored by the format.
    #[inline]
    pub const fn components_count(&self) -> u32 {
        self.components.len()
    }

    /// The field holding `component`, if the format stores it directly.
    pub fn field(&self, component: PixelComponent) -> Option<ChannelField> {
        self.fields
            .iter()
            .copied()
            .find(|field| field.component == component)
    }

    /// Numeric interpretation of a single field.
    ///
    /// Stencil is always an unsigned integer, even when paired with a float or normalised depth.
    #[inline]
    pub const fn field_numeric(&self, field: &ChannelField) -> NumericFormat {
        match field.component {
            PixelComponent::Stencil => NumericFormat::Uint,
            _ => self.numeric,
        }
    }

    /// Order in which the colour components appear in the name.
    pub fn channel_order(&self) -> ChannelOrder {
        if self.is_compressed() {
            return ChannelOrder::Compressed;
        }
        if self.is_depth_or_stencil() {
            return ChannelOrder::DepthStencil;
        }
        match self.fields {
            [] => ChannelOrder::None,
            [_] => ChannelOrder::Single,
            [first, second, ..] => match (first.component, second.component) {
                (PixelComponent::Blue, _) => ChannelOrder::Bgr,
                (PixelComponent::Alpha, PixelComponent::Red) => ChannelOrder::Argb,
                (PixelComponent::Alpha, _) => ChannelOrder::Abgr,
                _ => ChannelOrder::Rgb,
            },
        }
    }

    fn has_layout_of(&self, other: &FormatDescriptor) -> bool {
        self.components == other.components
            && self.block_extent == other.block_extent
            && self.byte_size == other.byte_size
            && self.fields == other.fields
    }

    fn has_field_widths(&self, components: &[PixelComponent], width: u8) -> bool {
        self.fields.len() == components.len()
            && self
                .fields
                .iter()
                .zip(components)
                .all(|(field, component)| field.component == *component && field.width == width)
    }
}

/// Returns the descriptor of `format`.
#[inline]
pub fn describe(format: PixelFormat) -> FormatDescriptor {
    table::DESCRIPTORS[format as usize]
}

/// Returns the descriptor of the format with the raw tag `raw`.
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] when `raw` is not a known tag.
#[inline]
pub fn describe_raw(raw: u32) -> Result<FormatDescriptor, FormatError> {
    PixelFormat::from_raw(raw).map(describe)
}

/// Number of components stored by `format`.
pub fn get_components_count(format: PixelFormat) -> u32 {
    describe(format).components_count()
}

/// Whether `format` stores an alpha channel.
pub fn has_alpha(format: PixelFormat) -> bool {
    describe(format).has_alpha()
}

/// Whether `format` is block compressed.
pub fn is_compressed(format: PixelFormat) -> bool {
    describe(format).is_compressed()
}

/// Whether `format` stores floating point values.
pub fn is_floating_point(format: PixelFormat) -> bool {
    describe(format).is_floating_point()
}

/// Whether `format` stores sRGB encoded colour.
pub fn is_srgb(format: PixelFormat) -> bool {
    describe(format).is_srgb()
}

/// Whether `format` stores depth, stencil or both.
pub fn is_depth_or_stencil(format: PixelFormat) -> bool {
    describe(format).is_depth_or_stencil()
}

/// Whether `format` stores colour.
pub fn is_colour(format: PixelFormat) -> bool {
    describe(format).is_colour()
}

/// Bytes per pixel, or bytes per block for compressed formats.
pub fn get_bytes_per_pixel(format: PixelFormat) -> u32 {
    describe(format).byte_size
}

/// Width and height of a block in pixels.
pub fn get_block_extent(format: PixelFormat) -> (u32, u32) {
    describe(format).block_extent
}

fn find_format(predicate: impl Fn(&FormatDescriptor) -> bool) -> Option<PixelFormat> {
    PixelFormat::all_values()
        .iter()
        .map(|format| describe(*format))
        .find(|descriptor| predicate(descriptor))
        .map(|descriptor| descriptor.format)
}

fn is_plain_colour(descriptor: &FormatDescriptor) -> bool {
    descriptor.is_colour() && !descriptor.is_compressed() && !descriptor.is_packed()
}

/// Returns the one channel format with the same numeric type and bit width as `format`.
///
/// `B8G8R8A8Srgb` yields `R8Srgb`, `R16G16Sfloat` yields `R16Sfloat`.
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] for packed, depth/stencil and compressed formats.
pub fn get_single_component_format(format: PixelFormat) -> Result<PixelFormat, FormatError> {
    let descriptor = describe(format);
    if !is_plain_colour(&descriptor) {
        return Err(FormatError::unsupported(format));
    }

    let width = descriptor.fields[0].width;
    find_format(|candidate| {
        is_plain_colour(candidate)
            && candidate.numeric == descriptor.numeric
            && candidate.has_field_widths(&[PixelComponent::Red], width)
    })
    .ok_or(FormatError::unsupported(format))
}

/// Returns `format` with its alpha channel removed, keeping channel order and numeric type.
///
/// Formats without alpha map to themselves.
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] when no alpha-less counterpart exists.
pub fn get_format_without_alpha(format: PixelFormat) -> Result<PixelFormat, FormatError> {
    let descriptor = describe(format);
    if !descriptor.has_alpha() {
        return Ok(format);
    }

    if descriptor.is_compressed() {
        return match format {
            PixelFormat::Bc1RgbaUnormBlock => Ok(PixelFormat::Bc1RgbUnormBlock),
            PixelFormat::Bc1RgbaSrgbBlock => Ok(PixelFormat::Bc1RgbSrgbBlock),
            PixelFormat::Etc2R8G8B8A1UnormBlock | PixelFormat::Etc2R8G8B8A8UnormBlock => {
                Ok(PixelFormat::Etc2R8G8B8UnormBlock)
            }
            PixelFormat::Etc2R8G8B8A1SrgbBlock | PixelFormat::Etc2R8G8B8A8SrgbBlock => {
                Ok(PixelFormat::Etc2R8G8B8SrgbBlock)
            }
            _ => Err(FormatError::unsupported(format)),
        };
    }

    if !is_plain_colour(&descriptor) {
        return Err(FormatError::unsupported(format));
    }

    let mut order = [PixelComponent::Red; 3];
    let mut count = 0;
    for field in descriptor.fields {
        if field.component != PixelComponent::Alpha && count < order.len() {
            order[count] = field.component;
            count += 1;
        }
    }

    let width = descriptor.fields[0].width;
    find_format(|candidate| {
        is_plain_colour(candidate)
            && candidate.numeric == descriptor.numeric
            && candidate.has_field_widths(&order[..count], width)
    })
    .ok_or(FormatError::unsupported(format))
}

/// Returns the `count` channel (1 to 4) variant of the single component base of `format`.
///
/// `get_pixel_format(R16Sfloat, 4)` yields `R16G16B16A16Sfloat`.
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] for an unsupported base format or channel count.
pub fn get_pixel_format(format: PixelFormat, count: u32) -> Result<PixelFormat, FormatError> {
    const ORDER: [PixelComponent; 4] = [
        PixelComponent::Red,
        PixelComponent::Green,
        PixelComponent::Blue,
        PixelComponent::Alpha,
    ];

    let base = describe(get_single_component_format(format)?);
    if count == 0 || count as usize > ORDER.len() {
        return Err(FormatError::unsupported(format));
    }

    let width = base.fields[0].width;
    find_format(|candidate| {
        is_plain_colour(candidate)
            && candidate.numeric == base.numeric
            && candidate.has_field_widths(&ORDER[..count as usize], width)
    })
    .ok_or(FormatError::unsupported(format))
}

/// Tag distance between a UNORM format and its sRGB counterpart.
const fn srgb_tag_offset(descriptor: &FormatDescriptor) -> u32 {
    if descriptor.is_compressed() {
        1
    } else {
        6
    }
}

/// Returns the sRGB counterpart of a UNORM format (sRGB formats map to themselves).
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] when the format has no sRGB counterpart.
pub fn get_srgb_format(format: PixelFormat) -> Result<PixelFormat, FormatError> {
    let descriptor = describe(format);
    if descriptor.is_srgb() {
        return Ok(format);
    }
    if descriptor.numeric != NumericFormat::Unorm || !descriptor.is_colour() {
        return Err(FormatError::unsupported(format));
    }

    let candidate = describe_raw(format as u32 + srgb_tag_offset(&descriptor))
        .map_err(|_| FormatError::unsupported(format))?;
    if candidate.is_srgb() && candidate.has_layout_of(&descriptor) {
        Ok(candidate.format)
    } else {
        Err(FormatError::unsupported(format))
    }
}

/// Returns the UNORM counterpart of an sRGB format (UNORM formats map to themselves).
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] when the format has no UNORM counterpart.
pub fn get_unorm_format(format: PixelFormat) -> Result<PixelFormat, FormatError> {
    let descriptor = describe(format);
    if descriptor.numeric == NumericFormat::Unorm {
        return Ok(format);
    }
    if !descriptor.is_srgb() {
        return Err(FormatError::unsupported(format));
    }

    let candidate = (format as u32)
        .checked_sub(srgb_tag_offset(&descriptor))
        .ok_or(FormatError::unsupported(format))?;
    let candidate = describe_raw(candidate).map_err(|_| FormatError::unsupported(format))?;
    if candidate.numeric == NumericFormat::Unorm && candidate.has_layout_of(&descriptor) {
        Ok(candidate.format)
    } else {
        Err(FormatError::unsupported(format))
    }
}
