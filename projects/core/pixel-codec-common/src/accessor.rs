//! # Component Accessors
//!
//! Typed read/write access to a single component of a single pixel.
//!
//! An accessor is resolved once per (format, component) pair and then applied to any number of
//! pixels without further lookups. Resolution fails with [`FormatError`] when the component is
//! absent or the format is block compressed.
//!
//! ## Representations
//!
//! - `u8`, `u16`, `u24` and `u32` getters/setters treat the component as an unsigned value
//!   spanning the full range of the representation. Unsigned integer fields are rescaled with
//!   exact integer arithmetic (round to nearest).
//! - `f32` getters/setters return normalised values for `UNORM`/`SNORM`/`SRGB` fields, the
//!   stored value for float fields, and the raw integer for `UINT`/`SINT`/`USCALED`/`SSCALED`
//!   fields.
//! - Signed and float fields convert through a normalised value and saturate when out of range.
//!
//! ## Usage
//!
//! ```
//! use pixel_codec_common::{ComponentAccessor, PixelComponent, PixelFormat};
//!
//! let red = ComponentAccessor::new(PixelFormat::R5G6B5UnormPack16, PixelComponent::Red).unwrap();
//! let mut pixel = [0u8; 2];
//! red.set_u8(&mut pixel, 255);
//! assert_eq!(pixel, [0x00, 0xF8]);
//! assert_eq!(red.get_u8(&pixel), 255);
//! ```

use crate::color_8888::Color8888;
use crate::component::PixelComponent;
use crate::error::FormatError;
use crate::format::{describe, ChannelField, FormatDescriptor, NumericFormat, PixelFormat};
use half::f16;

/// Rec.601 luma weights, in thousandths.
const LUMA_WEIGHTS: [u128; 3] = [299, 587, 114];

#[inline]
const fn max_of(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Rescales an unsigned value between bit widths, rounding to nearest.
#[inline]
fn rescale(value: u64, from_bits: u32, to_bits: u32) -> u64 {
    if from_bits == to_bits {
        return value;
    }
    let from_max = max_of(from_bits) as u128;
    let to_max = max_of(to_bits) as u128;
    let value = (value as u128).min(from_max);
    ((value * to_max + from_max / 2) / from_max) as u64
}

#[inline]
fn round_unsigned(value: f64) -> u64 {
    (value + 0.5) as u64
}

#[inline]
fn round_signed(value: f64) -> i64 {
    if value < 0.0 {
        (value - 0.5) as i64
    } else {
        (value + 0.5) as i64
    }
}

#[inline]
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    // NaN collapses to `min`.
    value.max(min).min(max)
}

/// `2^exponent` for exponents in the normal `f64` range.
#[inline]
fn pow2(exponent: i32) -> f64 {
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

#[inline]
fn floor_log2(value: f64) -> i32 {
    ((value.to_bits() >> 52) & 0x7FF) as i32 - 1023
}

fn read_bits(pixel: &[u8], offset: u32, width: u32) -> u64 {
    let first = (offset / 8) as usize;
    let last = (offset + width).div_ceil(8) as usize;
    let gathered = pixel[first..last]
        .iter()
        .enumerate()
        .fold(0u128, |acc, (index, byte)| acc | (*byte as u128) << (index * 8));
    ((gathered >> (offset % 8)) & max_of(width) as u128) as u64
}

fn write_bits(pixel: &mut [u8], offset: u32, width: u32, value: u64) {
    let first = (offset / 8) as usize;
    let last = (offset + width).div_ceil(8) as usize;
    let bytes = &mut pixel[first..last];
    let mut gathered = bytes
        .iter()
        .enumerate()
        .fold(0u128, |acc, (index, byte)| acc | (*byte as u128) << (index * 8));

    let shift = offset % 8;
    let mask = (max_of(width) as u128) << shift;
    gathered = (gathered & !mask) | (((value as u128) << shift) & mask);
    for (index, byte) in bytes.iter_mut().enumerate() {
        *byte = (gathered >> (index * 8)) as u8;
    }
}

/// Decodes an `E5B9G9R9` word into red, green and blue.
fn decode_shared_exponent(word: u32) -> [f64; 3] {
    let scale = pow2(((word >> 27) & 0x1F) as i32 - 15 - 9);
    [0, 1, 2].map(|index| ((word >> (index * 9)) & 0x1FF) as f64 * scale)
}

/// Encodes red, green and blue into an `E5B9G9R9` word, saturating out of range values.
fn encode_shared_exponent(rgb: [f64; 3]) -> u32 {
    const MAX_VALUE: f64 = 65408.0;
    let rgb = rgb.map(|value| clamp(value, 0.0, MAX_VALUE));
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if max == 0.0 {
        return 0;
    }

    let mut exponent = floor_log2(max).max(-16) + 1 + 15;
    let mut scale = pow2(exponent - 15 - 9);
    if round_unsigned(max / scale) == 512 {
        exponent += 1;
        scale *= 2.0;
    }

    let [r, g, b] = rgb.map(|value| (round_unsigned(value / scale) as u32).min(0x1FF));
    ((exponent as u32) << 27) | (b << 18) | (g << 9) | r
}

/// A resolved field: where the bits are and how to read them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Field {
    offset: u32,
    width: u32,
    numeric: NumericFormat,
    shared_exponent: bool,
}

impl Field {
    fn resolve(descriptor: &FormatDescriptor, field: &ChannelField) -> Self {
        Self {
            offset: field.offset as u32,
            width: field.width as u32,
            numeric: descriptor.field_numeric(field),
            shared_exponent: descriptor.format == PixelFormat::E5B9G9R9UfloatPack32,
        }
    }

    #[inline]
    fn raw(&self, pixel: &[u8]) -> u64 {
        read_bits(pixel, self.offset, self.width)
    }

    #[inline]
    fn set_raw(&self, pixel: &mut [u8], value: u64) {
        write_bits(pixel, self.offset, self.width, value);
    }

    #[inline]
    fn signed(&self, pixel: &[u8]) -> i64 {
        let unused = 64 - self.width;
        ((self.raw(pixel) << unused) as i64) >> unused
    }

    #[inline]
    fn max_positive(&self) -> i64 {
        (max_of(self.width) >> 1) as i64
    }

    fn float(&self, pixel: &[u8]) -> f64 {
        if self.shared_exponent {
            let word = read_bits(pixel, 0, 32) as u32;
            return decode_shared_exponent(word)[(self.offset / 9) as usize];
        }

        let raw = self.raw(pixel);
        match self.width {
            16 => f16::from_bits(raw as u16).to_f64(),
            32 => f32::from_bits(raw as u32) as f64,
            64 => f64::from_bits(raw),
            // 10 and 11 bit unsigned floats share the f16 exponent layout.
            width => f16::from_bits((raw << (15 - width)) as u16).to_f64(),
        }
    }

    fn set_float(&self, pixel: &mut [u8], value: f64) {
        if self.shared_exponent {
            let mut rgb = decode_shared_exponent(read_bits(pixel, 0, 32) as u32);
            rgb[(self.offset / 9) as usize] = value;
            write_bits(pixel, 0, 32, encode_shared_exponent(rgb) as u64);
            return;
        }

        let half_max = f16::MAX.to_f64();
        let raw = match self.width {
            16 => f16::from_f64(clamp(value, -half_max, half_max)).to_bits() as u64,
            32 => (clamp(value, f32::MIN as f64, f32::MAX as f64) as f32).to_bits() as u64,
            64 => value.to_bits(),
            width => (f16::from_f64(clamp(value, 0.0, half_max)).to_bits() >> (15 - width)) as u64,
        };
        self.set_raw(pixel, raw);
    }

    /// `[0, 1]` for unsigned integers, `[-1, 1]` for signed integers, the value for floats.
    fn normalized(&self, pixel: &[u8]) -> f64 {
        if self.numeric.is_unsigned_integer() {
            self.raw(pixel) as f64 / max_of(self.width) as f64
        } else if self.numeric.is_signed_integer() {
            (self.signed(pixel) as f64 / self.max_positive() as f64).max(-1.0)
        } else {
            self.float(pixel)
        }
    }

    fn set_normalized(&self, pixel: &mut [u8], value: f64) {
        if self.numeric.is_unsigned_integer() {
            let scaled = clamp(value, 0.0, 1.0) * max_of(self.width) as f64;
            self.set_raw(pixel, round_unsigned(scaled).min(max_of(self.width)));
        } else if self.numeric.is_signed_integer() {
            let max_positive = self.max_positive();
            let scaled = round_signed(clamp(value, -1.0, 1.0) * max_positive as f64);
            self.set_raw(pixel, scaled.clamp(-max_positive, max_positive) as u64);
        } else {
            self.set_float(pixel, value);
        }
    }

    fn get_uint(&self, pixel: &[u8], bits: u32) -> u64 {
        if self.numeric.is_unsigned_integer() {
            rescale(self.raw(pixel), self.width, bits)
        } else {
            let scaled = clamp(self.normalized(pixel), 0.0, 1.0) * max_of(bits) as f64;
            round_unsigned(scaled).min(max_of(bits))
        }
    }

    fn set_uint(&self, pixel: &mut [u8], value: u64, bits: u32) {
        if self.numeric.is_unsigned_integer() {
            self.set_raw(pixel, rescale(value, bits, self.width));
        } else {
            self.set_normalized(pixel, value as f64 / max_of(bits) as f64);
        }
    }

    fn get_f32(&self, pixel: &[u8]) -> f32 {
        if !self.numeric.is_integer_valued() {
            self.normalized(pixel) as f32
        } else if self.numeric.is_unsigned_integer() {
            self.raw(pixel) as f32
        } else {
            self.signed(pixel) as f32
        }
    }

    fn set_f32(&self, pixel: &mut [u8], value: f32) {
        let value = value as f64;
        if !self.numeric.is_integer_valued() {
            self.set_normalized(pixel, value);
        } else if self.numeric.is_unsigned_integer() {
            let max = max_of(self.width);
            self.set_raw(pixel, round_unsigned(clamp(value, 0.0, max as f64)).min(max));
        } else {
            let max_positive = self.max_positive();
            let min = -max_positive - 1;
            let value = round_signed(clamp(value, min as f64, max_positive as f64));
            self.set_raw(pixel, value.clamp(min, max_positive) as u64);
        }
    }
}

/// Where a component's value comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Source {
    /// Stored directly in one field.
    Field(Field),
    /// Luminance of an RGB format: weighted red, green and blue.
    Weighted([Field; 3]),
}

/// Reads and writes one component of pixels of one format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ComponentAccessor {
    format: PixelFormat,
    component: PixelComponent,
    byte_size: usize,
    source: Source,
}

impl ComponentAccessor {
    /// Resolves the accessor for `component` of `format`.
    ///
    /// # Errors
    ///
    /// - [`FormatError::UnsupportedFormat`] for compressed formats and `Undefined`.
    /// - [`FormatError::UnsupportedComponent`] when the format does not store `component`.
    pub fn new(format: PixelFormat, component: PixelComponent) -> Result<Self, FormatError> {
        let descriptor = describe(format);
        if descriptor.is_compressed() || descriptor.fields.is_empty() {
            return Err(FormatError::unsupported(format));
        }

        let field = |component| {
            descriptor
                .field(component)
                .map(|field| Field::resolve(&descriptor, &field))
        };
        let source = match component {
            PixelComponent::Luminance if descriptor.is_colour() => {
                match (
                    field(PixelComponent::Red),
                    field(PixelComponent::Green),
                    field(PixelComponent::Blue),
                ) {
                    (Some(r), Some(g), Some(b)) => Some(Source::Weighted([r, g, b])),
                    (red, _, _) => red.map(Source::Field),
                }
            }
            PixelComponent::Luminance => None,
            component => field(component).map(Source::Field),
        };

        match source {
            Some(source) => Ok(Self {
                format,
                component,
                byte_size: descriptor.byte_size as usize,
                source,
            }),
            None => Err(FormatError::UnsupportedComponent { format, component }),
        }
    }

    /// The format this accessor reads.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The component this accessor reads.
    #[inline]
    pub fn component(&self) -> PixelComponent {
        self.component
    }

    /// Bytes per pixel of the format.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Numeric interpretation of the backing field. Weighted luminance reports its red field.
    #[inline]
    pub fn numeric(&self) -> NumericFormat {
        match &self.source {
            Source::Field(field) => field.numeric,
            Source::Weighted([red, ..]) => red.numeric,
        }
    }

    /// Bit width of the backing field when it is an unsigned integer that can be moved
    /// between formats with [`Self::get_uint`] and [`Self::set_uint`] without precision loss.
    pub fn exact_width(&self) -> Option<u32> {
        match self.source {
            Source::Field(field) if field.numeric.is_unsigned_integer() => Some(field.width),
            _ => None,
        }
    }

    /// Returns the component as an unsigned value of `bits` bits (at most 64).
    ///
    /// # Panics
    ///
    /// If `pixel` is shorter than the format's pixel size.
    pub fn get_uint(&self, pixel: &[u8], bits: u32) -> u64 {
        match &self.source {
            Source::Field(field) => field.get_uint(pixel, bits),
            Source::Weighted(fields) => {
                let weighted: u128 = fields
                    .iter()
                    .zip(LUMA_WEIGHTS)
                    .map(|(field, weight)| field.get_uint(pixel, bits) as u128 * weight)
                    .sum();
                ((weighted + 500) / 1000) as u64
            }
        }
    }

    /// Writes the component from an unsigned value of `bits` bits (at most 64).
    ///
    /// # Panics
    ///
    /// If `pixel` is shorter than the format's pixel size.
    pub fn set_uint(&self, pixel: &mut [u8], value: u64, bits: u32) {
        match &self.source {
            Source::Field(field) => field.set_uint(pixel, value, bits),
            Source::Weighted(fields) => fields
                .iter()
                .for_each(|field| field.set_uint(pixel, value, bits)),
        }
    }

    /// Returns the component normalised to `[0, 1]` (unsigned), `[-1, 1]` (signed), or as stored
    /// (floats).
    pub fn get_normalized(&self, pixel: &[u8]) -> f64 {
        match &self.source {
            Source::Field(field) => field.normalized(pixel),
            Source::Weighted(fields) => fields
                .iter()
                .zip(LUMA_WEIGHTS)
                .map(|(field, weight)| field.normalized(pixel) * weight as f64 / 1000.0)
                .sum(),
        }
    }

    /// Writes the component from a normalised value, see [`Self::get_normalized`].
    pub fn set_normalized(&self, pixel: &mut [u8], value: f64) {
        match &self.source {
            Source::Field(field) => field.set_normalized(pixel, value),
            Source::Weighted(fields) => fields
                .iter()
                .for_each(|field| field.set_normalized(pixel, value)),
        }
    }

    /// Returns the component as a float, see the module documentation.
    pub fn get_f32(&self, pixel: &[u8]) -> f32 {
        match &self.source {
            Source::Field(field) => field.get_f32(pixel),
            Source::Weighted(fields) => fields
                .iter()
                .zip(LUMA_WEIGHTS)
                .map(|(field, weight)| field.get_f32(pixel) * weight as f32 / 1000.0)
                .sum(),
        }
    }

    /// Writes the component from a float, saturating to the field's range.
    pub fn set_f32(&self, pixel: &mut [u8], value: f32) {
        match &self.source {
            Source::Field(field) => field.set_f32(pixel, value),
            Source::Weighted(fields) => fields.iter().for_each(|field| field.set_f32(pixel, value)),
        }
    }

    /// Returns the component as an 8-bit unsigned value.
    #[inline]
    pub fn get_u8(&self, pixel: &[u8]) -> u8 {
        self.get_uint(pixel, 8) as u8
    }

    /// Writes the component from an 8-bit unsigned value.
    #[inline]
    pub fn set_u8(&self, pixel: &mut [u8], value: u8) {
        self.set_uint(pixel, value as u64, 8);
    }

    /// Returns the component as a 16-bit unsigned value.
    #[inline]
    pub fn get_u16(&self, pixel: &[u8]) -> u16 {
        self.get_uint(pixel, 16) as u16
    }

    /// Writes the component from a 16-bit unsigned value.
    #[inline]
    pub fn set_u16(&self, pixel: &mut [u8], value: u16) {
        self.set_uint(pixel, value as u64, 16);
    }

    /// Returns the component as a 24-bit unsigned value.
    #[inline]
    pub fn get_u24(&self, pixel: &[u8]) -> u32 {
        self.get_uint(pixel, 24) as u32
    }

    /// Writes the component from a 24-bit unsigned value; bits above 24 are ignored.
    #[inline]
    pub fn set_u24(&self, pixel: &mut [u8], value: u32) {
        self.set_uint(pixel, (value & 0xFF_FFFF) as u64, 24);
    }

    /// Returns the component as a 32-bit unsigned value.
    #[inline]
    pub fn get_u32(&self, pixel: &[u8]) -> u32 {
        self.get_uint(pixel, 32) as u32
    }

    /// Writes the component from a 32-bit unsigned value.
    #[inline]
    pub fn set_u32(&self, pixel: &mut [u8], value: u32) {
        self.set_uint(pixel, value as u64, 32);
    }
}

/// All component accessors of one format, resolved once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelAccessor {
    format: PixelFormat,
    byte_size: usize,
    accessors: [Option<ComponentAccessor>; 7],
}

impl PixelAccessor {
    /// Resolves every component stored by `format`, plus luminance where it is derivable.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnsupportedFormat`] for compressed formats and `Undefined`.
    pub fn new(format: PixelFormat) -> Result<Self, FormatError> {
        let descriptor = describe(format);
        if descriptor.is_compressed() || descriptor.fields.is_empty() {
            return Err(FormatError::unsupported(format));
        }

        let mut accessors = [None; 7];
        for component in PixelComponent::all_values() {
            accessors[component.index()] = ComponentAccessor::new(format, *component).ok();
        }

        Ok(Self {
            format,
            byte_size: descriptor.byte_size as usize,
            accessors,
        })
    }

    /// The format this accessor reads.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per pixel of the format.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// The accessor for `component`, if the format stores it.
    #[inline]
    pub fn get(&self, component: PixelComponent) -> Option<&ComponentAccessor> {
        self.accessors[component.index()].as_ref()
    }

    /// Reads a pixel as RGBA8. Missing colour channels read as 0, missing alpha as 255.
    pub fn read_rgba8(&self, pixel: &[u8]) -> Color8888 {
        let read = |component, default| {
            self.get(component)
                .map_or(default, |accessor| accessor.get_u8(pixel))
        };
        Color8888::new(
            read(PixelComponent::Red, 0),
            read(PixelComponent::Green, 0),
            read(PixelComponent::Blue, 0),
            read(PixelComponent::Alpha, 255),
        )
    }

    /// Writes the channels of `color` that the format stores.
    pub fn write_rgba8(&self, pixel: &mut [u8], color: Color8888) {
        let channels = [
            PixelComponent::Red,
            PixelComponent::Green,
            PixelComponent::Blue,
            PixelComponent::Alpha,
        ];
        for (index, component) in channels.into_iter().enumerate() {
            if let Some(accessor) = self.get(component) {
                accessor.set_u8(pixel, color.channel(index));
            }
        }
    }
}

/// Reads `component` of one pixel of `format` as a float.
///
/// # Errors
///
/// See [`ComponentAccessor::new`].
pub fn get_component_f32(
    format: PixelFormat,
    pixel: &[u8],
    component: PixelComponent,
) -> Result<f32, FormatError> {
    Ok(ComponentAccessor::new(format, component)?.get_f32(pixel))
}

/// Writes `component` of one pixel of `format` from a float.
///
/// # Errors
///
/// See [`ComponentAccessor::new`].
pub fn set_component_f32(
    format: PixelFormat,
    pixel: &mut [u8],
    component: PixelComponent,
    value: f32,
) -> Result<(), FormatError> {
    ComponentAccessor::new(format, component)?.set_f32(pixel, value);
    Ok(())
}

/// Reads `component` of one pixel of `format` as an 8-bit value.
///
/// # Errors
///
/// See [`ComponentAccessor::new`].
pub fn get_component_u8(
    format: PixelFormat,
    pixel: &[u8],
    component: PixelComponent,
) -> Result<u8, FormatError> {
    Ok(ComponentAccessor::new(format, component)?.get_u8(pixel))
}

/// Writes `component` of one pixel of `format` from an 8-bit value.
///
/// # Errors
///
/// See [`ComponentAccessor::new`].
pub fn set_component_u8(
    format: PixelFormat,
    pixel: &mut [u8],
    component: PixelComponent,
    value: u8,
) -> Result<(), FormatError> {
    ComponentAccessor::new(format, component)?.set_u8(pixel, value);
    Ok(())
}
