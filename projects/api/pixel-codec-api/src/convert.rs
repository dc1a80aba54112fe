//! # Format Conversion
//!
//! Converts pixels between any two formats of the registry.
//!
//! A [`PixelConverter`] pairs every component of the destination with the same component of
//! the source once, and picks how values move between them:
//!
//! - Between normalised unsigned fields (`UNORM`, `SRGB`), and between unsigned fields of the same
//!   width, values are rescaled with exact integer arithmetic.
//! - Between other normalised or float fields, values go through a normalised `f64`.
//! - When either side is an integer (`UINT`, `SINT`, `USCALED`, `SSCALED`), the integer value is
//!   kept and saturated to the destination range.
//! - Components missing from the source are written as 0, except alpha which is fully opaque.
//!
//! sRGB data is moved as stored; no linearisation happens.
//!
//! Whole images go through [`convert_buffer`], which also decompresses compressed sources and
//! compresses into BC1 and BC3 destinations.

use crate::decompress::decompress_level;
use crate::error::ConvertError;
use crate::layout::image_size;
use crate::options::ConvertOptions;
use pixel_codec_bc1::{CompressStats, compress_bc1};
use pixel_codec_bc3::compress_bc3;
use pixel_codec_common::format::is_compressed;
use pixel_codec_common::{ComponentAccessor, PixelAccessor, PixelComponent, PixelComponents, PixelFormat};
use tracing::{trace, warn};

/// Components moved by a converter. Luminance is derived from red, green and blue, so it is
/// not moved on its own.
const CHANNELS: [PixelComponent; 6] = [
    PixelComponent::Red,
    PixelComponent::Green,
    PixelComponent::Blue,
    PixelComponent::Alpha,
    PixelComponent::Depth,
    PixelComponent::Stencil,
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum ChannelPath {
    /// Rescaled as an unsigned integer of the destination's width.
    Exact { src: ComponentAccessor, bits: u32 },
    /// Through a normalised value.
    Normalized(ComponentAccessor),
    /// Through the `f32` value, which keeps integers as integers.
    Float(ComponentAccessor),
    /// Not in the source; written as a normalised constant.
    Fill(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Channel {
    dst: ComponentAccessor,
    path: ChannelPath,
}

fn channel_path(src: ComponentAccessor, dst: &ComponentAccessor) -> ChannelPath {
    let integers = src.numeric().is_integer_valued() || dst.numeric().is_integer_valued();
    match (src.exact_width(), dst.exact_width()) {
        (Some(src_bits), Some(dst_bits)) if src_bits == dst_bits || !integers => ChannelPath::Exact {
            src,
            bits: dst_bits,
        },
        _ if integers => ChannelPath::Float(src),
        _ => ChannelPath::Normalized(src),
    }
}

/// Converts single pixels from one format to another, with all lookups done up front.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelConverter {
    src_format: PixelFormat,
    dst_format: PixelFormat,
    src_size: usize,
    dst_size: usize,
    identical: bool,
    channels: [Option<Channel>; CHANNELS.len()],
    missing: PixelComponents,
}

impl PixelConverter {
    /// Resolves the channel pairs between `src_format` and `dst_format`.
    ///
    /// # Errors
    ///
    /// [`ConvertError::UnsupportedFormat`] if either format is compressed or `Undefined`.
    pub fn new(src_format: PixelFormat, dst_format: PixelFormat) -> Result<Self, ConvertError> {
        let src = PixelAccessor::new(src_format)?;
        let dst = PixelAccessor::new(dst_format)?;

        let mut channels = [None; CHANNELS.len()];
        let mut missing = PixelComponents::NONE;
        for (slot, component) in channels.iter_mut().zip(CHANNELS) {
            let Some(dst_accessor) = dst.get(component).copied() else {
                continue;
            };
            let path = match src.get(component).copied() {
                Some(src_accessor) => channel_path(src_accessor, &dst_accessor),
                None => {
                    missing = missing.with(component);
                    ChannelPath::Fill(if component == PixelComponent::Alpha { 1.0 } else { 0.0 })
                }
            };
            *slot = Some(Channel {
                dst: dst_accessor,
                path,
            });
        }

        Ok(Self {
            src_format,
            dst_format,
            src_size: src.byte_size(),
            dst_size: dst.byte_size(),
            identical: src_format == dst_format,
            channels,
            missing,
        })
    }

    /// Source format.
    #[inline]
    pub fn src_format(&self) -> PixelFormat {
        self.src_format
    }

    /// Destination format.
    #[inline]
    pub fn dst_format(&self) -> PixelFormat {
        self.dst_format
    }

    /// Bytes per source pixel.
    #[inline]
    pub fn src_size(&self) -> usize {
        self.src_size
    }

    /// Bytes per destination pixel.
    #[inline]
    pub fn dst_size(&self) -> usize {
        self.dst_size
    }

    /// Destination components the source does not store.
    #[inline]
    pub fn missing(&self) -> PixelComponents {
        self.missing
    }

    /// Converts the pixel at the start of `src` into the start of `dst`.
    ///
    /// # Panics
    ///
    /// If `src` or `dst` are shorter than one pixel of their format.
    #[inline]
    pub fn convert(&self, src: &[u8], dst: &mut [u8]) {
        if self.identical {
            dst[..self.dst_size].copy_from_slice(&src[..self.src_size]);
            return;
        }

        for channel in self.channels.iter().flatten() {
            let dst_pixel = &mut *dst;
            match channel.path {
                ChannelPath::Exact { src: accessor, bits } => {
                    channel.dst.set_uint(dst_pixel, accessor.get_uint(src, bits), bits)
                }
                ChannelPath::Normalized(accessor) => {
                    channel.dst.set_normalized(dst_pixel, accessor.get_normalized(src))
                }
                ChannelPath::Float(accessor) => channel.dst.set_f32(dst_pixel, accessor.get_f32(src)),
                ChannelPath::Fill(value) => channel.dst.set_normalized(dst_pixel, value),
            }
        }
    }
}

/// Converts one pixel and advances both slices past it.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedFormat`] if either format is compressed or `Undefined`.
/// - [`ConvertError::SizeMismatch`] if a slice is shorter than one pixel. Neither slice moves.
///
/// # Examples
///
/// ```
/// use pixel_codec_api::convert_pixel;
/// use pixel_codec_common::PixelFormat;
///
/// let pixels = [1u8, 2, 3, 4, 5, 6];
/// let mut out = [0u8; 8];
/// let mut src = &pixels[..];
/// let mut dst = &mut out[..];
/// convert_pixel(PixelFormat::R8G8B8Unorm, &mut src, PixelFormat::B8G8R8A8Unorm, &mut dst).unwrap();
/// convert_pixel(PixelFormat::R8G8B8Unorm, &mut src, PixelFormat::B8G8R8A8Unorm, &mut dst).unwrap();
/// assert!(src.is_empty() && dst.is_empty());
/// assert_eq!(out, [3, 2, 1, 255, 6, 5, 4, 255]);
/// ```
pub fn convert_pixel(
    src_format: PixelFormat,
    src: &mut &[u8],
    dst_format: PixelFormat,
    dst: &mut &mut [u8],
) -> Result<(), ConvertError> {
    let converter = PixelConverter::new(src_format, dst_format)?;
    let (src_size, dst_size) = (converter.src_size(), converter.dst_size());
    if src.len() < src_size {
        return Err(ConvertError::SizeMismatch {
            needed: src_size,
            actual: src.len(),
        });
    }
    if dst.len() < dst_size {
        return Err(ConvertError::SizeMismatch {
            needed: dst_size,
            actual: dst.len(),
        });
    }

    converter.convert(src, dst);
    *src = &src[src_size..];
    let remaining = core::mem::take(dst);
    *dst = &mut remaining[dst_size..];
    Ok(())
}

/// Converts an image with [`ConvertOptions::default`], see [`convert_buffer_with_options`].
///
/// # Errors
///
/// See [`convert_buffer_with_options`].
pub fn convert_buffer(
    src_dims: (u32, u32),
    dst_dims: (u32, u32),
    src_format: PixelFormat,
    src: &[u8],
    dst_format: PixelFormat,
    dst: &mut [u8],
) -> Result<(), ConvertError> {
    convert_buffer_with_options(
        &ConvertOptions::default(),
        src_dims,
        dst_dims,
        src_format,
        src,
        dst_format,
        dst,
    )
}

/// Converts a tightly packed image from one format to another.
///
/// # Parameters
///
/// - `options`: Compressor settings, used when `dst_format` is BC1 or BC3.
/// - `src_dims`, `dst_dims`: Dimensions in pixels of both images. Only the overlapping
///   `min(src, dst)` region is converted; compression uses `src_dims`.
/// - `src`, `dst`: Pixel data, `dst` is the only buffer written.
///
/// # Behaviour
///
/// - Equal formats and dimensions: byte copy.
/// - Compressed source: decompressed (see [`decompress_level`]) and converted from there.
/// - BC1 or BC3 destination: compressed with the block compressors.
/// - Otherwise: pixel by pixel through a [`PixelConverter`].
///
/// # Errors
///
/// - [`ConvertError::SizeMismatch`] if `src` or `dst` are smaller than their dimensions require,
///   counted in whole blocks for compressed formats. Nothing is written.
/// - [`ConvertError::UnsupportedFormat`] for formats with no decoder, encoder or accessor.
/// - [`ConvertError::MalformedBlock`] for undecodable BC5 source blocks.
/// - [`ConvertError::PartialBlock`] for partial blocks under [`PartialBlockPolicy::Reject`].
///
/// [`PartialBlockPolicy::Reject`]: crate::PartialBlockPolicy::Reject
pub fn convert_buffer_with_options(
    options: &ConvertOptions,
    src_dims: (u32, u32),
    dst_dims: (u32, u32),
    src_format: PixelFormat,
    src: &[u8],
    dst_format: PixelFormat,
    dst: &mut [u8],
) -> Result<(), ConvertError> {
    let src_needed = image_size(src_format, src_dims.0, src_dims.1);
    if src.len() < src_needed {
        return Err(ConvertError::SizeMismatch {
            needed: src_needed,
            actual: src.len(),
        });
    }
    let dst_needed = image_size(dst_format, dst_dims.0, dst_dims.1);
    if dst.len() < dst_needed {
        return Err(ConvertError::SizeMismatch {
            needed: dst_needed,
            actual: dst.len(),
        });
    }

    if src_format == dst_format && src_dims == dst_dims {
        dst[..src_needed].copy_from_slice(&src[..src_needed]);
        return Ok(());
    }

    if is_compressed(src_format) {
        let (format, pixels) = decompress_level(src_format, src_dims, src)?;
        trace!(?src_format, ?format, "Decompressed source level");
        return convert_buffer_with_options(options, src_dims, dst_dims, format, &pixels, dst_format, dst);
    }

    if is_compressed(dst_format) {
        compress_level(options, src_dims, src_format, src, dst_format, dst)?;
        return Ok(());
    }

    let converter = PixelConverter::new(src_format, dst_format)?;
    let dropped = converter.missing().without(PixelComponent::Alpha);
    if !dropped.is_empty() {
        warn!(?src_format, ?dst_format, missing = ?dropped, "Source lacks components, filling with 0");
    }

    let width = src_dims.0.min(dst_dims.0) as usize;
    let height = src_dims.1.min(dst_dims.1) as usize;
    let (src_size, dst_size) = (converter.src_size(), converter.dst_size());
    let src_pitch = src_dims.0 as usize * src_size;
    let dst_pitch = dst_dims.0 as usize * dst_size;
    for y in 0..height {
        let src_row = &src[y * src_pitch..][..width * src_size];
        let dst_row = &mut dst[y * dst_pitch..][..width * dst_size];
        for (src_pixel, dst_pixel) in src_row.chunks_exact(src_size).zip(dst_row.chunks_exact_mut(dst_size)) {
            converter.convert(src_pixel, dst_pixel);
        }
    }
    Ok(())
}

/// Compresses one level with the compressor matching `dst_format`.
///
/// # Errors
///
/// [`ConvertError::UnsupportedFormat`] when `dst_format` is not a BC1 or BC3 format, plus the
/// compressor's own errors.
pub(crate) fn compress_level(
    options: &ConvertOptions,
    dims: (u32, u32),
    src_format: PixelFormat,
    src: &[u8],
    dst_format: PixelFormat,
    dst: &mut [u8],
) -> Result<CompressStats, ConvertError> {
    let settings = options.compress_settings();
    let stats = match dst_format {
        PixelFormat::Bc1RgbUnormBlock
        | PixelFormat::Bc1RgbSrgbBlock
        | PixelFormat::Bc1RgbaUnormBlock
        | PixelFormat::Bc1RgbaSrgbBlock => compress_bc1(src, src_format, dims, dst, &settings)?,
        PixelFormat::Bc3UnormBlock | PixelFormat::Bc3SrgbBlock => {
            compress_bc3(src, src_format, dims, dst, &settings)?
        }
        _ => return Err(ConvertError::unsupported(dst_format)),
    };

    if stats.padded_blocks > 0 {
        warn!(
            width = dims.0,
            height = dims.1,
            padded_blocks = stats.padded_blocks,
            "Padded partial blocks with edge pixels"
        );
    }
    trace!(blocks = stats.blocks, bytes_written = stats.bytes_written, "Compressed level");
    Ok(stats)
}

/// Whether [`compress_level`] has an encoder for `format`.
pub(crate) const fn has_encoder(format: PixelFormat) -> bool {
    matches!(
        format,
        PixelFormat::Bc1RgbUnormBlock
            | PixelFormat::Bc1RgbSrgbBlock
            | PixelFormat::Bc1RgbaUnormBlock
            | PixelFormat::Bc1RgbaSrgbBlock
            | PixelFormat::Bc3UnormBlock
            | PixelFormat::Bc3SrgbBlock
    )
}
