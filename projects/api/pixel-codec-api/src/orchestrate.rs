//! Whole buffer operations: every layer and level of a source view into a destination view.
//!
//! Layers and levels are paired by index. When the two layouts differ in count, only the first
//! `min(src, dst)` of each are converted and the remaining destination data is left untouched.

use crate::convert::{convert_buffer_with_options, has_encoder};
use crate::decompress::{decompress_into, decompressed_format};
use crate::error::ConvertError;
use crate::layout::ImageLayout;
use crate::options::ConvertOptions;
use crate::view::{PixelBufferView, PixelBufferViewMut};
use crate::buffer::PxBuffer;
use pixel_codec_common::format::is_compressed;
use tracing::{debug, trace};

fn convert_levels(
    options: &ConvertOptions,
    src: &PixelBufferView<'_>,
    dst: &mut PixelBufferViewMut<'_>,
) -> Result<(), ConvertError> {
    let src_layout = *src.layout();
    let dst_layout = *dst.layout();
    let layers = src_layout.layers.min(dst_layout.layers);
    let levels = src_layout.levels.min(dst_layout.levels);

    for layer in 0..layers {
        for level in 0..levels {
            let src_dims = src_layout.level_extent(level);
            let dst_dims = dst_layout.level_extent(level);
            trace!(layer, level, width = src_dims.0, height = src_dims.1, "Converting level");
            convert_buffer_with_options(
                options,
                src_dims,
                dst_dims,
                src_layout.format,
                src.level(layer, level),
                dst_layout.format,
                dst.level_mut(layer, level),
            )?;
        }
    }
    Ok(())
}

/// Converts every shared layer and level of `src` into `dst`, whatever the two formats.
///
/// Compressed sources are decompressed first. BC1 and BC3 destinations are compressed with the
/// settings in `options`.
///
/// # Errors
///
/// See [`convert_buffer_with_options`]. Levels converted before the failing one stay written.
pub fn copy_buffer(
    options: &ConvertOptions,
    src: &PixelBufferView<'_>,
    dst: &mut PixelBufferViewMut<'_>,
) -> Result<(), ConvertError> {
    debug!(
        src_format = ?src.layout().format,
        dst_format = ?dst.layout().format,
        layers = src.layout().layers,
        levels = src.layout().levels,
        "Copying buffer"
    );
    convert_levels(options, src, dst)
}

/// Compresses every shared layer and level of `src` into the BC1 or BC3 buffer `dst`.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedFormat`] if `dst` is not a BC1 or BC3 format.
/// - Otherwise see [`convert_buffer_with_options`].
pub fn compress_buffer(
    options: &ConvertOptions,
    src: &PixelBufferView<'_>,
    dst: &mut PixelBufferViewMut<'_>,
) -> Result<(), ConvertError> {
    let dst_format = dst.layout().format;
    if !has_encoder(dst_format) {
        return Err(ConvertError::unsupported(dst_format));
    }

    debug!(
        src_format = ?src.layout().format,
        ?dst_format,
        backend = ?options.compression_backend,
        quality = ?options.quality_level,
        "Compressing buffer"
    );
    convert_levels(options, src, dst)
}

/// Converts `src` into `dst`, compressing when `dst` is compressed and `src` is not.
///
/// # Errors
///
/// See [`compress_buffer`] and [`copy_buffer`].
pub fn transcode(
    options: &ConvertOptions,
    src: &PixelBufferView<'_>,
    dst: &mut PixelBufferViewMut<'_>,
) -> Result<(), ConvertError> {
    if is_compressed(dst.layout().format) && !is_compressed(src.layout().format) {
        compress_buffer(options, src, dst)
    } else {
        copy_buffer(options, src, dst)
    }
}

/// Decompresses every layer and level of `src` into a new, unaligned buffer of
/// [`decompressed_format`].
///
/// # Errors
///
/// - [`ConvertError::UnsupportedFormat`] if `src` is not BC1, BC3 or BC5.
/// - [`ConvertError::MalformedBlock`] for undecodable BC5 blocks.
pub fn decompress_buffer(src: &PixelBufferView<'_>) -> Result<PxBuffer, ConvertError> {
    let src_layout = *src.layout();
    let format = decompressed_format(src_layout.format).ok_or(ConvertError::unsupported(src_layout.format))?;
    let layout = ImageLayout {
        format,
        align: 0,
        ..src_layout
    };

    debug!(src_format = ?src_layout.format, ?format, "Decompressing buffer");
    let mut buffer = PxBuffer::new(layout);
    for layer in 0..layout.layers {
        for level in 0..layout.levels {
            let range = layout.level_range(layer, level);
            decompress_into(
                src_layout.format,
                layout.level_extent(level),
                src.level(layer, level),
                &mut buffer.data_mut()[range],
            )?;
        }
    }
    Ok(buffer)
}
