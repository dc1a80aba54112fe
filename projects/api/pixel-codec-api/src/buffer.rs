//! # Owned Pixel Buffers
//!
//! [`PxBuffer`] owns the bytes for an [`ImageLayout`] and builds on the orchestration functions:
//! filling itself from another view, generating mip chains and resizing.
//!
//! The free functions [`extract_component`] and [`has_alpha_channel`] inspect any view,
//! decompressing BC1, BC3 and BC5 data first.

use crate::error::ConvertError;
use crate::layout::{ImageLayout, max_mip_count};
use crate::options::ConvertOptions;
use crate::orchestrate::{compress_buffer, copy_buffer, decompress_buffer};
use crate::view::{PixelBufferView, PixelBufferViewMut};
use alloc::{vec, vec::Vec};
use pixel_codec_common::format::is_compressed;
use pixel_codec_common::{ComponentAccessor, PixelAccessor, PixelComponent, PixelFormat, describe};
use tracing::{debug, warn};

const COLOUR_CHANNELS: [PixelComponent; 4] = [
    PixelComponent::Red,
    PixelComponent::Green,
    PixelComponent::Blue,
    PixelComponent::Alpha,
];

/// A heap allocated buffer holding every layer and level of an [`ImageLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PxBuffer {
    layout: ImageLayout,
    data: Vec<u8>,
    flipped: bool,
}

impl PxBuffer {
    /// Allocates a zeroed buffer for `layout`.
    pub fn new(layout: ImageLayout) -> Self {
        Self {
            layout,
            data: vec![0u8; layout.total_size()],
            flipped: false,
        }
    }

    /// Creates a buffer with `layout` from the contents of `src`.
    ///
    /// - A target format of [`PixelFormat::Undefined`] keeps the source format.
    /// - A compressed target with an uncompressed source is compressed. With
    ///   [`ConvertOptions::generate_mips`] set and a single level colour source, the full mip
    ///   chain is generated first and the target gets one level per mip.
    /// - Anything else is converted level by level, see [`copy_buffer`].
    ///
    /// # Errors
    ///
    /// Any error of [`compress_buffer`] or [`copy_buffer`].
    pub fn from_view(
        options: &ConvertOptions,
        layout: ImageLayout,
        src: &PixelBufferView<'_>,
    ) -> Result<Self, ConvertError> {
        let src_layout = *src.layout();
        let mut layout = layout;
        if layout.format == PixelFormat::Undefined {
            layout.format = src_layout.format;
        }

        let compressing = is_compressed(layout.format) && !is_compressed(src_layout.format);
        if !compressing {
            let mut buffer = Self::new(layout);
            copy_buffer(options, src, &mut buffer.view_mut())?;
            return Ok(buffer);
        }

        let mip_count = max_mip_count(src_layout.width, src_layout.height);
        let wants_mips = options.generate_mips && src_layout.levels <= 1 && mip_count > 1;
        if wants_mips && describe(src_layout.format).is_colour() {
            let mut staging = Self::new(ImageLayout {
                levels: 1,
                align: 0,
                ..src_layout
            });
            copy_buffer(options, src, &mut staging.view_mut())?;
            staging.generate_mips()?;

            let mut buffer = Self::new(layout.with_levels(staging.layout.levels));
            compress_buffer(options, &staging.view(), &mut buffer.view_mut())?;
            return Ok(buffer);
        }

        let mut buffer = Self::new(layout);
        compress_buffer(options, src, &mut buffer.view_mut())?;
        Ok(buffer)
    }

    /// Replaces every level after the first with a 2x2 box filtered copy of the level above it,
    /// growing the buffer to the full mip chain.
    ///
    /// Samples past the right and bottom edges of odd sized levels clamp to the last column or
    /// row.
    ///
    /// # Errors
    ///
    /// [`ConvertError::UnsupportedFormat`] for compressed and non colour formats.
    pub fn generate_mips(&mut self) -> Result<(), ConvertError> {
        let format = self.layout.format;
        let descriptor = describe(format);
        if descriptor.is_compressed() || !descriptor.is_colour() {
            return Err(ConvertError::unsupported(format));
        }

        let accessor = PixelAccessor::new(format)?;
        let channels: Vec<ComponentAccessor> = COLOUR_CHANNELS
            .iter()
            .filter_map(|component| accessor.get(*component).copied())
            .collect();
        let pixel_size = accessor.byte_size();

        let levels = max_mip_count(self.layout.width, self.layout.height);
        self.update(self.layout.layers, levels);
        debug!(?format, levels, "Generating mips");

        let layout = self.layout;
        for layer in 0..layout.layers {
            for level in 1..layout.levels {
                let above = layout.level_range(layer, level - 1);
                let range = layout.level_range(layer, level);
                let (head, tail) = self.data.split_at_mut(range.start);
                let src = &head[above];
                let dst = &mut tail[..range.len()];
                downsample(
                    &channels,
                    pixel_size,
                    src,
                    layout.level_extent(level - 1),
                    dst,
                    layout.level_extent(level),
                );
            }
        }
        Ok(())
    }

    /// Resizes to `layers` layers and `levels` levels, keeping the data of every layer and level
    /// present in both layouts.
    ///
    /// `levels` is clamped to `1..=max_mip_count` for uncompressed formats. Compressed buffers
    /// keep their level count.
    pub fn update(&mut self, layers: u32, levels: u32) {
        let old = self.layout;
        let mut layout = old.with_layers(layers);
        if !is_compressed(old.format) {
            layout.levels = levels.clamp(1, max_mip_count(old.width, old.height));
        }
        if layout == old {
            return;
        }

        let mut data = vec![0u8; layout.total_size()];
        let kept = old.layer_size().min(layout.layer_size());
        for layer in 0..old.layers.min(layout.layers) {
            let src = old.level_offset(layer, 0);
            let dst = layout.level_offset(layer, 0);
            data[dst..dst + kept].copy_from_slice(&self.data[src..src + kept]);
        }

        self.layout = layout;
        self.data = data;
    }

    /// The bytes of the pixel, or the compressed block holding the pixel, at `x`, `y`.
    ///
    /// While [`Self::is_flipped`], `y` counts from the bottom row.
    ///
    /// # Panics
    ///
    /// If the coordinates, `layer` or `level` are outside the layout.
    pub fn get_at(&self, x: u32, y: u32, layer: u32, level: u32) -> &[u8] {
        let range = self.pixel_range(x, y, layer, level);
        &self.data[range]
    }

    /// Writable version of [`Self::get_at`].
    ///
    /// # Panics
    ///
    /// If the coordinates, `layer` or `level` are outside the layout.
    pub fn get_at_mut(&mut self, x: u32, y: u32, layer: u32, level: u32) -> &mut [u8] {
        let range = self.pixel_range(x, y, layer, level);
        &mut self.data[range]
    }

    fn pixel_range(&self, x: u32, y: u32, layer: u32, level: u32) -> core::ops::Range<usize> {
        assert!(layer < self.layout.layers && level < self.layout.levels);
        let (width, height) = self.layout.level_extent(level);
        assert!(x < width && y < height, "pixel {x},{y} outside {width}x{height}");

        let y = if self.flipped { height - 1 - y } else { y };
        let offset = self.layout.pixel_offset(x, y, layer, level);
        offset..offset + self.layout.block_size().bytes as usize
    }

    /// Toggles vertical flipping of [`Self::get_at`] row addressing.
    #[inline]
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Whether rows are addressed bottom-up.
    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// The layout of the buffer.
    #[inline]
    pub fn layout(&self) -> &ImageLayout {
        &self.layout
    }

    /// The whole buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The whole buffer, writable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the owned bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Borrows the buffer as a view.
    #[inline]
    pub fn view(&self) -> PixelBufferView<'_> {
        PixelBufferView::new_unchecked(self.layout, &self.data)
    }

    /// Borrows the buffer as a writable view.
    #[inline]
    pub fn view_mut(&mut self) -> PixelBufferViewMut<'_> {
        PixelBufferViewMut::new_unchecked(self.layout, &mut self.data)
    }
}

fn downsample(
    channels: &[ComponentAccessor],
    pixel_size: usize,
    src: &[u8],
    (src_width, src_height): (u32, u32),
    dst: &mut [u8],
    (width, height): (u32, u32),
) {
    let (src_width, src_height) = (src_width as usize, src_height as usize);
    let src_pixel = |x: usize, y: usize| {
        let offset = (y.min(src_height - 1) * src_width + x.min(src_width - 1)) * pixel_size;
        &src[offset..offset + pixel_size]
    };

    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = (y * width as usize + x) * pixel_size;
            let pixel = &mut dst[offset..offset + pixel_size];
            let samples = [
                src_pixel(x * 2, y * 2),
                src_pixel(x * 2 + 1, y * 2),
                src_pixel(x * 2, y * 2 + 1),
                src_pixel(x * 2 + 1, y * 2 + 1),
            ];
            for channel in channels {
                let sum: f64 = samples.iter().map(|sample| channel.get_normalized(sample)).sum();
                channel.set_normalized(pixel, sum / 4.0);
            }
        }
    }
}

/// Copies one component of every pixel of `view` into a new `R8Unorm` buffer of the same
/// dimensions, layers and levels.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedComponent`] if the (decompressed) format lacks `component`.
/// - Any error of [`decompress_buffer`] for compressed views.
pub fn extract_component(
    view: &PixelBufferView<'_>,
    component: PixelComponent,
) -> Result<PxBuffer, ConvertError> {
    let decompressed;
    let view = if is_compressed(view.layout().format) {
        decompressed = decompress_buffer(view)?;
        decompressed.view()
    } else {
        *view
    };

    let src_layout = *view.layout();
    let accessor = ComponentAccessor::new(src_layout.format, component)?;
    let pixel_size = accessor.byte_size();
    let layout = ImageLayout {
        format: PixelFormat::R8Unorm,
        align: 0,
        ..src_layout
    };

    let mut buffer = PxBuffer::new(layout);
    for layer in 0..layout.layers {
        for level in 0..layout.levels {
            let (width, height) = layout.level_extent(level);
            let pixels = width as usize * height as usize;
            let range = layout.level_range(layer, level);
            let src = view.level(layer, level).chunks_exact(pixel_size);
            for (value, pixel) in buffer.data[range].iter_mut().zip(src).take(pixels) {
                *value = accessor.get_u8(pixel);
            }
        }
    }
    Ok(buffer)
}

/// Whether `view` has alpha values other than fully transparent or fully opaque.
///
/// Only the first level of every layer is inspected. Returns `false` for formats without alpha,
/// when every alpha value is 0, when every alpha value is 255, and when compressed data cannot be
/// decompressed.
pub fn has_alpha_channel(view: &PixelBufferView<'_>) -> bool {
    let format = view.layout().format;
    if !describe(format).has_alpha() {
        return false;
    }

    let decompressed;
    let view = if is_compressed(format) {
        match decompress_buffer(view) {
            Ok(buffer) => {
                decompressed = buffer;
                decompressed.view()
            }
            Err(e) => {
                warn!(error = %e, ?format, "Could not decompress buffer to inspect alpha");
                return false;
            }
        }
    } else {
        *view
    };

    let layout = *view.layout();
    let Ok(alpha) = ComponentAccessor::new(layout.format, PixelComponent::Alpha) else {
        return false;
    };

    let (width, height) = layout.level_extent(0);
    let pixels = width as usize * height as usize;
    let (mut transparent, mut opaque) = (true, true);
    for layer in 0..layout.layers {
        for pixel in view.level(layer, 0).chunks_exact(alpha.byte_size()).take(pixels) {
            let value = alpha.get_u8(pixel);
            transparent &= value == 0;
            opaque &= value == 255;
        }
    }
    !(transparent || opaque)
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn new_buffers_are_zeroed() {
        let layout = ImageLayout::new(PixelFormat::R8G8B8A8Unorm, 3, 3).with_levels(2);
        let buffer = PxBuffer::new(layout);
        assert_eq!(buffer.data().len(), 40);
        assert!(buffer.data().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn from_view_converts() {
        let data = solid_rgba8(2, 2, Color8888::new(10, 20, 30, 40));
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::R8G8B8A8Unorm, 2, 2), &data).unwrap();
        let layout = ImageLayout::new(PixelFormat::B8G8R8Unorm, 2, 2);

        let buffer = PxBuffer::from_view(&ConvertOptions::default(), layout, &src).unwrap();
        assert_eq!(buffer.data(), [30u8, 20, 10].repeat(4));
    }

    #[test]
    fn from_view_keeps_undefined_formats() {
        let data = [7u8; 4];
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::R8Unorm, 2, 2), &data).unwrap();
        let layout = ImageLayout::new(PixelFormat::Undefined, 2, 2);

        let buffer = PxBuffer::from_view(&ConvertOptions::default(), layout, &src).unwrap();
        assert_eq!(buffer.layout().format, PixelFormat::R8Unorm);
        assert_eq!(buffer.data(), &data);
    }

    #[test]
    fn from_view_compresses_with_mips() {
        let color = Color8888::new(255, 0, 0, 255);
        let data = solid_rgba8(8, 8, color);
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::R8G8B8A8Unorm, 8, 8), &data).unwrap();
        let options = ConvertOptionsBuilder::new().generate_mips(true).build();

        let buffer = PxBuffer::from_view(&options, ImageLayout::new(PixelFormat::Bc1RgbUnormBlock, 8, 8), &src).unwrap();
        assert_eq!(buffer.layout().levels, 4);
        // 2x2 blocks, then one block for each of 4x4, 2x2 and 1x1.
        assert_eq!(buffer.data().len(), 56);
        for block in buffer.data().chunks_exact(8) {
            assert_eq!(decode_bc1_block_from_slice(block).unwrap(), Decoded4x4Block::new(color));
        }
    }

    #[test]
    fn generate_mips_box_filters() {
        let layout = ImageLayout::new(PixelFormat::R8Unorm, 4, 2);
        let mut buffer = PxBuffer::new(layout);
        buffer.data_mut().copy_from_slice(&[0, 100, 200, 255, 100, 100, 4, 1]);
        buffer.generate_mips().unwrap();

        assert_eq!(buffer.layout().levels, 3);
        // Level 1 is 2x1: (0+100+100+100)/4 = 75, (200+255+4+1)/4 = 115.
        assert_eq!(&buffer.data()[8..10], &[75, 115]);
        // Level 2 is 1x1, averaging 75 and 115 with the clamped bottom row.
        assert_eq!(buffer.data()[10], 95);
    }

    #[test]
    fn generate_mips_rejects_compressed_and_depth() {
        let mut buffer = PxBuffer::new(ImageLayout::new(PixelFormat::Bc1RgbUnormBlock, 8, 8));
        assert_eq!(buffer.generate_mips(), Err(ConvertError::unsupported(PixelFormat::Bc1RgbUnormBlock)));
        let mut buffer = PxBuffer::new(ImageLayout::new(PixelFormat::D16Unorm, 8, 8));
        assert_eq!(buffer.generate_mips(), Err(ConvertError::unsupported(PixelFormat::D16Unorm)));
    }

    #[test]
    fn update_keeps_overlapping_layers() {
        let layout = ImageLayout::new(PixelFormat::R8Unorm, 2, 2).with_layers(2);
        let mut buffer = PxBuffer::new(layout);
        buffer.data_mut().copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);

        buffer.update(3, 2);
        assert_eq!(buffer.layout().layers, 3);
        assert_eq!(buffer.layout().levels, 2);
        assert_eq!(buffer.data(), &[1, 2, 3, 4, 0, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0]);

        buffer.update(1, 9);
        assert_eq!(buffer.layout().levels, 2);
        assert_eq!(buffer.data(), &[1, 2, 3, 4, 0]);
    }

    #[test]
    fn get_at_follows_the_flip_flag() {
        let layout = ImageLayout::new(PixelFormat::R8G8Unorm, 2, 3);
        let mut buffer = PxBuffer::new(layout);
        buffer.get_at_mut(1, 0, 0, 0).copy_from_slice(&[9, 8]);
        assert_eq!(buffer.data()[2..4], [9, 8]);

        buffer.flip();
        assert!(buffer.is_flipped());
        assert_eq!(buffer.get_at(1, 2, 0, 0), &[9, 8]);
    }

    #[test]
    fn get_at_returns_blocks_for_compressed_formats() {
        let layout = ImageLayout::new(PixelFormat::Bc3UnormBlock, 8, 8);
        let mut buffer = PxBuffer::new(layout);
        buffer.data_mut()[48] = 1;
        let block = buffer.get_at(5, 6, 0, 0);
        assert_eq!(block.len(), 16);
        assert_eq!(block[0], 1);
    }

    #[test]
    #[should_panic]
    fn get_at_panics_outside_the_level() {
        let buffer = PxBuffer::new(ImageLayout::new(PixelFormat::R8Unorm, 4, 4).with_levels(2));
        buffer.get_at(2, 0, 0, 1);
    }

    #[rstest]
    #[case(PixelComponent::Red, 10)]
    #[case(PixelComponent::Blue, 30)]
    #[case(PixelComponent::Alpha, 40)]
    fn extracts_components(#[case] component: PixelComponent, #[case] expected: u8) {
        let data = solid_rgba8(3, 2, Color8888::new(10, 20, 30, 40));
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::R8G8B8A8Unorm, 3, 2), &data).unwrap();

        let buffer = extract_component(&src, component).unwrap();
        assert_eq!(buffer.layout().format, PixelFormat::R8Unorm);
        assert_eq!(buffer.data(), &[expected; 6]);
    }

    #[test]
    fn extract_missing_component_fails() {
        let data = [0u8; 3];
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::R8G8B8Unorm, 1, 1), &data).unwrap();
        assert!(matches!(
            extract_component(&src, PixelComponent::Alpha),
            Err(ConvertError::UnsupportedComponent { .. })
        ));
    }

    #[rstest]
    #[case(&[0, 0, 0, 0], false)]
    #[case(&[255, 255, 255, 255], false)]
    #[case(&[0, 255, 0, 255], true)]
    #[case(&[255, 255, 128, 255], true)]
    fn detects_alpha_usage(#[case] alphas: &[u8], #[case] expected: bool) {
        let mut data = Vec::new();
        for alpha in alphas {
            data.extend_from_slice(&Color8888::new(1, 2, 3, *alpha).to_bytes());
        }
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::R8G8B8A8Unorm, 2, 2), &data).unwrap();
        assert_eq!(has_alpha_channel(&src), expected);
    }

    #[test]
    fn alpha_detection_decompresses() {
        let mut block = [0u8; 16];
        compress_bc3(&solid_rgba8(4, 4, Color8888::new(0, 0, 0, 128)), PixelFormat::R8G8B8A8Unorm, (4, 4), &mut block, &CompressSettings::default())
            .unwrap();
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::Bc3UnormBlock, 4, 4), &block).unwrap();
        assert!(has_alpha_channel(&src));

        let rgb = [0u8; 3];
        let src = PixelBufferView::new(ImageLayout::new(PixelFormat::R8G8B8Unorm, 1, 1), &rgb).unwrap();
        assert!(!has_alpha_channel(&src));
    }
}
