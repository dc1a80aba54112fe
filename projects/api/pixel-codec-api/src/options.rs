//! Options passed by reference through every conversion call.

use pixel_codec_bc1::{CompressSettings, CompressionBackend, PartialBlockPolicy, QualityLevel};
use pixel_codec_common::PixelFormat;

/// Which block compressed formats the consumer of converted buffers can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompressionSupport {
    /// BC1 (DXT1) textures can be sampled.
    pub bc1: bool,
    /// BC3 (DXT5) textures can be sampled.
    pub bc3: bool,
    /// BC5 textures can be sampled.
    pub bc5: bool,
}

impl CompressionSupport {
    /// Every format this crate can produce or read.
    pub const ALL: Self = Self {
        bc1: true,
        bc3: true,
        bc5: true,
    };
}

/// Settings for conversion and compression.
///
/// Build with [`ConvertOptionsBuilder`], or use [`Default`] for inset compression at normal
/// quality, padded edge blocks and no compressed format support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConvertOptions {
    /// Endpoint search used by the block compressors.
    pub compression_backend: CompressionBackend,
    /// Refinement effort for [`CompressionBackend::Refined`].
    pub quality_level: QualityLevel,
    /// Handling of images whose dimensions are not multiples of the block size.
    pub partial_blocks: PartialBlockPolicy,
    /// Compressed formats accepted by the consumer, see [`Self::compressed_format`].
    pub support: CompressionSupport,
    /// Generate a full mip chain before compressing single level images.
    pub generate_mips: bool,
}

impl ConvertOptions {
    /// The settings handed to the BC1 and BC3 compressors.
    #[inline]
    pub const fn compress_settings(&self) -> CompressSettings {
        CompressSettings {
            backend: self.compression_backend,
            quality: self.quality_level,
            partial_blocks: self.partial_blocks,
        }
    }

    /// The compressed format to store `format` as.
    ///
    /// 8-bit RGB and RGBA formats map to [`PixelFormat::Bc3UnormBlock`] (or
    /// [`PixelFormat::Bc3SrgbBlock`] for sRGB data) when BC3 is supported. Everything else,
    /// including `B8G8R8A8Srgb`, is returned unchanged.
    pub const fn compressed_format(&self, format: PixelFormat) -> PixelFormat {
        if !self.support.bc3 {
            return format;
        }

        match format {
            PixelFormat::R8G8B8Unorm
            | PixelFormat::B8G8R8Unorm
            | PixelFormat::B8G8R8A8Unorm
            | PixelFormat::R8G8B8A8Unorm
            | PixelFormat::A8B8G8R8UnormPack32 => PixelFormat::Bc3UnormBlock,
            PixelFormat::R8G8B8Srgb
            | PixelFormat::B8G8R8Srgb
            | PixelFormat::R8G8B8A8Srgb
            | PixelFormat::A8B8G8R8SrgbPack32 => PixelFormat::Bc3SrgbBlock,
            _ => format,
        }
    }
}

/// Builder for [`ConvertOptions`] with convenient configuration methods.
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptionsBuilder {
    compression_backend: Option<CompressionBackend>,
    quality_level: Option<QualityLevel>,
    partial_blocks: Option<PartialBlockPolicy>,
    support: Option<CompressionSupport>,
    generate_mips: Option<bool>,
}

impl ConvertOptionsBuilder {
    /// Create a new options builder.
    pub fn new() -> Self {
        Self {
            compression_backend: None,
            quality_level: None,
            partial_blocks: None,
            support: None,
            generate_mips: None,
        }
    }

    /// Set the endpoint search used by the block compressors.
    ///
    /// [`CompressionBackend::Refined`] lowers the error of blocks with smooth gradients at the
    /// cost of a few least-squares solves per block.
    pub fn compression_backend(mut self, backend: CompressionBackend) -> Self {
        self.compression_backend = Some(backend);
        self
    }

    /// Set the refinement effort.
    pub fn quality_level(mut self, quality: QualityLevel) -> Self {
        self.quality_level = Some(quality);
        self
    }

    /// Set what happens to images that do not divide into whole 4x4 blocks.
    pub fn partial_blocks(mut self, policy: PartialBlockPolicy) -> Self {
        self.partial_blocks = Some(policy);
        self
    }

    /// Set the compressed formats the consumer accepts.
    pub fn support(mut self, support: CompressionSupport) -> Self {
        self.support = Some(support);
        self
    }

    /// Set whether single level images get a full mip chain before compression.
    pub fn generate_mips(mut self, generate: bool) -> Self {
        self.generate_mips = Some(generate);
        self
    }

    /// Build the options using the configured values.
    pub fn build(self) -> ConvertOptions {
        ConvertOptions {
            compression_backend: self.compression_backend.unwrap_or(CompressionBackend::Inset),
            quality_level: self.quality_level.unwrap_or(QualityLevel::Normal),
            partial_blocks: self.partial_blocks.unwrap_or(PartialBlockPolicy::Pad),
            support: self.support.unwrap_or_default(),
            generate_mips: self.generate_mips.unwrap_or(false),
        }
    }
}

impl Default for ConvertOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
