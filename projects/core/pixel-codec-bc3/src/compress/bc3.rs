use super::emit_alpha_indices;
use crate::util::BC3_BLOCK_BYTES;
use pixel_codec_bc1::compress::{
    base::get_min_max_colors_with_alpha, compress_blocks, BlockEncoder, CompressError,
    CompressSettings, CompressStats,
};
use pixel_codec_bc1::Bc1Compressor;
use pixel_codec_common::{decoded_4x4_block::Decoded4x4Block, format::PixelFormat};

/// Compresses 4x4 blocks into BC3.
///
/// Each block is written as `max_alpha`, `min_alpha`, 6 bytes of alpha indices, then a BC1
/// colour block from [`Bc1Compressor::encode_colors`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Bc3Compressor {
    colors: Bc1Compressor,
}

impl Bc3Compressor {
    /// Creates a compressor with the given settings.
    pub const fn new(settings: CompressSettings) -> Self {
        Self {
            colors: Bc1Compressor::new(settings),
        }
    }

    /// The settings this compressor was created with.
    pub const fn settings(&self) -> &CompressSettings {
        self.colors.settings()
    }

    /// Compresses a whole image, see [`compress_blocks`].
    ///
    /// # Errors
    ///
    /// See [`compress_blocks`].
    pub fn compress(
        &self,
        src: &[u8],
        src_format: PixelFormat,
        dims: (u32, u32),
        dst: &mut [u8],
    ) -> Result<CompressStats, CompressError> {
        compress_blocks(self, src, src_format, dims, dst, self.settings().partial_blocks)
    }
}

impl BlockEncoder for Bc3Compressor {
    const BLOCK_BYTES: usize = BC3_BLOCK_BYTES;

    #[inline]
    fn encode_block(&self, block: &Decoded4x4Block, dst: &mut [u8]) {
        let (min, max) = get_min_max_colors_with_alpha(block);
        dst[0] = max.a;
        dst[1] = min.a;
        dst[2..8].copy_from_slice(&emit_alpha_indices(block, min.a, max.a));
        dst[8..16].copy_from_slice(&self.colors.encode_colors(block));
    }
}

/// Compresses an image into BC3 blocks.
///
/// See [`compress_blocks`] for the parameters and errors.
///
/// # Example
///
/// ```
/// use pixel_codec_bc3::{compress_bc3, decode_bc3_block};
/// use pixel_codec_bc1::CompressSettings;
/// use pixel_codec_common::format::PixelFormat;
///
/// let src = [0u8, 0, 255, 128].repeat(16);
/// let mut dst = [0u8; 16];
/// compress_bc3(&src, PixelFormat::R8G8B8A8Unorm, (4, 4), &mut dst, &CompressSettings::default()).unwrap();
///
/// let decoded = decode_bc3_block(&dst);
/// assert_eq!(decoded.get_pixel(0, 0).a, 128);
/// ```
pub fn compress_bc3(
    src: &[u8],
    src_format: PixelFormat,
    dims: (u32, u32),
    dst: &mut [u8],
    settings: &CompressSettings,
) -> Result<CompressStats, CompressError> {
    Bc3Compressor::new(*settings).compress(src, src_format, dims, dst)
}
