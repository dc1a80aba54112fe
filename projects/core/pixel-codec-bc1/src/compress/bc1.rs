use super::{
    base::{color_to_565, emit_color_indices, get_min_max_colors},
    compress_blocks,
    refine::{refine_endpoints, ColorEndpoints},
    BlockEncoder, CompressError, CompressSettings, CompressStats,
};
use crate::util::BC1_BLOCK_BYTES;
use pixel_codec_common::{
    color_565::Color565, decoded_4x4_block::Decoded4x4Block, format::PixelFormat,
};

/// Compresses 4x4 blocks into BC1.
///
/// Each block is written as `565(max)`, `565(min)` and 32 bits of indices. Because `max` is
/// never below `min` per channel, blocks are always in 4-colour mode unless both endpoints
/// quantize to the same value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Bc1Compressor {
    settings: CompressSettings,
}

impl Bc1Compressor {
    /// Creates a compressor with the given settings.
    pub const fn new(settings: CompressSettings) -> Self {
        Self { settings }
    }

    /// The settings this compressor was created with.
    pub const fn settings(&self) -> &CompressSettings {
        &self.settings
    }

    /// Finds the colour endpoints and indices for one block.
    ///
    /// Shared with BC3, whose colour half is encoded the same way.
    pub fn encode_colors(&self, block: &Decoded4x4Block) -> [u8; BC1_BLOCK_BYTES] {
        let (min, max) = get_min_max_colors(block);
        let mut endpoints = ColorEndpoints {
            c0: Color565::from_raw(color_to_565(max)),
            c1: Color565::from_raw(color_to_565(min)),
            indices: emit_color_indices(block, min, max),
        };

        let passes = self.settings.refinement_passes();
        if passes > 0 {
            endpoints = refine_endpoints(block, endpoints, passes);
        }

        let mut out = [0u8; BC1_BLOCK_BYTES];
        out[0..2].copy_from_slice(&endpoints.c0.to_le_bytes());
        out[2..4].copy_from_slice(&endpoints.c1.to_le_bytes());
        out[4..8].copy_from_slice(&endpoints.indices.to_le_bytes());
        out
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
        compress_blocks(self, src, src_format, dims, dst, self.settings.partial_blocks)
    }
}

impl BlockEncoder for Bc1Compressor {
    const BLOCK_BYTES: usize = BC1_BLOCK_BYTES;

    #[inline]
    fn encode_block(&self, block: &Decoded4x4Block, dst: &mut [u8]) {
        dst[..BC1_BLOCK_BYTES].copy_from_slice(&self.encode_colors(block));
    }
}
