//! Settings shared by the BC1 and BC3 compressors.

use derive_enum_all_values::AllValues;

/// Which endpoint search the compressor runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, AllValues)]
pub enum CompressionBackend {
    /// Per-channel minimum and maximum, inset by 1/16th of the range towards each other.
    #[default]
    Inset,

    /// [`CompressionBackend::Inset`], followed by least-squares endpoint refinement.
    ///
    /// The number of passes is controlled by [`QualityLevel`]. A pass is only kept if it
    /// lowers the block's squared error.
    Refined,
}

/// How much time the compressor may spend per block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, AllValues)]
pub enum QualityLevel {
    /// No refinement.
    Fastest,
    /// One refinement pass.
    #[default]
    Normal,
    /// Two refinement passes.
    Best,
}

impl QualityLevel {
    /// Number of least-squares refinement passes run by [`CompressionBackend::Refined`].
    #[inline]
    pub const fn refinement_passes(self) -> u32 {
        match self {
            QualityLevel::Fastest => 0,
            QualityLevel::Normal => 1,
            QualityLevel::Best => 2,
        }
    }
}

/// What to do with images whose width or height is not a multiple of 4.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, AllValues)]
pub enum PartialBlockPolicy {
    /// Replicate the edge pixels and lines of partial blocks until they are 4x4.
    #[default]
    Pad,
    /// Fail with [`CompressError::PartialBlock`](super::CompressError::PartialBlock).
    Reject,
}

/// The options for [`compress_bc1`](super::compress_bc1) and the BC3 compressor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CompressSettings {
    /// Endpoint search to run.
    pub backend: CompressionBackend,
    /// Refinement effort for [`CompressionBackend::Refined`].
    pub quality: QualityLevel,
    /// Handling of partial edge blocks.
    pub partial_blocks: PartialBlockPolicy,
}

impl CompressSettings {
    /// Refinement passes to run per block, taking the backend into account.
    #[inline]
    pub const fn refinement_passes(&self) -> u32 {
        match self.backend {
            CompressionBackend::Inset => 0,
            CompressionBackend::Refined => self.quality.refinement_passes(),
        }
    }
}
