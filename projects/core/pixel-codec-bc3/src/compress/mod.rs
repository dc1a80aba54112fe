//! BC3 block compression.
//!
//! Colour endpoints and indices are produced by the BC1 compressor. This module only adds the
//! interpolated alpha half and drives both through the shared block loop.

mod alpha;
mod bc3;

pub use alpha::*;
pub use bc3::*;
