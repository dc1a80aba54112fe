//! Common test imports and utilities for pixel-codec-common tests
//!
//! This module provides a common set of imports used across test modules
//! to reduce duplication.

// Re-export commonly used external crates
pub use rstest::rstest;

// Re-export crate items
pub use crate::accessor::*;
pub use crate::color_565::Color565;
pub use crate::color_8888::Color8888;
pub use crate::component::*;
pub use crate::decoded_4x4_block::Decoded4x4Block;
pub use crate::error::FormatError;
pub use crate::format::*;

