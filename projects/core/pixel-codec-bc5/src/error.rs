//! Errors raised while decoding BC5 blocks.

use thiserror::Error;

/// An error that happened while decoding a BC5 block.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Bc5DecodeError {
    /// The endpoint pair `-127, -128` is not a valid BC5 encoding.
    #[error("Malformed BC5 block: endpoints {lum0} and {lum1} are not allowed")]
    MalformedBlock {
        /// First endpoint of the offending half.
        lum0: i8,
        /// Second endpoint of the offending half.
        lum1: i8,
    },
}
