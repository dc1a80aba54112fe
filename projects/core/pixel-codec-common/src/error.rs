//! Errors raised by format lookups and component accessors.

use crate::component::PixelComponent;
use crate::format::PixelFormat;
use thiserror::Error;

/// An error returned when a format tag, name or component cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The raw tag is unknown, or the format has no counterpart for the requested operation.
    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(u32),

    /// No format is registered under the given name.
    #[error("Unknown pixel format name")]
    UnsupportedFormatName,

    /// The format does not store the requested component.
    #[error("Pixel format {format:?} has no {component} component")]
    UnsupportedComponent {
        /// The format that was queried.
        format: PixelFormat,
        /// The component that was requested.
        component: PixelComponent,
    },
}

impl FormatError {
    /// Shorthand for [`FormatError::UnsupportedFormat`] from a typed tag.
    #[inline]
    pub const fn unsupported(format: PixelFormat) -> Self {
        FormatError::UnsupportedFormat(format as u32)
    }
}
