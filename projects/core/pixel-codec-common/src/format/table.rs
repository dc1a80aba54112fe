//! The format table. Each row generates one [`PixelFormat`] variant, its name and its descriptor.
//!
//! Row syntax: `Variant = vk_value, "name", byte_size, (block_w, block_h), components, numeric,
//! [component bit_offset bit_width, ...];`

use super::{ChannelField, FormatDescriptor, FormatFlags, NumericFormat};
use crate::component::{PixelComponent, PixelComponents};
use crate::error::FormatError;
use derive_enum_all_values::AllValues;

macro_rules! pixel_formats {
    ($(
        $variant:ident = $value:literal, $name:literal, $bytes:literal, ($bw:literal, $bh:literal),
        $components:ident, $numeric:ident, [$($component:ident $offset:literal $width:literal),*];
    )*) => {
        /// A pixel format tag. Discriminants are the matching `VkFormat` values.
        #[repr(u32)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
        pub enum PixelFormat {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant = $value,
            )*
        }

        impl PixelFormat {
            /// Returns the unique short name of this format, such as `rgba32` or `bc1_rgb`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(PixelFormat::$variant => $name,)*
                }
            }

            /// Looks a format up by its short name. `argb32` is accepted as an alias of
            /// [`PixelFormat::R8G8B8A8Unorm`].
            ///
            /// # Errors
            ///
            /// [`FormatError::UnsupportedFormatName`] if no format has this name.
            pub fn from_name(name: &str) -> Result<Self, FormatError> {
                match name {
                    $($name => Ok(PixelFormat::$variant),)*
                    "argb32" => Ok(PixelFormat::R8G8B8A8Unorm),
                    _ => Err(FormatError::UnsupportedFormatName),
                }
            }

            /// Converts a raw `VkFormat` value into a tag.
            ///
            /// # Errors
            ///
            /// [`FormatError::UnsupportedFormat`] if `raw` is not a known tag.
            pub const fn from_raw(raw: u32) -> Result<Self, FormatError> {
                match raw {
                    $($value => Ok(PixelFormat::$variant),)*
                    _ => Err(FormatError::UnsupportedFormat(raw)),
                }
            }
        }

        /// Descriptors indexed by tag value.
        pub(super) static DESCRIPTORS: [FormatDescriptor; [$($value),*].len()] = [$(
            FormatDescriptor {
                format: PixelFormat::$variant,
                name: $name,
                byte_size: $bytes,
                block_extent: ($bw, $bh),
                components: PixelComponents::$components,
                numeric: NumericFormat::$numeric,
                fields: &[$(ChannelField {
                    component: PixelComponent::$component,
                    offset: $offset,
                    width: $width,
                }),*],
                flags: FormatFlags::derive(
                    $value,
                    PixelComponents::$components,
                    NumericFormat::$numeric,
                    ($bw, $bh),
                    &[$(ChannelField {
                        component: PixelComponent::$component,
                        offset: $offset,
                        width: $width,
                    }),*],
                ),
            },
        )*];
    };
}

pixel_formats! {
    Undefined = 0, "undefined", 0, (1, 1), NONE, Unorm, [];
    R4G4UnormPack8 = 1, "rg8", 1, (1, 1), RG, Unorm, [Red 4 4, Green 0 4];
    R4G4B4A4UnormPack16 = 2, "rgba16", 2, (1, 1), RGBA, Unorm, [Red 12 4, Green 8 4, Blue 4 4, Alpha 0 4];
    B4G4R4A4UnormPack16 = 3, "rgba16s", 2, (1, 1), RGBA, Unorm, [Blue 12 4, Green 8 4, Red 4 4, Alpha 0 4];
    R5G6B5UnormPack16 = 4, "rgb565", 2, (1, 1), RGB, Unorm, [Red 11 5, Green 5 6, Blue 0 5];
    B5G6R5UnormPack16 = 5, "bgr565", 2, (1, 1), RGB, Unorm, [Blue 11 5, Green 5 6, Red 0 5];
    R5G5B5A1UnormPack16 = 6, "rgba5551", 2, (1, 1), RGBA, Unorm, [Red 11 5, Green 6 5, Blue 1 5, Alpha 0 1];
    B5G5R5A1UnormPack16 = 7, "bgra5551", 2, (1, 1), RGBA, Unorm, [Blue 11 5, Green 6 5, Red 1 5, Alpha 0 1];
    A1R5G5B5UnormPack16 = 8, "argb1555", 2, (1, 1), RGBA, Unorm, [Alpha 15 1, Red 10 5, Green 5 5, Blue 0 5];
    R8Unorm = 9, "r8", 1, (1, 1), R, Unorm, [Red 0 8];
    R8Snorm = 10, "r8s", 1, (1, 1), R, Snorm, [Red 0 8];
    R8Uscaled = 11, "r8us", 1, (1, 1), R, Uscaled, [Red 0 8];
    R8Sscaled = 12, "r8ss", 1, (1, 1), R, Sscaled, [Red 0 8];
    R8Uint = 13, "r8ui", 1, (1, 1), R, Uint, [Red 0 8];
    R8Sint = 14, "r8si", 1, (1, 1), R, Sint, [Red 0 8];
    R8Srgb = 15, "r8srgb", 1, (1, 1), R, Srgb, [Red 0 8];
    R8G8Unorm = 16, "rg16", 2, (1, 1), RG, Unorm, [Red 0 8, Green 8 8];
    R8G8Snorm = 17, "rg16s", 2, (1, 1), RG, Snorm, [Red 0 8, Green 8 8];
    R8G8Uscaled = 18, "rg16us", 2, (1, 1), RG, Uscaled, [Red 0 8, Green 8 8];
    R8G8Sscaled = 19, "rg16ss", 2, (1, 1), RG, Sscaled, [Red 0 8, Green 8 8];
    R8G8Uint = 20, "rg16ui", 2, (1, 1), RG, Uint, [Red 0 8, Green 8 8];
    R8G8Sint = 21, "rg16si", 2, (1, 1), RG, Sint, [Red 0 8, Green 8 8];
    R8G8Srgb = 22, "rg16srgb", 2, (1, 1), RG, Srgb, [Red 0 8, Green 8 8];
    R8G8B8Unorm = 23, "rgb24", 3, (1, 1), RGB, Unorm, [Red 0 8, Green 8 8, Blue 16 8];
    R8G8B8Snorm = 24, "rgb24s", 3, (1, 1), RGB, Snorm, [Red 0 8, Green 8 8, Blue 16 8];
    R8G8B8Uscaled = 25, "rgb24us", 3, (1, 1), RGB, Uscaled, [Red 0 8, Green 8 8, Blue 16 8];
    R8G8B8Sscaled = 26, "rgb24ss", 3, (1, 1), RGB, Sscaled, [Red 0 8, Green 8 8, Blue 16 8];
    R8G8B8Uint = 27, "rgb24ui", 3, (1, 1), RGB, Uint, [Red 0 8, Green 8 8, Blue 16 8];
    R8G8B8Sint = 28, "rgb24si", 3, (1, 1), RGB, Sint, [Red 0 8, Green 8 8, Blue 16 8];
    R8G8B8Srgb = 29, "rgb24srgb", 3, (1, 1), RGB, Srgb, [Red 0 8, Green 8 8, Blue 16 8];
    B8G8R8Unorm = 30, "bgr24", 3, (1, 1), RGB, Unorm, [Blue 0 8, Green 8 8, Red 16 8];
    B8G8R8Snorm = 31, "bgr24s", 3, (1, 1), RGB, Snorm, [Blue 0 8, Green 8 8, Red 16 8];
    B8G8R8Uscaled = 32, "bgr24us", 3, (1, 1), RGB, Uscaled, [Blue 0 8, Green 8 8, Red 16 8];
    B8G8R8Sscaled = 33, "bgr24ss", 3, (1, 1), RGB, Sscaled, [Blue 0 8, Green 8 8, Red 16 8];
    B8G8R8Uint = 34, "bgr24ui", 3, (1, 1), RGB, Uint, [Blue 0 8, Green 8 8, Red 16 8];
    B8G8R8Sint = 35, "bgr24si", 3, (1, 1), RGB, Sint, [Blue 0 8, Green 8 8, Red 16 8];
    B8G8R8Srgb = 36, "bgr24srgb", 3, (1, 1), RGB, Srgb, [Blue 0 8, Green 8 8, Red 16 8];
    R8G8B8A8Unorm = 37, "rgba32", 4, (1, 1), RGBA, Unorm, [Red 0 8, Green 8 8, Blue 16 8, Alpha 24 8];
    R8G8B8A8Snorm = 38, "rgba32s", 4, (1, 1), RGBA, Snorm, [Red 0 8, Green 8 8, Blue 16 8, Alpha 24 8];
    R8G8B8A8Uscaled = 39, "rgba32us", 4, (1, 1), RGBA, Uscaled, [Red 0 8, Green 8 8, Blue 16 8, Alpha 24 8];
    R8G8B8A8Sscaled = 40, "rgba32ss", 4, (1, 1), RGBA, Sscaled, [Red 0 8, Green 8 8, Blue 16 8, Alpha 24 8];
    R8G8B8A8Uint = 41, "rgba32ui", 4, (1, 1), RGBA, Uint, [Red 0 8, Green 8 8, Blue 16 8, Alpha 24 8];
    R8G8B8A8Sint = 42, "rgba32si", 4, (1, 1), RGBA, Sint, [Red 0 8, Green 8 8, Blue 16 8, Alpha 24 8];
    R8G8B8A8Srgb = 43, "rgba32srgb", 4, (1, 1), RGBA, Srgb, [Red 0 8, Green 8 8, Blue 16 8, Alpha 24 8];
    B8G8R8A8Unorm = 44, "bgra32", 4, (1, 1), RGBA, Unorm, [Blue 0 8, Green 8 8, Red 16 8, Alpha 24 8];
    B8G8R8A8Snorm = 45, "bgra32s", 4, (1, 1), RGBA, Snorm, [Blue 0 8, Green 8 8, Red 16 8, Alpha 24 8];
    B8G8R8A8Uscaled = 46, "bgra32us", 4, (1, 1), RGBA, Uscaled, [Blue 0 8, Green 8 8, Red 16 8, Alpha 24 8];
    B8G8R8A8Sscaled = 47, "bgra32ss", 4, (1, 1), RGBA, Sscaled, [Blue 0 8, Green 8 8, Red 16 8, Alpha 24 8];
    B8G8R8A8Uint = 48, "bgra32ui", 4, (1, 1), RGBA, Uint, [Blue 0 8, Green 8 8, Red 16 8, Alpha 24 8];
    B8G8R8A8Sint = 49, "bgra32si", 4, (1, 1), RGBA, Sint, [Blue 0 8, Green 8 8, Red 16 8, Alpha 24 8];
    B8G8R8A8Srgb = 50, "bgra32srgb", 4, (1, 1), RGBA, Srgb, [Blue 0 8, Green 8 8, Red 16 8, Alpha 24 8];
    A8B8G8R8UnormPack32 = 51, "abgr32", 4, (1, 1), RGBA, Unorm, [Alpha 24 8, Blue 16 8, Green 8 8, Red 0 8];
    A8B8G8R8SnormPack32 = 52, "abgr32s", 4, (1, 1), RGBA, Snorm, [Alpha 24 8, Blue 16 8, Green 8 8, Red 0 8];
    A8B8G8R8UscaledPack32 = 53, "abgr32us", 4, (1, 1), RGBA, Uscaled, [Alpha 24 8, Blue 16 8, Green 8 8, Red 0 8];
    A8B8G8R8SscaledPack32 = 54, "abgr32ss", 4, (1, 1), RGBA, Sscaled, [Alpha 24 8, Blue 16 8, Green 8 8, Red 0 8];
    A8B8G8R8UintPack32 = 55, "abgr32ui", 4, (1, 1), RGBA, Uint, [Alpha 24 8, Blue 16 8, Green 8 8, Red 0 8];
    A8B8G8R8SintPack32 = 56, "abgr32si", 4, (1, 1), RGBA, Sint, [Alpha 24 8, Blue 16 8, Green 8 8, Red 0 8];
    A8B8G8R8SrgbPack32 = 57, "abgr32srgb", 4, (1, 1), RGBA, Srgb, [Alpha 24 8, Blue 16 8, Green 8 8, Red 0 8];
    A2R10G10B10UnormPack32 = 58, "argb2101010", 4, (1, 1), RGBA, Unorm, [Alpha 30 2, Red 20 10, Green 10 10, Blue 0 10];
    A2R10G10B10SnormPack32 = 59, "argb2101010s", 4, (1, 1), RGBA, Snorm, [Alpha 30 2, Red 20 10, Green 10 10, Blue 0 10];
    A2R10G10B10UscaledPack32 = 60, "argb2101010us", 4, (1, 1), RGBA, Uscaled, [Alpha 30 2, Red 20 10, Green 10 10, Blue 0 10];
    A2R10G10B10SscaledPack32 = 61, "argb2101010ss", 4, (1, 1), RGBA, Sscaled, [Alpha 30 2, Red 20 10, Green 10 10, Blue 0 10];
    A2R10G10B10UintPack32 = 62, "argb2101010ui", 4, (1, 1), RGBA, Uint, [Alpha 30 2, Red 20 10, Green 10 10, Blue 0 10];
    A2R10G10B10SintPack32 = 63, "argb2101010si", 4, (1, 1), RGBA, Sint, [Alpha 30 2, Red 20 10, Green 10 10, Blue 0 10];
    A2B10G10R10UnormPack32 = 64, "abgr2101010", 4, (1, 1), RGBA, Unorm, [Alpha 30 2, Blue 20 10, Green 10 10, Red 0 10];
    A2B10G10R10SnormPack32 = 65, "abgr2101010s", 4, (1, 1), RGBA, Snorm, [Alpha 30 2, Blue 20 10, Green 10 10, Red 0 10];
    A2B10G10R10UscaledPack32 = 66, "abgr2101010us", 4, (1, 1), RGBA, Uscaled, [Alpha 30 2, Blue 20 10, Green 10 10, Red 0 10];
    A2B10G10R10SscaledPack32 = 67, "abgr2101010ss", 4, (1, 1), RGBA, Sscaled, [Alpha 30 2, Blue 20 10, Green 10 10, Red 0 10];
    A2B10G10R10UintPack32 = 68, "abgr2101010ui", 4, (1, 1), RGBA, Uint, [Alpha 30 2, Blue 20 10, Green 10 10, Red 0 10];
    A2B10G10R10SintPack32 = 69, "abgr2101010si", 4, (1, 1), RGBA, Sint, [Alpha 30 2, Blue 20 10, Green 10 10, Red 0 10];
    R16Unorm = 70, "r16", 2, (1, 1), R, Unorm, [Red 0 16];
    R16Snorm = 71, "r16s", 2, (1, 1), R, Snorm, [Red 0 16];
    R16Uscaled = 72, "r16us", 2, (1, 1), R, Uscaled, [Red 0 16];
    R16Sscaled = 73, "r16ss", 2, (1, 1), R, Sscaled, [Red 0 16];
    R16Uint = 74, "r16ui", 2, (1, 1), R, Uint, [Red 0 16];
    R16Sint = 75, "r16si", 2, (1, 1), R, Sint, [Red 0 16];
    R16Sfloat = 76, "r16f", 2, (1, 1), R, Sfloat, [Red 0 16];
    R16G16Unorm = 77, "rg32", 4, (1, 1), RG, Unorm, [Red 0 16, Green 16 16];
    R16G16Snorm = 78, "rg32s", 4, (1, 1), RG, Snorm, [Red 0 16, Green 16 16];
    R16G16Uscaled = 79, "rg32us", 4, (1, 1), RG, Uscaled, [Red 0 16, Green 16 16];
    R16G16Sscaled = 80, "rg32ss", 4, (1, 1), RG, Sscaled, [Red 0 16, Green 16 16];
    R16G16Uint = 81, "rg32ui", 4, (1, 1), RG, Uint, [Red 0 16, Green 16 16];
    R16G16Sint = 82, "rg32si", 4, (1, 1), RG, Sint, [Red 0 16, Green 16 16];
    R16G16Sfloat = 83, "rg32f", 4, (1, 1), RG, Sfloat, [Red 0 16, Green 16 16];
    R16G16B16Unorm = 84, "rgb48", 6, (1, 1), RGB, Unorm, [Red 0 16, Green 16 16, Blue 32 16];
    R16G16B16Snorm = 85, "rgb48s", 6, (1, 1), RGB, Snorm, [Red 0 16, Green 16 16, Blue 32 16];
    R16G16B16Uscaled = 86, "rgb48us", 6, (1, 1), RGB, Uscaled, [Red 0 16, Green 16 16, Blue 32 16];
    R16G16B16Sscaled = 87, "rgb48ss", 6, (1, 1), RGB, Sscaled, [Red 0 16, Green 16 16, Blue 32 16];
    R16G16B16Uint = 88, "rgb48ui", 6, (1, 1), RGB, Uint, [Red 0 16, Green 16 16, Blue 32 16];
    R16G16B16Sint = 89, "rgb48si", 6, (1, 1), RGB, Sint, [Red 0 16, Green 16 16, Blue 32 16];
    R16G16B16Sfloat = 90, "rgb48f", 6, (1, 1), RGB, Sfloat, [Red 0 16, Green 16 16, Blue 32 16];
    R16G16B16A16Unorm = 91, "rgba64", 8, (1, 1), RGBA, Unorm, [Red 0 16, Green 16 16, Blue 32 16, Alpha 48 16];
    R16G16B16A16Snorm = 92, "rgba64s", 8, (1, 1), RGBA, Snorm, [Red 0 16, Green 16 16, Blue 32 16, Alpha 48 16];
    R16G16B16A16Uscaled = 93, "rgba64us", 8, (1, 1), RGBA, Uscaled, [Red 0 16, Green 16 16, Blue 32 16, Alpha 48 16];
    R16G16B16A16Sscaled = 94, "rgba64ss", 8, (1, 1), RGBA, Sscaled, [Red 0 16, Green 16 16, Blue 32 16, Alpha 48 16];
    R16G16B16A16Uint = 95, "rgba64ui", 8, (1, 1), RGBA, Uint, [Red 0 16, Green 16 16, Blue 32 16, Alpha 48 16];
    R16G16B16A16Sint = 96, "rgba64si", 8, (1, 1), RGBA, Sint, [Red 0 16, Green 16 16, Blue 32 16, Alpha 48 16];
    R16G16B16A16Sfloat = 97, "rgba64f", 8, (1, 1), RGBA, Sfloat, [Red 0 16, Green 16 16, Blue 32 16, Alpha 48 16];
    R32Uint = 98, "r32ui", 4, (1, 1), R, Uint, [Red 0 32];
    R32Sint = 99, "r32si", 4, (1, 1), R, Sint, [Red 0 32];
    R32Sfloat = 100, "r32f", 4, (1, 1), R, Sfloat, [Red 0 32];
    R32G32Uint = 101, "rg64ui", 8, (1, 1), RG, Uint, [Red 0 32, Green 32 32];
    R32G32Sint = 102, "rg64si", 8, (1, 1), RG, Sint, [Red 0 32, Green 32 32];
    R32G32Sfloat = 103, "rg64f", 8, (1, 1), RG, Sfloat, [Red 0 32, Green 32 32];
    R32G32B32Uint = 104, "rgb96ui", 12, (1, 1), RGB, Uint, [Red 0 32, Green 32 32, Blue 64 32];
    R32G32B32Sint = 105, "rgb96si", 12, (1, 1), RGB, Sint, [Red 0 32, Green 32 32, Blue 64 32];
    R32G32B32Sfloat = 106, "rgb96f", 12, (1, 1), RGB, Sfloat, [Red 0 32, Green 32 32, Blue 64 32];
    R32G32B32A32Uint = 107, "rgba128ui", 16, (1, 1), RGBA, Uint, [Red 0 32, Green 32 32, Blue 64 32, Alpha 96 32];
    R32G32B32A32Sint = 108, "rgba128si", 16, (1, 1), RGBA, Sint, [Red 0 32, Green 32 32, Blue 64 32, Alpha 96 32];
    R32G32B32A32Sfloat = 109, "rgba128f", 16, (1, 1), RGBA, Sfloat, [Red 0 32, Green 32 32, Blue 64 32, Alpha 96 32];
    R64Uint = 110, "r64ui", 8, (1, 1), R, Uint, [Red 0 64];
    R64Sint = 111, "r64si", 8, (1, 1), R, Sint, [Red 0 64];
    R64Sfloat = 112, "r64f", 8, (1, 1), R, Sfloat, [Red 0 64];
    R64G64Uint = 113, "rg128ui", 16, (1, 1), RG, Uint, [Red 0 64, Green 64 64];
    R64G64Sint = 114, "rg128si", 16, (1, 1), RG, Sint, [Red 0 64, Green 64 64];
    R64G64Sfloat = 115, "rg128f", 16, (1, 1), RG, Sfloat, [Red 0 64, Green 64 64];
    R64G64B64Uint = 116, "rgb192ui", 24, (1, 1), RGB, Uint, [Red 0 64, Green 64 64, Blue 128 64];
    R64G64B64Sint = 117, "rgb192si", 24, (1, 1), RGB, Sint, [Red 0 64, Green 64 64, Blue 128 64];
    R64G64B64Sfloat = 118, "rgb192f", 24, (1, 1), RGB, Sfloat, [Red 0 64, Green 64 64, Blue 128 64];
    R64G64B64A64Uint = 119, "rgba256ui", 32, (1, 1), RGBA, Uint, [Red 0 64, Green 64 64, Blue 128 64, Alpha 192 64];
    R64G64B64A64Sint = 120, "rgba256si", 32, (1, 1), RGBA, Sint, [Red 0 64, Green 64 64, Blue 128 64, Alpha 192 64];
    R64G64B64A64Sfloat = 121, "rgba256f", 32, (1, 1), RGBA, Sfloat, [Red 0 64, Green 64 64, Blue 128 64, Alpha 192 64];
    B10G11R11UfloatPack32 = 122, "bgr32f", 4, (1, 1), RGB, Ufloat, [Blue 22 10, Green 11 11, Red 0 11];
    E5B9G9R9UfloatPack32 = 123, "ebgr32f", 4, (1, 1), RGB, Ufloat, [Blue 18 9, Green 9 9, Red 0 9];
    D16Unorm = 124, "depth16", 2, (1, 1), D, Unorm, [Depth 0 16];
    X8D24UnormPack32 = 125, "depth24", 4, (1, 1), D, Unorm, [Depth 0 24];
    D32Sfloat = 126, "depth32f", 4, (1, 1), D, Sfloat, [Depth 0 32];
    S8Uint = 127, "stencil8", 1, (1, 1), S, Uint, [Stencil 0 8];
    D16UnormS8Uint = 128, "depth16s8", 4, (1, 1), DS, Unorm, [Depth 0 16, Stencil 16 8];
    D24UnormS8Uint = 129, "depth24s8", 4, (1, 1), DS, Unorm, [Depth 0 24, Stencil 24 8];
    D32SfloatS8Uint = 130, "depth32fs8", 8, (1, 1), DS, Sfloat, [Depth 0 32, Stencil 32 8];
    Bc1RgbUnormBlock = 131, "bc1_rgb", 8, (4, 4), RGB, Unorm, [];
    Bc1RgbSrgbBlock = 132, "bc1_srgb", 8, (4, 4), RGB, Srgb, [];
    Bc1RgbaUnormBlock = 133, "bc1_rgba", 8, (4, 4), RGBA, Unorm, [];
    Bc1RgbaSrgbBlock = 134, "bc1_rgba_srgb", 8, (4, 4), RGBA, Srgb, [];
    Bc2UnormBlock = 135, "bc2_rgba", 16, (4, 4), RGBA, Unorm, [];
    Bc2SrgbBlock = 136, "bc2_rgba_srgb", 16, (4, 4), RGBA, Srgb, [];
    Bc3UnormBlock = 137, "bc3_rgba", 16, (4, 4), RGBA, Unorm, [];
    Bc3SrgbBlock = 138, "bc3_rgba_srgb", 16, (4, 4), RGBA, Srgb, [];
    Bc4UnormBlock = 139, "bc4_r", 8, (4, 4), R, Unorm, [];
    Bc4SnormBlock = 140, "bc4_r_s", 8, (4, 4), R, Snorm, [];
    Bc5UnormBlock = 141, "bc5_rg", 16, (4, 4), RG, Unorm, [];
    Bc5SnormBlock = 142, "bc5_rg_s", 16, (4, 4), RG, Snorm, [];
    Bc6hUfloatBlock = 143, "bc6h", 16, (4, 4), RGB, Ufloat, [];
    Bc6hSfloatBlock = 144, "bc6h_s", 16, (4, 4), RGB, Sfloat, [];
    Bc7UnormBlock = 145, "bc7", 16, (4, 4), RGBA, Unorm, [];
    Bc7SrgbBlock = 146, "bc7_srgb", 16, (4, 4), RGBA, Srgb, [];
    Etc2R8G8B8UnormBlock = 147, "etc2_rgb", 8, (4, 4), RGB, Unorm, [];
    Etc2R8G8B8SrgbBlock = 148, "etc2_rgb_srgb", 8, (4, 4), RGB, Srgb, [];
    Etc2R8G8B8A1UnormBlock = 149, "etc2_rgba1", 8, (4, 4), RGBA, Unorm, [];
    Etc2R8G8B8A1SrgbBlock = 150, "etc2_rgba1_srgb", 8, (4, 4), RGBA, Srgb, [];
    Etc2R8G8B8A8UnormBlock = 151, "etc2_rgba", 16, (4, 4), RGBA, Unorm, [];
    Etc2R8G8B8A8SrgbBlock = 152, "etc2_rgba_srgb", 16, (4, 4), RGBA, Srgb, [];
    EacR11UnormBlock = 153, "eac_r", 8, (4, 4), R, Unorm, [];
    EacR11SnormBlock = 154, "eac_r_s", 8, (4, 4), R, Snorm, [];
    EacR11G11UnormBlock = 155, "eac_rg", 16, (4, 4), RG, Unorm, [];
    EacR11G11SnormBlock = 156, "eac_rg_s", 16, (4, 4), RG, Snorm, [];
    Astc4x4UnormBlock = 157, "astc_4x4", 16, (4, 4), RGBA, Unorm, [];
    Astc4x4SrgbBlock = 158, "astc_4x4_srgb", 16, (4, 4), RGBA, Srgb, [];
    Astc5x4UnormBlock = 159, "astc_5x4", 16, (5, 4), RGBA, Unorm, [];
    Astc5x4SrgbBlock = 160, "astc_5x4_srgb", 16, (5, 4), RGBA, Srgb, [];
    Astc5x5UnormBlock = 161, "astc_5x5", 16, (5, 5), RGBA, Unorm, [];
    Astc5x5SrgbBlock = 162, "astc_5x5_srgb", 16, (5, 5), RGBA, Srgb, [];
    Astc6x5UnormBlock = 163, "astc_6x5", 16, (6, 5), RGBA, Unorm, [];
    Astc6x5SrgbBlock = 164, "astc_6x5_srgb", 16, (6, 5), RGBA, Srgb, [];
    Astc6x6UnormBlock = 165, "astc_6x6", 16, (6, 6), RGBA, Unorm, [];
    Astc6x6SrgbBlock = 166, "astc_6x6_srgb", 16, (6, 6), RGBA, Srgb, [];
    Astc8x5UnormBlock = 167, "astc_8x5", 16, (8, 5), RGBA, Unorm, [];
    Astc8x5SrgbBlock = 168, "astc_8x5_srgb", 16, (8, 5), RGBA, Srgb, [];
    Astc8x6UnormBlock = 169, "astc_8x6", 16, (8, 6), RGBA, Unorm, [];
    Astc8x6SrgbBlock = 170, "astc_8x6_srgb", 16, (8, 6), RGBA, Srgb, [];
    Astc8x8UnormBlock = 171, "astc_8x8", 16, (8, 8), RGBA, Unorm, [];
    Astc8x8SrgbBlock = 172, "astc_8x8_srgb", 16, (8, 8), RGBA, Srgb, [];
    Astc10x5UnormBlock = 173, "astc_10x5", 16, (10, 5), RGBA, Unorm, [];
    Astc10x5SrgbBlock = 174, "astc_10x5_srgb", 16, (10, 5), RGBA, Srgb, [];
    Astc10x6UnormBlock = 175, "astc_10x6", 16, (10, 6), RGBA, Unorm, [];
    Astc10x6SrgbBlock = 176, "astc_10x6_srgb", 16, (10, 6), RGBA, Srgb, [];
    Astc10x8UnormBlock = 177, "astc_10x8", 16, (10, 8), RGBA, Unorm, [];
    Astc10x8SrgbBlock = 178, "astc_10x8_srgb", 16, (10, 8), RGBA, Srgb, [];
    Astc10x10UnormBlock = 179, "astc_10x10", 16, (10, 10), RGBA, Unorm, [];
    Astc10x10SrgbBlock = 180, "astc_10x10_srgb", 16, (10, 10), RGBA, Srgb, [];
    Astc12x10UnormBlock = 181, "astc_12x10", 16, (12, 10), RGBA, Unorm, [];
    Astc12x10SrgbBlock = 182, "astc_12x10_srgb", 16, (12, 10), RGBA, Srgb, [];
    Astc12x12UnormBlock = 183, "astc_12x12", 16, (12, 12), RGBA, Unorm, [];
    Astc12x12SrgbBlock = 184, "astc_12x12_srgb", 16, (12, 12), RGBA, Srgb, [];
}
