#![no_main]

// Converts arbitrary bytes between arbitrary format pairs. Conversion may fail with an error,
// but must never panic or write past the destination.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_codec_api::{convert_buffer, image_size};
use pixel_codec_common::PixelFormat;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub src_format: u8,
    pub dst_format: u8,
    pub width: u8,
    pub height: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let formats = PixelFormat::all_values();
    let src_format = formats[input.src_format as usize % formats.len()];
    let dst_format = formats[input.dst_format as usize % formats.len()];
    let (width, height) = ((input.width % 9) as u32 + 1, (input.height % 9) as u32 + 1);

    let mut dst = vec![0u8; image_size(dst_format, width, height)];
    let _ = convert_buffer(
        (width, height),
        (width, height),
        src_format,
        &input.data,
        dst_format,
        &mut dst,
    );
});
