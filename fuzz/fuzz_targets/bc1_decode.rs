#![no_main]

// Compares the BC1 decoder against rgbcx-sys using the Ideal method.
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use core::mem;
use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_codec_bc1::util::decode_bc1_block;
use pixel_codec_common::color_8888::Color8888;
use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Block| {
    let decoded = decode_bc1_block(&block.bytes);
    let reference = rgbcx_decode_bc1_to_block(&block.bytes);
    assert_eq!(decoded, reference, "Decoded blocks don't match");
});

/// Decodes with rgbcx without touching alpha, so 3-colour black stays opaque.
fn rgbcx_decode_bc1_to_block(bc1_block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba_buffer = [255u8; 4 * 16];

    unsafe {
        rgbcx::unpack_bc1(
            bc1_block.as_ptr() as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            false, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );

        // RGBA byte order matches the Color8888 layout.
        let pixels: [Color8888; 16] = mem::transmute(rgba_buffer);
        Decoded4x4Block { pixels }
    }
}
