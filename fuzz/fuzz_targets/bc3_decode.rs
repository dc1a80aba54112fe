#![no_main]

// Compares the BC3 decoder against rgbcx-sys.
// BC3 stores a BC4 style alpha block followed by a BC1 colour block.

use core::mem;
use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_codec_bc3::util::decode_bc3_block;
use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;
use pixel_codec_common::{color_565::Color565, color_8888::Color8888};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc3Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc3Block| {
    // BC3 colour blocks always use 4 colours; rgbcx switches on c0 <= c1, so skip those.
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let decoded = decode_bc3_block(&block.bytes);
    let reference = rgbcx_decode_bc3_to_block(&block.bytes);
    assert_eq!(decoded, reference, "Decoded blocks don't match");
});

fn rgbcx_decode_bc3_to_block(bc3_block: &[u8; 16]) -> Decoded4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16];

    unsafe {
        rgbcx::unpack_bc3(
            bc3_block.as_ptr() as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );

        let pixels: [Color8888; 16] = mem::transmute(rgba_buffer);
        Decoded4x4Block { pixels }
    }
}
