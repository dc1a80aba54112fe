#![no_main]

// Compresses arbitrary RGBA8 images with every backend and quality level, checking that
// compression is deterministic, fills exactly the expected number of blocks and that solid
// alpha survives BC3 unchanged.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_codec_bc1::compress::block_count;
use pixel_codec_bc1::{compress_bc1, CompressSettings, CompressionBackend, QualityLevel};
use pixel_codec_bc3::{compress_bc3, decode_bc3_block_from_slice};
use pixel_codec_common::PixelFormat;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Image {
    pub width: u8,
    pub height: u8,
    pub alpha: Option<u8>,
    pub pixels: Vec<u8>,
}

fuzz_target!(|image: Image| {
    let (width, height) = ((image.width % 17) as u32 + 1, (image.height % 17) as u32 + 1);
    let len = (width * height * 4) as usize;
    if image.pixels.len() < len {
        return;
    }

    let mut pixels = image.pixels[..len].to_vec();
    if let Some(alpha) = image.alpha {
        pixels.iter_mut().skip(3).step_by(4).for_each(|a| *a = alpha);
    }

    let blocks = block_count(width, height);
    for &backend in CompressionBackend::all_values() {
        for &quality in QualityLevel::all_values() {
            let settings = CompressSettings {
                backend,
                quality,
                ..CompressSettings::default()
            };

            let mut bc1 = vec![0u8; blocks * 8];
            let mut again = vec![0u8; blocks * 8];
            let stats = compress_bc1(&pixels, PixelFormat::R8G8B8A8Unorm, (width, height), &mut bc1, &settings).unwrap();
            compress_bc1(&pixels, PixelFormat::R8G8B8A8Unorm, (width, height), &mut again, &settings).unwrap();
            assert_eq!(stats.blocks, blocks);
            assert_eq!(bc1, again, "BC1 compression is not deterministic");

            let mut bc3 = vec![0u8; blocks * 16];
            compress_bc3(&pixels, PixelFormat::R8G8B8A8Unorm, (width, height), &mut bc3, &settings).unwrap();
            if let Some(alpha) = image.alpha {
                for block in bc3.chunks_exact(16) {
                    let decoded = decode_bc3_block_from_slice(block).unwrap();
                    assert!(decoded.pixels.iter().all(|pixel| pixel.a == alpha));
                }
            }
        }
    }
});
