use criterion::{criterion_group, criterion_main, Criterion};
use pixel_codec_bc1::util::{decode_bc1_block, BC1_BLOCK_BYTES};
use pixel_codec_common::decoded_4x4_block::Decoded4x4Block;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Decode Blocks (BC1 -> RGBA8888)");

    // 8MB of BC1 blocks
    let bc1_size = 8388608;
    let blocks_count = bc1_size / BC1_BLOCK_BYTES;

    // Alternate endpoint order so both palette modes are hit.
    let mut input = vec![0u8; bc1_size];
    for (block_idx, block) in input.chunks_exact_mut(BC1_BLOCK_BYTES).enumerate() {
        let (c0, c1) = if block_idx % 2 == 0 {
            (0xF81Fu16, 0x07E0u16)
        } else {
            (0x07E0u16, 0xF81Fu16)
        };
        block[0..2].copy_from_slice(&c0.to_le_bytes());
        block[2..4].copy_from_slice(&c1.to_le_bytes());
        for (i, index_byte) in block[4..8].iter_mut().enumerate() {
            *index_byte = ((block_idx * (i + 4)) % 255) as u8;
        }
    }

    let mut output = vec![Decoded4x4Block::default(); blocks_count];
    group.throughput(criterion::Throughput::Bytes(bc1_size as u64));

    group.bench_function("decode_bc1_block", |b| {
        b.iter(|| {
            for (block, decoded) in input.chunks_exact(BC1_BLOCK_BYTES).zip(output.iter_mut()) {
                // chunks_exact guarantees the length
                let block: &[u8; BC1_BLOCK_BYTES] = block.try_into().unwrap();
                *decoded = decode_bc1_block(black_box(block));
            }
        })
    });

    group.bench_function("has_identical_pixels", |b| {
        b.iter(|| {
            output
                .iter()
                .filter(|block| block.has_identical_pixels())
                .count()
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
