use criterion::{criterion_group, criterion_main, Criterion};
use pixel_codec_bc1::{compress::block_count, CompressSettings};
use pixel_codec_bc3::{compress_bc3, util::decode_bc3_block_from_slice};
use pixel_codec_common::PixelFormat;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC3 (RGBA8888 <-> BC3)");

    let (width, height) = (1024u32, 1024u32);
    let input: Vec<u8> = (0..width as usize * height as usize * 4)
        .map(|i| ((i * 11 + (i >> 10) * 5) % 256) as u8)
        .collect();
    let mut compressed = vec![0u8; block_count(width, height) * 16];
    let settings = CompressSettings::default();
    group.throughput(criterion::Throughput::Bytes(input.len() as u64));

    group.bench_function("compress_bc3", |b| {
        b.iter(|| {
            compress_bc3(
                black_box(&input),
                PixelFormat::R8G8B8A8Unorm,
                (width, height),
                &mut compressed,
                &settings,
            )
            .unwrap()
        })
    });

    group.bench_function("decode_bc3_block", |b| {
        b.iter(|| {
            let mut checksum = 0u32;
            for block in compressed.chunks_exact(16) {
                if let Some(decoded) = decode_bc3_block_from_slice(black_box(block)) {
                    checksum = checksum.wrapping_add(decoded.get_pixel(1, 1).a as u32);
                }
            }
            checksum
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
