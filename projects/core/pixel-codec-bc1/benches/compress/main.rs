use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_codec_bc1::{
    compress::block_count, compress_bc1, CompressSettings, CompressionBackend, QualityLevel,
};
use pixel_codec_common::PixelFormat;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Compress (RGBA8888 -> BC1)");

    // 1024x1024 RGBA8 image with some noise so blocks are not flat.
    let (width, height) = (1024u32, 1024u32);
    let input: Vec<u8> = (0..width as usize * height as usize * 4)
        .map(|i| ((i * 7 + (i >> 12) * 13) % 256) as u8)
        .collect();
    let mut output = vec![0u8; block_count(width, height) * 8];
    group.throughput(criterion::Throughput::Bytes(input.len() as u64));

    let cases = [
        ("inset", CompressionBackend::Inset, QualityLevel::Normal),
        ("refined_normal", CompressionBackend::Refined, QualityLevel::Normal),
        ("refined_best", CompressionBackend::Refined, QualityLevel::Best),
    ];
    for (name, backend, quality) in cases {
        let settings = CompressSettings {
            backend,
            quality,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("compress_bc1", name), &settings, |b, settings| {
            b.iter(|| {
                compress_bc1(
                    black_box(&input),
                    PixelFormat::R8G8B8A8Unorm,
                    (width, height),
                    &mut output,
                    settings,
                )
                .unwrap()
            })
        });
    }

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
