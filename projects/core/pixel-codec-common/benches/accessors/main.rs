use criterion::{criterion_group, criterion_main, Criterion};
use pixel_codec_common::{PixelAccessor, PixelFormat};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn bench_read_rgba8(c: &mut Criterion, format: PixelFormat, pixels: usize) {
    let accessor = PixelAccessor::new(format).unwrap();
    let input: Vec<u8> = (0..pixels * accessor.byte_size())
        .map(|i| (i % 251) as u8)
        .collect();

    let mut group = c.benchmark_group("Read RGBA8");
    group.throughput(criterion::Throughput::Bytes(input.len() as u64));
    group.bench_function(format.name(), |b| {
        b.iter(|| {
            let mut checksum = 0u32;
            for pixel in input.chunks_exact(accessor.byte_size()) {
                let color = accessor.read_rgba8(black_box(pixel));
                checksum = checksum.wrapping_add(u32::from_le_bytes(color.to_bytes()));
            }
            checksum
        })
    });
    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    // 1M pixels per format.
    let pixels = 1024 * 1024;
    bench_read_rgba8(c, PixelFormat::R8G8B8A8Unorm, pixels);
    bench_read_rgba8(c, PixelFormat::B5G6R5UnormPack16, pixels);
    bench_read_rgba8(c, PixelFormat::R16G16B16A16Sfloat, pixels);
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
