use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use pixel_codec_api::{
    ConvertOptionsBuilder, ImageLayout, PixelBufferView, PxBuffer, convert_buffer,
};
use pixel_codec_common::PixelFormat;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut image = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            image.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 255]);
        }
    }
    image
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convert Buffers (512x512 RGBA8888)");
    let input = gradient(WIDTH, HEIGHT);
    group.throughput(Throughput::Bytes(input.len() as u64));

    let mut bgra = vec![0u8; input.len()];
    group.bench_function("rgba8_to_bgra8", |b| {
        b.iter(|| {
            convert_buffer(
                (WIDTH, HEIGHT),
                (WIDTH, HEIGHT),
                PixelFormat::R8G8B8A8Unorm,
                black_box(&input),
                PixelFormat::B8G8R8A8Unorm,
                &mut bgra,
            )
        })
    });

    let mut half = vec![0u8; input.len() * 2];
    group.bench_function("rgba8_to_rgba16f", |b| {
        b.iter(|| {
            convert_buffer(
                (WIDTH, HEIGHT),
                (WIDTH, HEIGHT),
                PixelFormat::R8G8B8A8Unorm,
                black_box(&input),
                PixelFormat::R16G16B16A16Sfloat,
                &mut half,
            )
        })
    });

    let view = PixelBufferView::new(
        ImageLayout::new(PixelFormat::R8G8B8A8Unorm, WIDTH, HEIGHT),
        &input,
    )
    .unwrap();
    let target = ImageLayout::new(PixelFormat::Bc3UnormBlock, WIDTH, HEIGHT);
    let options = ConvertOptionsBuilder::new().build();
    group.bench_function("from_view_bc3", |b| {
        b.iter(|| PxBuffer::from_view(&options, target, black_box(&view)))
    });

    let options = ConvertOptionsBuilder::new().generate_mips(true).build();
    group.bench_function("from_view_bc3_with_mips", |b| {
        b.iter(|| PxBuffer::from_view(&options, target, black_box(&view)))
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
