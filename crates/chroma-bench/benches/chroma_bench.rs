//! Benchmarks for color conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chroma_color::hue::normalize_hue;
use chroma_color::{convert_rgb, Hls, Hsv, Lab, LinearRgb};
use chroma_math::{adapt, adaptation_matrix, Vec3, D50, D65};
use chroma_primaries::{rgb_to_xyz_matrix, ProfileId, SRGB, SRGB_D50};
use chroma_transfer::{srgb, Curve};

fn ramp(size: usize) -> Vec<LinearRgb> {
    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            LinearRgb::new(t, t * 0.8, t * 0.6)
        })
        .collect()
}

/// Benchmark gamma curves.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_decode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::decode(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_encode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::encode(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("adobe_rgb_encode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| Curve::AdobeRgb.encode(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark matrix derivation and adaptation.
fn bench_matrices(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrices");

    for id in [ProfileId::Srgb, ProfileId::AdobeRgb, ProfileId::CieRgb, ProfileId::Ntsc] {
        group.bench_with_input(BenchmarkId::new("rgb_to_xyz", id), &id, |b, id| {
            b.iter(|| rgb_to_xyz_matrix(black_box(id.profile())))
        });
    }

    group.bench_function("adaptation_matrix_d65_d50", |b| {
        b.iter(|| adaptation_matrix(black_box(D65), black_box(D50)))
    });

    group.bench_function("adapt_d65_d50", |b| {
        b.iter(|| adapt(black_box(Vec3::new(0.3, 0.4, 0.5)), D65, D50))
    });

    group.finish();
}

/// Benchmark per-pixel conversions.
fn bench_pixels(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixels");

    for &pixel_count in &[256 * 256, 1024 * 1024] {
        let pixels = ramp(pixel_count);

        group.throughput(Throughput::Elements(pixel_count as u64));

        group.bench_with_input(BenchmarkId::new("rgb_to_lab", pixel_count), &pixels, |b, pixels| {
            b.iter(|| {
                pixels
                    .iter()
                    .map(|p| p.to_lab(&SRGB))
                    .collect::<Result<Vec<Lab>, _>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("srgb_to_srgb_d50", pixel_count), &pixels, |b, pixels| {
            b.iter(|| {
                pixels
                    .iter()
                    .map(|p| convert_rgb(*p, &SRGB, &SRGB_D50))
                    .collect::<Result<Vec<_>, _>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("hsv_hls", pixel_count), &pixels, |b, pixels| {
            b.iter(|| {
                pixels
                    .iter()
                    .map(|p| (Hsv::from_rgb(*p), Hls::from_rgb(*p)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark hue wrapping with far out-of-range input.
fn bench_hue(c: &mut Criterion) {
    c.bench_function("normalize_hue_large", |b| b.iter(|| normalize_hue(black_box(1.0e12))));
}

criterion_group!(benches, bench_transfer, bench_matrices, bench_pixels, bench_hue);

criterion_main!(benches);
