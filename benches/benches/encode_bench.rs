use std::hint::black_box;

use abf_core::{interleave, quantize, select_scales, AbfWriter};
use abf_types::ChannelMatrix;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Синусоиды с разной амплитудой по каналам.
fn synthetic_matrix(
    channels: usize,
    samples: usize,
) -> ChannelMatrix {
    let data = (0..channels)
        .map(|ch| {
            let amp = 10f64.powi(ch as i32 % 5);
            (0..samples)
                .map(|i| amp * (i as f64 * 0.01 * (ch + 1) as f64).sin())
                .collect()
        })
        .collect();

    ChannelMatrix::from_channels(data).expect("valid synthetic matrix")
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let writer = AbfWriter::default();

    for &channels in &[1usize, 4, 16] {
        let m = synthetic_matrix(channels, 100_000);
        group.throughput(Throughput::Elements(m.total_samples() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(channels), &m, |b, m| {
            b.iter(|| writer.encode(black_box(m), 20_000.0).expect("encode"))
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let m = synthetic_matrix(8, 100_000);
    let scales = select_scales(&m).expect("scales");
    let flat = interleave(&m);

    c.bench_function("select_scales/8x100k", |b| {
        b.iter(|| select_scales(black_box(&m)))
    });
    c.bench_function("interleave/8x100k", |b| b.iter(|| interleave(black_box(&m))));
    c.bench_function("quantize/8x100k", |b| {
        b.iter(|| quantize(black_box(&flat), black_box(&scales)))
    });
}

criterion_group!(benches, bench_encode, bench_stages);
criterion_main!(benches);
