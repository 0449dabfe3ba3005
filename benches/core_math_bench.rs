use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use transfer_rs::core::{
    DataPoint, GradientStop, Normalization, PointSequence, Rgb, hit_test, merge_partitions,
    opacity_weighted_stops,
};

fn curve_10k() -> PointSequence {
    PointSequence::from_points(
        (0..10_000).map(|i| {
            let x = f64::from(i) / 10_000.0;
            DataPoint::new(x, (x * 12.0).sin() * 0.5 + 0.5)
        }),
        true,
    )
}

fn palette(count: u32) -> Vec<GradientStop> {
    (0..=count)
        .map(|i| {
            let t = f64::from(i) / f64::from(count);
            GradientStop::new(t, Rgb::new(255.0 * t, 128.0, 255.0 * (1.0 - t)))
        })
        .collect()
}

fn bench_index_for_x_10k(c: &mut Criterion) {
    let curve = curve_10k();

    c.bench_function("index_for_x_10k", |b| {
        b.iter(|| {
            let _ = curve.index_for_x(black_box(0.4321));
        })
    });
}

fn bench_hit_test_10k(c: &mut Criterion) {
    let curve = curve_10k();
    let query = DataPoint::new(0.4321, 0.5);

    c.bench_function("hit_test_10k", |b| {
        b.iter(|| {
            let _ = hit_test(black_box(&curve), black_box(query), black_box(1e-4));
        })
    });
}

fn bench_opacity_weighted_stops_10k(c: &mut Criterion) {
    let curve = curve_10k();
    let palette = palette(16);

    c.bench_function("opacity_weighted_stops_10k", |b| {
        b.iter(|| {
            let _ = opacity_weighted_stops(
                black_box(&palette),
                black_box(&curve),
                black_box(Normalization::unit()),
            );
        })
    });
}

fn bench_merge_partitions_10k(c: &mut Criterion) {
    let curve = curve_10k();
    let palette = palette(256);
    let handles = PointSequence::from_points(
        palette.iter().map(|stop| DataPoint::new(stop.offset, 0.001)),
        true,
    );

    c.bench_function("merge_partitions_10k", |b| {
        b.iter(|| {
            let _ = merge_partitions(
                black_box(&curve),
                Normalization::unit(),
                black_box(&handles),
                Normalization::unit(),
                black_box(&palette),
                black_box(1e-5),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_index_for_x_10k,
    bench_hit_test_10k,
    bench_opacity_weighted_stops_10k,
    bench_merge_partitions_10k
);
criterion_main!(benches);
