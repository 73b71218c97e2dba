// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use atlas_viewport::{PinchAnchor, ViewTransform, ViewerConfig, ViewportEngine};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};

const VIEWPORT: Size = Size::new(1024.0, 768.0);

fn engine(config: ViewerConfig) -> ViewportEngine {
    let mut engine = ViewportEngine::new(config).expect("default-derived config is valid");
    engine.set_viewport_size(VIEWPORT);
    engine.set_transform(ViewTransform::new(1.5, Vec2::new(-800.0, -600.0)));
    engine
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/drag");

    for len in [64usize, 1_024, 16_384] {
        // Zig-zag path that keeps hitting the clamp on both axes.
        let path: Vec<Point> = (0..len)
            .map(|i| {
                let t = i as f64 * 0.05;
                Point::new(512.0 + 900.0 * t.sin(), 384.0 + 700.0 * (t * 1.3).cos())
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("drag_move", len), &path, |b, path| {
            b.iter_batched(
                || engine(ViewerConfig::default()),
                |mut engine| {
                    engine.on_drag_start(Point::new(512.0, 384.0));
                    for p in path {
                        black_box(engine.on_drag_move(*p));
                    }
                    engine.on_drag_end();
                    black_box(engine);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/zoom");

    for len in [64usize, 1_024, 16_384] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("wheel", len), &len, |b, &len| {
            b.iter_batched(
                || engine(ViewerConfig::default()),
                |mut engine| {
                    for i in 0..len {
                        let delta = if (i / 16) % 2 == 0 { -1.0 } else { 1.0 };
                        let pointer = Point::new((i % 1024) as f64, (i % 768) as f64);
                        black_box(engine.on_wheel(pointer, delta));
                    }
                    black_box(engine);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("pinch_centroid", len), &len, |b, &len| {
            b.iter_batched(
                || engine(ViewerConfig::default().with_pinch_anchor(PinchAnchor::Centroid)),
                |mut engine| {
                    let a = Point::new(400.0, 384.0);
                    engine.on_pinch_start(a, Point::new(500.0, 384.0));
                    for i in 0..len {
                        let spread = 100.0 + 80.0 * (i as f64 * 0.01).sin();
                        black_box(engine.on_pinch_move(a, Point::new(400.0 + spread, 384.0)));
                    }
                    engine.on_pinch_end();
                    black_box(engine);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag, bench_zoom);
criterion_main!(benches);
