// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, RoundedRect};
use thicket_hit::PointHit;
use thicket_scene::{Entity, PointerEvent, Scene};

fn bench_rounded_rect_may_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/rounded_rect");

    let rr = RoundedRect::new(0.0, 0.0, 100.0, 100.0, 20.0);
    // A spread of band, corner-disk, and miss points around the shape.
    let points: Vec<Point> = (0..1_000)
        .map(|i| {
            let t = f64::from(i);
            Point::new((t * 7.3) % 120.0 - 10.0, (t * 3.7) % 120.0 - 10.0)
        })
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("may_hit", |b| {
        b.iter(|| {
            let mut hits = 0_u32;
            for &pt in &points {
                if rr.may_hit(black_box(pt)) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    group.finish();
}

fn bench_scene_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/scene_move");

    // Hypothesis: a pointer-move is linear in the entity count (one hover
    // hit-test per entity plus a constant amount of manager bookkeeping).
    for n in [16_usize, 64, 256] {
        let mut scene = Scene::new();
        for i in 0..n {
            let x = (i % 16) as f64 * 120.0;
            let y = (i / 16) as f64 * 120.0;
            scene.append(Entity::rect(x, y, 100.0, 100.0, 10.0));
        }
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("handle_move", n), &n, |b, _| {
            b.iter(|| {
                // Alternate two positions so hover transitions fire each move.
                let e1 = scene.handle_event(PointerEvent::Move {
                    pos: Point::new(50.0, 50.0),
                });
                let e2 = scene.handle_event(PointerEvent::Move {
                    pos: Point::new(170.0, 50.0),
                });
                black_box((e1, e2))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rounded_rect_may_hit, bench_scene_pointer_move);
criterion_main!(benches);
