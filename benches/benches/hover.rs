// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use thicket_event_state::hover::HoverCycle;

/// Builds a cycle whose current set half-overlaps the previous one.
fn half_overlapping_cycle(n: u32) -> HoverCycle<u32> {
    let mut hover = HoverCycle::new();
    hover.start_cycle();
    for k in 0..n {
        hover.append(k);
    }
    hover.finish_cycle();

    hover.start_cycle();
    for k in n / 2..n + n / 2 {
        hover.append(k);
    }
    hover
}

fn bench_hover_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover/diff");

    // Hypothesis: the linear diff is O(n^2) from its contains-scans, while
    // the hashed variant is O(n). At pointer-sized hit sets the linear scan
    // should win on constant factors.
    for n in [8_u32, 64, 512] {
        let hover = half_overlapping_cycle(n);
        group.throughput(Throughput::Elements(u64::from(n)));

        group.bench_with_input(BenchmarkId::new("linear", n), &hover, |b, hover| {
            b.iter(|| black_box((hover.entered(), hover.exited())));
        });

        group.bench_with_input(BenchmarkId::new("hashed", n), &hover, |b, hover| {
            b.iter(|| black_box((hover.entered_hashed(), hover.exited_hashed())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hover_diff);
criterion_main!(benches);
