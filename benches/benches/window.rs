// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lightwall_layout::GridGeometry;
use lightwall_window::{WindowState, compute_window};

fn bench_compute_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("window/compute_window");
    let geometry = GridGeometry::new(4, 300.0, 24.0);

    // Hypothesis: cost is flat in collection size; the window is a pure
    // function of the sample, not of total_items.
    for total_items in [1_000_usize, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(total_items),
            &total_items,
            |b, &total_items| {
                let mut scroll = 0.0_f64;
                b.iter(|| {
                    // Walk the scroll offset so the branch pattern varies.
                    scroll = (scroll + 137.0) % 50_000.0;
                    black_box(compute_window(
                        black_box(total_items),
                        &geometry,
                        scroll,
                        800.0,
                        1,
                    ))
                });
            },
        );
    }
    group.finish();
}

fn bench_window_state_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("window/state_scroll");

    // A fling: every sample changes, so every call recomputes.
    group.bench_function("fling_samples", |b| {
        let mut state = WindowState::new(GridGeometry::new(4, 300.0, 24.0), 800.0);
        state.set_total_items(100_000);
        let mut scroll = 0.0_f64;
        b.iter(|| {
            scroll += 16.7 * 3.0;
            state.set_scroll_offset(scroll);
            black_box(state.window())
        });
    });

    // Idle repaints: the sample never changes, the cache answers.
    group.bench_function("cached_samples", |b| {
        let mut state = WindowState::new(GridGeometry::new(4, 300.0, 24.0), 800.0);
        state.set_total_items(100_000);
        state.set_scroll_offset(5_000.0);
        b.iter(|| black_box(state.window()));
    });

    group.finish();
}

criterion_group!(benches, bench_compute_window, bench_window_state_scroll);
criterion_main!(benches);
