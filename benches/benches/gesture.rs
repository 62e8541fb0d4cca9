// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use lightwall_gesture::GestureRecognizer;

fn bench_tap_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/tap_session");
    group.throughput(Throughput::Elements(2));
    group.bench_function("down_up", |b| {
        b.iter_batched(
            GestureRecognizer::default,
            |mut rec| {
                let _ = rec.on_down(1, Point::new(40.0, 40.0), 0);
                black_box(rec.on_up(1, Point::new(40.0, 40.0), 100))
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_swipe_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/swipe_session");

    // A fling produces a dense move stream; classification stays flat per event.
    for moves in [8_usize, 32, 128] {
        group.throughput(Throughput::Elements(moves as u64 + 2));
        group.bench_function(format!("moves_{moves}"), |b| {
            b.iter_batched(
                GestureRecognizer::default,
                |mut rec| {
                    let _ = rec.on_down(1, Point::new(0.0, 0.0), 0);
                    for i in 0..moves {
                        let x = (i + 1) as f64 * 4.0;
                        let _ = rec.on_move(1, Point::new(x, 0.0), (i as u64 + 1) * 8);
                    }
                    black_box(rec.on_up(
                        1,
                        Point::new((moves + 1) as f64 * 4.0, 0.0),
                        (moves as u64 + 2) * 8,
                    ))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pinch_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pinch_stream");
    group.throughput(Throughput::Elements(64));
    group.bench_function("samples_64", |b| {
        b.iter_batched(
            || {
                let mut rec = GestureRecognizer::default();
                let _ = rec.on_down(1, Point::new(0.0, 0.0), 0);
                let _ = rec.on_down(2, Point::new(100.0, 0.0), 5);
                rec
            },
            |mut rec| {
                for i in 0..64_u64 {
                    let x = 100.0 + i as f64 * 2.0;
                    black_box(rec.on_move(2, Point::new(x, 0.0), 10 + i * 8));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_tap_session, bench_swipe_session, bench_pinch_stream);
criterion_main!(benches);
