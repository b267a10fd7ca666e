// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gesture handling.
//!
//! Measures the performance of:
//! - Recognizing a tap and routing it to the store
//! - Replaying a long hold-and-drag stream
//! - Notifying observers on every applied change

use criterion::{criterion_group, criterion_main, Criterion};
use powerswitch::application::SwitchStore;
use powerswitch::domain::{GestureConfig, GestureRecognizer, SwitchId};
use std::hint::black_box;
use std::time::{Duration, Instant};

const WIDTH: f32 = 240.0;

/// Pointer positions sweeping back and forth across the button.
fn sweep(steps: usize) -> Vec<f32> {
    (0..steps)
        .map(|i| {
            let phase = (i % 80) as f32;
            if phase < 40.0 {
                60.0 + phase * 3.0
            } else {
                180.0 - (phase - 40.0) * 3.0
            }
        })
        .collect()
}

fn bench_tap(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_replay");
    let id = SwitchId::new(1);

    group.bench_function("tap_toggle", |b| {
        let mut store = SwitchStore::default();
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let t0 = Instant::now();
        b.iter(|| {
            let base = store.get(id).map(|s| s.intensity).unwrap_or_default();
            recognizer.press(black_box(100.0), t0, base);
            recognizer.moved(black_box(102.0), WIDTH);
            if let Some(intent) = recognizer.release(t0 + Duration::from_millis(120)) {
                store.apply_intent(id, intent);
            }
        });
        black_box(store.revision());
    });

    group.finish();
}

/// Replays a long drag; only the final value reaches the store.
fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_replay");
    let id = SwitchId::new(2);
    let positions = sweep(500);

    group.bench_function("hold_and_drag_500_moves", |b| {
        let mut store = SwitchStore::default();
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();
        b.iter(|| {
            let base = store.get(id).map(|s| s.intensity).unwrap_or_default();
            let ticket = recognizer.press(120.0, t0, base);
            if let Some(ticket) = ticket {
                recognizer.hold_elapsed(ticket);
            }
            for &x in &positions {
                black_box(recognizer.moved(x, WIDTH));
            }
            if let Some(intent) = recognizer.release(t0 + Duration::from_secs(2)) {
                store.apply_intent(id, intent);
            }
        });
        black_box(store.snapshot());
    });

    group.finish();
}

fn bench_observers(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_replay");
    let id = SwitchId::new(3);

    group.bench_function("toggle_with_8_observers", |b| {
        let mut store = SwitchStore::default();
        for _ in 0..8 {
            store.subscribe(|change, _| {
                black_box(change);
            });
        }
        b.iter(|| black_box(store.toggle(id)));
    });

    group.finish();
}

criterion_group!(benches, bench_tap, bench_drag, bench_observers);
criterion_main!(benches);
