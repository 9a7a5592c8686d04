//! Invalidation and rect-query benchmarks.
//!
//! A preferred-size change near the end of the list should cost far less
//! than a full relayout; width patches and rect queries scale linearly.
//!
//! Run with: cargo bench --bench invalidation

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use teapot_list::layout::{InvalidationRequest, ItemIndex, LayoutConfig, LayoutEngine, Rect};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 800.0)
}

/// One section holding `items` items, fully laid out.
fn prepared_engine(items: usize) -> LayoutEngine {
    let mut engine = LayoutEngine::new(LayoutConfig::default());
    engine.prepare(&[items][..], viewport());
    engine
}

fn benchmark_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_layout");

    for &items in &SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(items), &items, |b, &items| {
            b.iter(|| black_box(prepared_engine(items)));
        });
    }

    group.finish();
}

fn benchmark_preferred_size_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("preferred_size_change");

    for &items in &SIZES {
        let mut engine = prepared_engine(items);
        let last = ItemIndex::new(0, items - 1);
        let mut grow = true;

        group.bench_with_input(BenchmarkId::new("last_item", items), &items, |b, _| {
            b.iter(|| {
                let height_delta = if grow { 5.0 } else { -5.0 };
                grow = !grow;
                black_box(engine.invalidate(InvalidationRequest::PreferredSizeChanged {
                    index: last,
                    height_delta,
                }))
            });
        });

        let first = ItemIndex::new(0, 0);
        group.bench_with_input(BenchmarkId::new("first_item", items), &items, |b, _| {
            b.iter(|| {
                let height_delta = if grow { 5.0 } else { -5.0 };
                grow = !grow;
                black_box(engine.invalidate(InvalidationRequest::PreferredSizeChanged {
                    index: first,
                    height_delta,
                }))
            });
        });
    }

    group.finish();
}

fn benchmark_width_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("width_patch");

    for &items in &SIZES {
        let mut engine = prepared_engine(items);
        let mut widen = true;

        group.bench_with_input(BenchmarkId::from_parameter(items), &items, |b, _| {
            b.iter(|| {
                let width_delta = if widen { 10.0 } else { -10.0 };
                widen = !widen;
                black_box(engine.invalidate(InvalidationRequest::BoundsChanged { width_delta }))
            });
        });
    }

    group.finish();
}

fn benchmark_rect_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("attributes_in");

    for &items in &SIZES {
        let engine = prepared_engine(items);
        let middle = engine.content_size().height / 2.0;
        let rect = Rect::new(0.0, middle, 400.0, 800.0);

        group.bench_with_input(BenchmarkId::from_parameter(items), &items, |b, _| {
            b.iter(|| black_box(engine.attributes_in(black_box(rect))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_full_layout,
    benchmark_preferred_size_change,
    benchmark_width_patch,
    benchmark_rect_query
);
criterion_main!(benches);
