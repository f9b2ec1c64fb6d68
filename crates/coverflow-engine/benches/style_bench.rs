#![forbid(unsafe_code)]

use coverflow_core::Size;
use coverflow_engine::{CarouselState, compute_panel_style};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_compute_panel_style(c: &mut Criterion) {
    let mut group = c.benchmark_group("style/compute");
    let viewport = Size::new(1280.0, 480.0);

    group.bench_function("single_panel", |b| {
        let state = CarouselState {
            active: 8,
            offset: -240.0,
        };
        b.iter(|| {
            black_box(compute_panel_style(
                black_box(3),
                &state,
                viewport,
                3,
                16,
            ))
        });
    });

    group.bench_function("full_row_16", |b| {
        let state = CarouselState {
            active: 8,
            offset: -240.0,
        };
        b.iter(|| {
            for index in 0..16 {
                black_box(compute_panel_style(index, &state, viewport, 3, 16));
            }
        });
    });

    group.bench_function("transform_css", |b| {
        let state = CarouselState {
            active: 8,
            offset: -240.0,
        };
        let style = compute_panel_style(8, &state, viewport, 3, 16);
        b.iter(|| black_box(style.transform_css()));
    });

    group.finish();
}

criterion_group!(benches, bench_compute_panel_style);
criterion_main!(benches);
