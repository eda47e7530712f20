// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmark for `vernier_controller`: a scroll storm with settle pumping.
//!
//! Models the hot path of a drag: a burst of offset-change events
//! interleaved with frame ticks, followed by the quiet period and the
//! settle animation.

use core::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vernier_controller::{OwnedSurface, ScaleController, ScrollSurface};
use vernier_scale::ScaleStyle;
use vernier_units::MeasurementConfig;

const FRAME: Duration = Duration::from_millis(16);

fn ready_controller() -> ScaleController<OwnedSurface> {
    let config = MeasurementConfig::builder(0.0, 2000.0)
        .minor_interval(1.0)
        .major_interval(10.0)
        .build()
        .expect("static config is valid");
    let style = ScaleStyle::builder(10.0).build().expect("static style is valid");
    let mut controller =
        ScaleController::with_owned_surface(&config, style).expect("static spacing is valid");
    controller.initialize();
    controller.surface_mut().attach();
    controller.on_layout(Duration::ZERO);
    controller
}

fn bench_scroll_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    group.bench_function("drag_then_settle", |b| {
        b.iter(|| {
            let mut controller = ready_controller();
            let mut now = Duration::ZERO;
            let mut published = 0_usize;

            // 120 frames of dragging, one offset event per frame.
            for step in 0..120_u32 {
                now += FRAME;
                let offset = f64::from(step) * 7.3;
                controller
                    .surface_mut()
                    .set_offset(black_box(offset))
                    .expect("surface is attached");
                published += controller.on_offset_changed(now).len();
                controller.on_frame(now);
            }

            // Quiet period plus the settle animation.
            for _ in 0..30 {
                now += FRAME;
                published += controller.on_frame(now).len();
            }
            black_box(published)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scroll_storm);
criterion_main!(benches);
