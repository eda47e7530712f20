// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `vernier_scale`: mapping and tick derivation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use vernier_scale::{ScaleMapper, ScaleStyle, TickModel};
use vernier_units::MeasurementConfig;

fn config(span: f64) -> MeasurementConfig {
    MeasurementConfig::builder(0.0, span)
        .minor_interval(1.0)
        .major_interval(10.0)
        .decimal_places(1)
        .build()
        .expect("static config is valid")
}

fn bench_mapping(c: &mut Criterion) {
    let mapper = ScaleMapper::new(&config(2000.0), 10.0).expect("static spacing is valid");

    let mut group = c.benchmark_group("scale_mapping");
    group.bench_function("offset_to_value_round_trip", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut value = 0.0;
            while value < 2000.0 {
                let offset = mapper.value_to_offset(black_box(value));
                acc += mapper.offset_to_value(black_box(offset));
                value += 0.37;
            }
            acc
        });
    });
    group.bench_function("snap_offset", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut offset = -100.0;
            while offset < 20_100.0 {
                acc += mapper.snap_offset(black_box(offset));
                offset += 3.3;
            }
            acc
        });
    });
    group.finish();
}

fn bench_ticks(c: &mut Criterion) {
    let style = ScaleStyle::builder(10.0).build().expect("static style is valid");

    let mut group = c.benchmark_group("tick_model");
    for span in [200.0_f64, 2000.0, 20_000.0] {
        let ticks = TickModel::from_config(&config(span));
        group.bench_with_input(
            BenchmarkId::new("classify_and_label", span as u64),
            &ticks,
            |b, ticks| {
                b.iter(|| {
                    let mut labeled = 0_usize;
                    for index in 0..ticks.item_count() {
                        if ticks.is_major(black_box(index)) {
                            labeled += usize::from(ticks.label_at(index, &style).is_some());
                        }
                    }
                    labeled
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_mapping, bench_ticks);
criterion_main!(benches);
