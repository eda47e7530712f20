// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host simulation of a kg/lb weight picker.
//!
//! There is no UI here: a synthetic clock plays the role of the host event
//! loop, driving layout passes, a drag gesture, the debounced settle, and a
//! unit toggle. Run it to watch the event stream a real host would render
//! from:
//!
//! ```text
//! cargo run --bin weight_picker
//! ```

use core::time::Duration;

use vernier_controller::ScrollSurface;
use vernier_picker::{MeasurementPicker, PickerEvent, PickerOptions};
use vernier_scale::{MoveStyle, ScaleStyle};
use vernier_timing::Easing;
use vernier_units::MeasurementConfig;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    let kg = MeasurementConfig::builder(40.0, 200.0)
        .minor_interval(1.0)
        .major_interval(10.0)
        .decimal_places(1)
        .conversion_factor(0.453_592)
        .unit_label("kg")
        .initial_value(80.0)
        .build()
        .expect("static config is valid");
    let lb = kg.derive_paired("lb").expect("derived config is valid");
    let style = ScaleStyle::builder(10.0)
        .position_animation(MoveStyle::animated(Duration::from_millis(120), Easing::EaseOut))
        .build()
        .expect("static style is valid");

    let mut picker = MeasurementPicker::with_owned_surface(
        kg,
        lb,
        style,
        PickerOptions::new().toggle_labels("kg", "lb"),
    )
    .expect("static picker config is valid");

    picker.subscribe(|measurement| {
        println!(
            "  -> observer: {:.2} {} (primary: {})",
            measurement.value, measurement.unit, measurement.is_primary_unit
        );
    });

    let mut now = Duration::ZERO;
    let mut tick = |now: &mut Duration| {
        *now += FRAME;
        *now
    };

    // The surface is not laid out yet: the first layout pass defers.
    println!("layout pass with no attachment:");
    report(picker.on_layout(tick(&mut now)));

    // The host finishes layout and attaches the surface; positioning runs
    // as a 120ms ease-out move, and readiness arrives when it lands.
    picker.controller_mut().surface_mut().attach();
    report(picker.on_layout(tick(&mut now)));
    println!("animating into position...");
    while !picker.is_ready() {
        report(picker.on_frame(tick(&mut now)));
    }
    println!(
        "ready at offset {:.1}, value {:.1} {}",
        picker.controller().surface().offset(),
        picker.value(),
        picker.active_config().unit_label()
    );

    // A drag: the offset sweeps up and the picker publishes each mapped
    // value; 250ms of quiet then settles onto the nearest tick.
    println!("dragging to 96.5 kg:");
    for step in 1..=5 {
        let offset = 400.0 + 33.0 * f64::from(step);
        picker
            .controller_mut()
            .surface_mut()
            .set_offset(offset)
            .expect("surface is attached");
        report(picker.on_offset_changed(tick(&mut now)));
    }
    println!("settling:");
    for _ in 0..30 {
        report(picker.on_frame(tick(&mut now)));
    }
    println!(
        "settled at offset {:.1}, value {:.1}",
        picker.controller().surface().offset(),
        picker.value()
    );

    // Toggle to pounds: the value converts, the scale is rebuilt, and the
    // next layout pass repositions it.
    println!("toggle to {}:", picker.toggle_label().unwrap_or("?"));
    report(picker.toggle_unit());
    report(picker.on_layout(tick(&mut now)));
    while !picker.is_ready() {
        report(picker.on_frame(tick(&mut now)));
    }

    // Programmatic set, then teardown.
    println!("set_value 50 lb:");
    report(picker.set_value(50.0, tick(&mut now)));
    picker.dispose();
    println!("disposed");
}

fn report(events: Vec<PickerEvent>) {
    for event in events {
        match event {
            PickerEvent::Changed(measurement) => {
                println!(
                    "  changed: {:.2} {} (primary: {})",
                    measurement.value, measurement.unit, measurement.is_primary_unit
                );
            }
            PickerEvent::Ready => println!("  ready"),
        }
    }
}
