// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vernier_scale --heading-base-level=0

//! Vernier Scale: tick derivation and scroll-offset/value mapping.
//!
//! This crate provides the stateless geometry of a ruler-style scale widget:
//! given a validated measurement range and a presentation configuration, it
//! derives the discrete tick layout and the bidirectional transform between a
//! scroll offset (in host pixels) and a domain value.
//!
//! The core concepts are:
//!
//! - [`ScaleMapper`]: the affine transform `offset ↔ value` plus snap
//!   rounding, with both directions exact inverses modulo floating-point
//!   rounding.
//! - [`TickModel`]: the discrete tick layout — item count, per-index values,
//!   major/minor classification (an integer stride test on the tick index,
//!   never a floating-point modulo), and label synthesis.
//! - [`ScaleStyle`]: the presentation/behavior configuration — tick spacing,
//!   [`Orientation`], programmatic-positioning animation, label options, and
//!   pass-through tick geometry and colors for the host rendering layer.
//!
//! This crate deliberately does **not** render anything and holds no
//! interaction state. Host frameworks query [`TickModel`] on each redraw and
//! feed scroll offsets through whatever owns a [`ScaleMapper`] (typically the
//! controller in `vernier_controller`).
//!
//! ## Minimal example
//!
//! ```rust
//! use vernier_scale::{ScaleMapper, ScaleStyle, TickModel};
//! use vernier_units::MeasurementConfig;
//!
//! let config = MeasurementConfig::builder(0.0, 200.0)
//!     .minor_interval(1.0)
//!     .major_interval(10.0)
//!     .build()
//!     .unwrap();
//! let style = ScaleStyle::builder(10.0).build().unwrap();
//!
//! let mapper = ScaleMapper::new(&config, style.item_spacing()).unwrap();
//! assert_eq!(mapper.value_to_offset(155.0), 1550.0);
//! assert_eq!(mapper.offset_to_value(1550.0), 155.0);
//!
//! let ticks = TickModel::from_config(&config);
//! assert_eq!(ticks.item_count(), 201);
//! assert!(ticks.is_major(150));
//! assert!(!ticks.is_major(155));
//! ```
//!
//! All offsets live in a caller-chosen 1D coordinate space (typically logical
//! pixels) and are expected to be finite. This crate is `no_std` and uses
//! `alloc`.

#![no_std]

extern crate alloc;

mod mapper;
mod style;
mod ticks;

pub use mapper::{ScaleError, ScaleMapper};
pub use style::{MoveStyle, Orientation, ScaleStyle, ScaleStyleBuilder, TickLabelFn};
pub use ticks::TickModel;
