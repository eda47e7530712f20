// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vernier_picker --heading-base-level=0

//! Vernier Picker: a dual-unit measurement picker.
//!
//! This crate composes a [`ScaleController`](vernier_controller::ScaleController)
//! with two measurement configurations — a primary and a secondary unit —
//! into one coordinator that owns the "which unit is active" flag and the
//! current value in that unit, converts on unit toggles, and republishes a
//! single unified change event.
//!
//! The core concepts are:
//!
//! - [`MeasurementPicker`]: the coordinator. Scroll input flows through the
//!   embedded controller and out as [`PickerEvent::Changed`] carrying a
//!   fresh [`MeasurementValue`]; toggling units converts the value and
//!   rebuilds the embedded scale around the freshly active configuration.
//! - [`MeasurementValue`]: the immutable output DTO —
//!   `{ value, unit, is_primary_unit }` — constructed anew for every
//!   notification.
//! - [`PickerOptions`]: which unit starts active, an optional starting
//!   value, and optional labels for a toggle affordance.
//!
//! Conversion preserves the factor asymmetry exactly: a config's
//! `conversion_factor` takes a primary-unit value into the paired unit, so
//! toggling primary→secondary multiplies by the primary config's factor and
//! toggling secondary→primary multiplies by the reciprocal of the secondary
//! config's factor.
//!
//! ## Minimal example
//!
//! ```rust
//! use vernier_picker::{MeasurementPicker, PickerOptions};
//! use vernier_scale::ScaleStyle;
//! use vernier_units::MeasurementConfig;
//!
//! let kg = MeasurementConfig::builder(40.0, 200.0)
//!     .minor_interval(1.0)
//!     .major_interval(10.0)
//!     .conversion_factor(0.453_592)
//!     .unit_label("kg")
//!     .initial_value(80.0)
//!     .build()
//!     .unwrap();
//! let lb = kg.derive_paired("lb").unwrap();
//! let style = ScaleStyle::builder(10.0).build().unwrap();
//!
//! let mut picker =
//!     MeasurementPicker::with_owned_surface(kg, lb, style, PickerOptions::new()).unwrap();
//!
//! assert!(picker.is_primary_unit());
//! assert_eq!(picker.value(), 80.0);
//!
//! // Toggle to pounds: 80 × 0.453592.
//! let events = picker.toggle_unit();
//! assert!(!picker.is_primary_unit());
//! assert!((picker.value() - 36.287_36).abs() < 1e-9);
//! # let _ = events;
//! ```
//!
//! Until the embedded controller reports
//! [`is_ready`](MeasurementPicker::is_ready), hosts show a neutral
//! placeholder instead of the scale — readiness is asynchronous because the
//! scroll surface attaches only after layout.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod picker;

pub use picker::{MeasurementPicker, MeasurementValue, PickerError, PickerEvent, PickerOptions};
