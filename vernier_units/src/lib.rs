// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vernier_units --heading-base-level=0

//! Vernier Units: measurement range configuration and unit conversion.
//!
//! This crate is the leaf of the Vernier workspace. It defines the validated
//! value-range configuration shared by every scale picker, and the pure
//! conversion primitive used when a picker toggles between two units of
//! measurement.
//!
//! The core concepts are:
//!
//! - [`MeasurementConfig`]: an immutable value-range configuration (bounds,
//!   tick intervals, display precision, conversion factor, unit label, and
//!   initial value), built through [`MeasurementConfigBuilder`] which rejects
//!   inconsistent configurations up front.
//! - [`ConfigError`]: the fail-fast construction error. Configuration errors
//!   are the only errors this workspace ever surfaces to callers; everything
//!   downstream of a validated config is interaction state, not failure.
//! - [`convert`]: the stateless unit converter, `value * factor`.
//!
//! ## Minimal example
//!
//! A kilogram range paired with a pound range:
//!
//! ```rust
//! use vernier_units::{MeasurementConfig, convert};
//!
//! let kg = MeasurementConfig::builder(40.0, 200.0)
//!     .minor_interval(1.0)
//!     .major_interval(10.0)
//!     .decimal_places(1)
//!     .conversion_factor(2.204_62)
//!     .unit_label("kg")
//!     .initial_value(80.0)
//!     .build()
//!     .unwrap();
//!
//! // Derive the paired pound range: bounds and initial value are converted,
//! // the factor itself stays expressed relative to the primary unit.
//! let lb = kg.derive_paired("lb").unwrap();
//!
//! assert_eq!(kg.clamp(250.0), 200.0);
//! let pounds = convert(kg.initial_value(), kg.conversion_factor());
//! assert!((pounds - 176.37).abs() < 0.01);
//! assert!((lb.min_value() - 88.18).abs() < 0.01);
//! ```
//!
//! Conversion factors are always expressed relative to the *primary* unit as
//! the base: a config's factor is the scalar taking a primary-unit value into
//! the paired unit. Going the other way multiplies by the reciprocal. The
//! higher-level picker crate preserves that asymmetry exactly.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod conversion;

pub use config::{ConfigError, MeasurementConfig, MeasurementConfigBuilder};
pub use conversion::convert;
