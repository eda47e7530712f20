// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateless unit converter.

/// Converts a value between units by a scalar factor.
///
/// This is a pure function with no error conditions: callers obtain `factor`
/// from a validated [`MeasurementConfig`](crate::MeasurementConfig), which
/// guarantees it is finite and non-zero. A zero factor would produce zero,
/// so callers inverting a factor via `1.0 / factor` must source it from a
/// validated config rather than raw input.
///
/// # Example
///
/// ```
/// use vernier_units::convert;
///
/// // 80 in the primary unit, factor 0.453592 into the paired unit.
/// let converted = convert(80.0, 0.453_592);
/// assert!((converted - 36.287_36).abs() < 1e-9);
///
/// // The reciprocal factor converts back.
/// let back = convert(converted, 1.0 / 0.453_592);
/// assert!((back - 80.0).abs() < 1e-9);
/// ```
#[must_use]
#[inline]
pub fn convert(value: f64, factor: f64) -> f64 {
    value * factor
}
