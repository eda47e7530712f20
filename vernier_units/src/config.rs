// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated measurement range configuration.
//!
//! This module provides [`MeasurementConfig`] for describing one unit's value
//! range and tick structure, and [`MeasurementConfigBuilder`] for ergonomic
//! construction with up-front validation.

use alloc::string::String;
use core::fmt;

/// Relative tolerance used when checking that the major interval is an
/// integer multiple of the minor interval.
///
/// The ratio is computed in floating point, so exact configurations like
/// `minor = 0.1, major = 1.0` land near — but not exactly on — an integer.
const STRIDE_TOLERANCE: f64 = 1e-6;

/// Error produced when a measurement configuration fails validation.
///
/// Configuration errors are rejected at construction time, before any
/// interaction begins. Each variant carries the offending values.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The value range is empty, inverted, or non-finite.
    InvalidRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The step between adjacent ticks is zero, negative, or non-finite.
    NonPositiveMinorInterval {
        /// Configured minor interval.
        value: f64,
    },
    /// The step between emphasized ticks is zero, negative, or non-finite.
    NonPositiveMajorInterval {
        /// Configured major interval.
        value: f64,
    },
    /// The major interval is not an integer multiple of the minor interval,
    /// so major-tick classification would be ill-defined.
    MajorIntervalNotMultiple {
        /// Configured major interval.
        major: f64,
        /// Configured minor interval.
        minor: f64,
    },
    /// The initial value lies outside the configured range.
    InitialValueOutOfRange {
        /// Configured initial value.
        initial: f64,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The conversion factor is zero or non-finite and cannot be inverted.
    InvalidConversionFactor {
        /// Configured conversion factor.
        factor: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid value range: min {min} must be below max {max}")
            }
            Self::NonPositiveMinorInterval { value } => {
                write!(f, "minor interval must be strictly positive, got {value}")
            }
            Self::NonPositiveMajorInterval { value } => {
                write!(f, "major interval must be strictly positive, got {value}")
            }
            Self::MajorIntervalNotMultiple { major, minor } => {
                write!(
                    f,
                    "major interval {major} is not an integer multiple of minor interval {minor}"
                )
            }
            Self::InitialValueOutOfRange { initial, min, max } => {
                write!(
                    f,
                    "initial value {initial} lies outside the range [{min}, {max}]"
                )
            }
            Self::InvalidConversionFactor { factor } => {
                write!(
                    f,
                    "conversion factor must be finite and non-zero, got {factor}"
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// An immutable value-range configuration for one unit of measurement.
///
/// A `MeasurementConfig` describes everything the scale machinery needs to
/// know about one unit: the closed value range, the spacing of minor and
/// major ticks in value space, the display precision, the conversion factor
/// into the paired unit, a unit label, and the value the picker starts at.
///
/// Instances are immutable once built and are only produced by
/// [`MeasurementConfigBuilder`], which enforces:
///
/// - `min_value < max_value`, both finite,
/// - `minor_interval > 0`, finite,
/// - `major_interval > 0`, finite, and an integer multiple of
///   `minor_interval` (the ratio is stored as [`major_stride`](Self::major_stride),
///   so major-tick classification downstream is an integer test, never a
///   floating-point modulo),
/// - `min_value <= initial_value <= max_value`,
/// - `conversion_factor` finite and non-zero.
///
/// # Example
///
/// ```rust
/// use vernier_units::MeasurementConfig;
///
/// let cm = MeasurementConfig::builder(0.0, 250.0)
///     .minor_interval(0.5)
///     .major_interval(5.0)
///     .decimal_places(1)
///     .unit_label("cm")
///     .initial_value(170.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(cm.major_stride(), 10);
/// assert_eq!(cm.clamp(-3.0), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementConfig {
    min_value: f64,
    max_value: f64,
    minor_interval: f64,
    major_interval: f64,
    decimal_places: usize,
    conversion_factor: f64,
    unit_label: String,
    initial_value: f64,
    /// Ratio `major_interval / minor_interval`, validated to be integral.
    major_stride: usize,
}

impl MeasurementConfig {
    /// Starts building a configuration over the given closed value range.
    ///
    /// See [`MeasurementConfigBuilder`] for the defaults of the remaining
    /// fields.
    #[must_use]
    pub fn builder(min_value: f64, max_value: f64) -> MeasurementConfigBuilder {
        MeasurementConfigBuilder::new(min_value, max_value)
    }

    /// Returns the lower bound of the value range.
    #[must_use]
    #[inline]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Returns the upper bound of the value range.
    #[must_use]
    #[inline]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Returns the step between adjacent ticks, in value space.
    #[must_use]
    #[inline]
    pub fn minor_interval(&self) -> f64 {
        self.minor_interval
    }

    /// Returns the step between emphasized ticks, in value space.
    #[must_use]
    #[inline]
    pub fn major_interval(&self) -> f64 {
        self.major_interval
    }

    /// Returns the number of decimal places used when formatting tick labels.
    #[must_use]
    #[inline]
    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    /// Returns the scalar converting a primary-unit value into the paired unit.
    ///
    /// The factor is defined relative to the primary unit as the base;
    /// converting out of the paired unit multiplies by its reciprocal.
    #[must_use]
    #[inline]
    pub fn conversion_factor(&self) -> f64 {
        self.conversion_factor
    }

    /// Returns the unit label (e.g. `"kg"`).
    #[must_use]
    #[inline]
    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }

    /// Returns the value the picker starts at.
    #[must_use]
    #[inline]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Returns how many minor ticks lie between consecutive major ticks.
    ///
    /// This is the integer ratio `major_interval / minor_interval`,
    /// validated at build time. Downstream major-tick classification tests
    /// `index % major_stride == 0` rather than a floating-point modulo on
    /// value differences.
    #[must_use]
    #[inline]
    pub fn major_stride(&self) -> usize {
        self.major_stride
    }

    /// Returns the width of the value range, `max_value - min_value`.
    #[must_use]
    #[inline]
    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Clamps a value into `[min_value, max_value]`.
    #[must_use]
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min_value, self.max_value)
    }

    /// Derives the paired-unit configuration from this one.
    ///
    /// Bounds, intervals, and the initial value are converted through
    /// [`conversion_factor`](Self::conversion_factor); the tick count is
    /// preserved. The factor itself is carried over unchanged — it stays
    /// expressed relative to the primary unit as the base — and the unit
    /// label is replaced by `unit_label`.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as building by hand; in particular
    /// a negative factor inverts the range and is rejected.
    pub fn derive_paired(&self, unit_label: &str) -> Result<Self, ConfigError> {
        let factor = self.conversion_factor;
        MeasurementConfigBuilder::new(self.min_value * factor, self.max_value * factor)
            .minor_interval(self.minor_interval * factor)
            .major_interval(self.major_interval * factor)
            .decimal_places(self.decimal_places)
            .conversion_factor(factor)
            .unit_label(unit_label)
            .initial_value(self.initial_value * factor)
            .build()
    }
}

/// Builder for [`MeasurementConfig`].
///
/// Defaults: `minor_interval = 1.0`, `major_interval = 10.0`,
/// `decimal_places = 0`, `conversion_factor = 1.0`, empty unit label, and
/// `initial_value = min_value`.
#[derive(Clone, Debug)]
pub struct MeasurementConfigBuilder {
    min_value: f64,
    max_value: f64,
    minor_interval: f64,
    major_interval: f64,
    decimal_places: usize,
    conversion_factor: f64,
    unit_label: String,
    initial_value: Option<f64>,
}

impl MeasurementConfigBuilder {
    /// Creates a new builder over the given closed value range.
    #[must_use]
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            minor_interval: 1.0,
            major_interval: 10.0,
            decimal_places: 0,
            conversion_factor: 1.0,
            unit_label: String::new(),
            initial_value: None,
        }
    }

    /// Sets the step between adjacent ticks, in value space.
    #[must_use]
    pub fn minor_interval(mut self, interval: f64) -> Self {
        self.minor_interval = interval;
        self
    }

    /// Sets the step between emphasized ticks, in value space.
    #[must_use]
    pub fn major_interval(mut self, interval: f64) -> Self {
        self.major_interval = interval;
        self
    }

    /// Sets the number of decimal places used when formatting tick labels.
    #[must_use]
    pub fn decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// Sets the scalar converting a primary-unit value into the paired unit.
    #[must_use]
    pub fn conversion_factor(mut self, factor: f64) -> Self {
        self.conversion_factor = factor;
        self
    }

    /// Sets the unit label.
    #[must_use]
    pub fn unit_label(mut self, label: &str) -> Self {
        self.unit_label = String::from(label);
        self
    }

    /// Sets the value the picker starts at. Defaults to the lower bound.
    #[must_use]
    pub fn initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    /// Validates the configuration and builds the [`MeasurementConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated rule.
    pub fn build(self) -> Result<MeasurementConfig, ConfigError> {
        let Self {
            min_value,
            max_value,
            minor_interval,
            major_interval,
            decimal_places,
            conversion_factor,
            unit_label,
            initial_value,
        } = self;

        if !min_value.is_finite() || !max_value.is_finite() || min_value >= max_value {
            return Err(ConfigError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }
        if !minor_interval.is_finite() || minor_interval <= 0.0 {
            return Err(ConfigError::NonPositiveMinorInterval {
                value: minor_interval,
            });
        }
        if !major_interval.is_finite() || major_interval <= 0.0 {
            return Err(ConfigError::NonPositiveMajorInterval {
                value: major_interval,
            });
        }

        let ratio = major_interval / minor_interval;
        let stride = round_half_up(ratio);
        if stride < 1.0 || (ratio - stride).abs() > STRIDE_TOLERANCE * stride {
            return Err(ConfigError::MajorIntervalNotMultiple {
                major: major_interval,
                minor: minor_interval,
            });
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "stride is a validated small positive integer"
        )]
        let major_stride = stride as usize;

        let initial_value = initial_value.unwrap_or(min_value);
        if !(min_value..=max_value).contains(&initial_value) {
            return Err(ConfigError::InitialValueOutOfRange {
                initial: initial_value,
                min: min_value,
                max: max_value,
            });
        }

        if !conversion_factor.is_finite() || conversion_factor == 0.0 {
            return Err(ConfigError::InvalidConversionFactor {
                factor: conversion_factor,
            });
        }

        Ok(MeasurementConfig {
            min_value,
            max_value,
            minor_interval,
            major_interval,
            decimal_places,
            conversion_factor,
            unit_label,
            initial_value,
            major_stride,
        })
    }
}

/// Rounds to the nearest integer without requiring `std`.
///
/// `f64::round` is not available in `core`; this is the usual
/// truncate-after-biasing formulation, adequate for small positive ratios.
fn round_half_up(x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "stride ratios are small positive numbers"
    )]
    {
        ((x + 0.5) as u64) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_builder() -> MeasurementConfigBuilder {
        MeasurementConfig::builder(40.0, 200.0)
            .minor_interval(1.0)
            .major_interval(10.0)
            .decimal_places(1)
            .conversion_factor(0.453_592)
            .unit_label("kg")
            .initial_value(80.0)
    }

    #[test]
    fn builds_a_valid_config() {
        let config = weight_builder().build().unwrap();
        assert_eq!(config.min_value(), 40.0);
        assert_eq!(config.max_value(), 200.0);
        assert_eq!(config.major_stride(), 10);
        assert_eq!(config.unit_label(), "kg");
        assert_eq!(config.initial_value(), 80.0);
        assert_eq!(config.span(), 160.0);
    }

    #[test]
    fn initial_value_defaults_to_min() {
        let config = MeasurementConfig::builder(5.0, 10.0).build().unwrap();
        assert_eq!(config.initial_value(), 5.0);
    }

    #[test]
    fn rejects_inverted_and_non_finite_ranges() {
        let err = MeasurementConfig::builder(10.0, 10.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidRange {
            min: 10.0,
            max: 10.0
        });

        assert!(matches!(
            MeasurementConfig::builder(f64::NAN, 10.0).build(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_intervals() {
        assert!(matches!(
            weight_builder().minor_interval(0.0).build(),
            Err(ConfigError::NonPositiveMinorInterval { value: 0.0 })
        ));
        assert!(matches!(
            weight_builder().major_interval(-1.0).build(),
            Err(ConfigError::NonPositiveMajorInterval { value: -1.0 })
        ));
    }

    #[test]
    fn rejects_non_integral_stride() {
        let err = weight_builder()
            .minor_interval(1.0)
            .major_interval(2.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MajorIntervalNotMultiple { .. }));
    }

    #[test]
    fn fractional_intervals_produce_exact_strides() {
        // 0.1 into 1.0 is not exactly 10.0 in floating point; the tolerance
        // must absorb that without admitting genuinely broken ratios.
        let config = MeasurementConfig::builder(0.0, 10.0)
            .minor_interval(0.1)
            .major_interval(1.0)
            .build()
            .unwrap();
        assert_eq!(config.major_stride(), 10);
    }

    #[test]
    fn rejects_out_of_range_initial_value() {
        let err = weight_builder().initial_value(39.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InitialValueOutOfRange {
            initial: 39.0,
            min: 40.0,
            max: 200.0
        });
    }

    #[test]
    fn rejects_degenerate_conversion_factors() {
        assert!(matches!(
            weight_builder().conversion_factor(0.0).build(),
            Err(ConfigError::InvalidConversionFactor { factor: 0.0 })
        ));
        assert!(matches!(
            weight_builder().conversion_factor(f64::INFINITY).build(),
            Err(ConfigError::InvalidConversionFactor { .. })
        ));
    }

    #[test]
    fn clamp_stays_inside_the_range() {
        let config = weight_builder().build().unwrap();
        assert_eq!(config.clamp(39.0), 40.0);
        assert_eq!(config.clamp(120.0), 120.0);
        assert_eq!(config.clamp(1e9), 200.0);
    }

    #[test]
    fn derive_paired_converts_range_and_keeps_factor() {
        let kg = weight_builder().build().unwrap();
        let lb = kg.derive_paired("lb").unwrap();

        assert!((lb.min_value() - 40.0 * 0.453_592).abs() < 1e-9);
        assert!((lb.max_value() - 200.0 * 0.453_592).abs() < 1e-9);
        assert!((lb.initial_value() - 80.0 * 0.453_592).abs() < 1e-9);
        assert_eq!(lb.conversion_factor(), kg.conversion_factor());
        assert_eq!(lb.unit_label(), "lb");
        // Intervals scale with the range, so the tick structure is preserved.
        assert_eq!(lb.major_stride(), kg.major_stride());
    }

    #[test]
    fn config_error_display_names_the_values() {
        let err = ConfigError::InitialValueOutOfRange {
            initial: 5.0,
            min: 10.0,
            max: 20.0,
        };
        let text = alloc::format!("{err}");
        assert!(text.contains("5"));
        assert!(text.contains("10"));
        assert!(text.contains("20"));
    }
}
