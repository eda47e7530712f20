// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional affine transform between scroll offsets and domain values.

use core::fmt;

use vernier_units::MeasurementConfig;

/// Error produced when scale presentation parameters fail validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleError {
    /// The tick spacing is zero, negative, or non-finite; the transform
    /// would divide by it.
    NonPositiveSpacing {
        /// Configured spacing, in host pixels.
        value: f64,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSpacing { value } => {
                write!(f, "item spacing must be strictly positive, got {value}")
            }
        }
    }
}

impl core::error::Error for ScaleError {}

/// Affine transform between a scroll offset and a domain value.
///
/// The two directions are exact inverses modulo floating-point rounding:
///
/// - `offset_to_value(offset) = offset / item_spacing * minor_interval + min_value`
/// - `value_to_offset(value) = (value - min_value) * item_spacing / minor_interval`
///
/// Offset `0` always corresponds to `min_value`; one tick of travel
/// (`item_spacing` pixels) corresponds to one `minor_interval` of value.
///
/// # Example
///
/// ```rust
/// use vernier_scale::ScaleMapper;
/// use vernier_units::MeasurementConfig;
///
/// let config = MeasurementConfig::builder(40.0, 200.0).build().unwrap();
/// let mapper = ScaleMapper::new(&config, 10.0).unwrap();
///
/// let offset = mapper.value_to_offset(80.0);
/// assert_eq!(offset, 400.0);
/// assert_eq!(mapper.offset_to_value(offset), 80.0);
/// ```
#[derive(Clone, Debug)]
pub struct ScaleMapper {
    min_value: f64,
    max_value: f64,
    minor_interval: f64,
    item_spacing: f64,
}

impl ScaleMapper {
    /// Creates a mapper for the given measurement range and tick spacing.
    ///
    /// The range and interval invariants are already guaranteed by
    /// [`MeasurementConfig`]; only the spacing needs checking here.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::NonPositiveSpacing`] if `item_spacing` is not
    /// strictly positive and finite.
    pub fn new(config: &MeasurementConfig, item_spacing: f64) -> Result<Self, ScaleError> {
        if !item_spacing.is_finite() || item_spacing <= 0.0 {
            return Err(ScaleError::NonPositiveSpacing {
                value: item_spacing,
            });
        }
        Ok(Self {
            min_value: config.min_value(),
            max_value: config.max_value(),
            minor_interval: config.minor_interval(),
            item_spacing,
        })
    }

    /// Returns a mapper over a different measurement range with the same
    /// (already validated) spacing.
    ///
    /// This is the infallible path for swapping configurations at runtime,
    /// e.g. when a picker toggles units.
    #[must_use]
    pub fn with_config(&self, config: &MeasurementConfig) -> Self {
        Self {
            min_value: config.min_value(),
            max_value: config.max_value(),
            minor_interval: config.minor_interval(),
            item_spacing: self.item_spacing,
        }
    }

    /// Returns the tick spacing in host pixels.
    #[must_use]
    #[inline]
    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    /// Returns the value-space step represented by one tick of travel.
    #[must_use]
    #[inline]
    pub fn minor_interval(&self) -> f64 {
        self.minor_interval
    }

    /// Converts a scroll offset into the (unclamped) domain value it implies.
    #[must_use]
    #[inline]
    pub fn offset_to_value(&self, offset: f64) -> f64 {
        offset / self.item_spacing * self.minor_interval + self.min_value
    }

    /// Converts a domain value into the scroll offset that displays it.
    #[must_use]
    #[inline]
    pub fn value_to_offset(&self, value: f64) -> f64 {
        (value - self.min_value) * self.item_spacing / self.minor_interval
    }

    /// Clamps a domain value into the configured range.
    #[must_use]
    #[inline]
    pub fn clamp_value(&self, value: f64) -> f64 {
        value.clamp(self.min_value, self.max_value)
    }

    /// Returns the largest in-range offset, `value_to_offset(max_value)`.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.value_to_offset(self.max_value)
    }

    /// Returns the settle target for an offset: the nearest multiple of the
    /// tick spacing, clamped into `[0, max_offset]`.
    ///
    /// Rounding alone keeps in-range offsets in range; the clamp covers host
    /// overscroll, so a settle can never carry the surface outside the
    /// domain the published value is clamped to.
    #[must_use]
    pub fn snap_offset(&self, offset: f64) -> f64 {
        let snapped = round_to_nearest(offset / self.item_spacing) * self.item_spacing;
        snapped.clamp(0.0, self.max_offset())
    }
}

/// Rounds to the nearest integer, halves away from zero.
///
/// `f64::round` is not available in `core`.
fn round_to_nearest(x: f64) -> f64 {
    let biased = if x >= 0.0 { x + 0.5 } else { x - 0.5 };
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "offsets divided by spacing are far below 2^53"
    )]
    {
        (biased as i64) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{ScaleError, ScaleMapper};
    use vernier_units::MeasurementConfig;

    fn mapper(min: f64, max: f64, minor: f64, spacing: f64) -> ScaleMapper {
        let config = MeasurementConfig::builder(min, max)
            .minor_interval(minor)
            .major_interval(minor * 10.0)
            .build()
            .unwrap();
        ScaleMapper::new(&config, spacing).unwrap()
    }

    #[test]
    fn rejects_degenerate_spacing() {
        let config = MeasurementConfig::builder(0.0, 10.0).build().unwrap();
        assert_eq!(
            ScaleMapper::new(&config, 0.0).unwrap_err(),
            ScaleError::NonPositiveSpacing { value: 0.0 }
        );
        assert!(ScaleMapper::new(&config, f64::NAN).is_err());
        assert!(ScaleMapper::new(&config, -5.0).is_err());
    }

    #[test]
    fn offset_and_value_are_exact_inverses_across_the_range() {
        let mapper = mapper(40.0, 200.0, 0.5, 8.0);
        let mut value = 40.0;
        while value <= 200.0 {
            let back = mapper.offset_to_value(mapper.value_to_offset(value));
            assert!(
                (back - value).abs() < 1e-9,
                "round trip drifted at {value}: {back}"
            );
            value += 0.37;
        }
    }

    #[test]
    fn reference_scenario_maps_offset_155_to_value_155() {
        // min 0, max 200, minor 1, spacing 10: offset 155 implies 15.5 ticks.
        let m = mapper(0.0, 200.0, 1.0, 10.0);
        assert_eq!(m.offset_to_value(155.0), 15.5);

        // The classic picker configuration maps pixels 1:1 onto values when
        // spacing equals 10 and minor equals 10.
        let m = mapper(0.0, 2000.0, 10.0, 10.0);
        assert_eq!(m.offset_to_value(155.0), 155.0);
    }

    #[test]
    fn zero_offset_is_min_value() {
        let mapper = mapper(40.0, 200.0, 1.0, 10.0);
        assert_eq!(mapper.offset_to_value(0.0), 40.0);
        assert_eq!(mapper.value_to_offset(40.0), 0.0);
    }

    #[test]
    fn clamp_value_bounds_both_ends() {
        let mapper = mapper(40.0, 200.0, 1.0, 10.0);
        assert_eq!(mapper.clamp_value(0.0), 40.0);
        assert_eq!(mapper.clamp_value(1e9), 200.0);
        assert_eq!(mapper.clamp_value(77.7), 77.7);
    }

    #[test]
    fn snap_offset_rounds_to_spacing_multiples() {
        let mapper = mapper(0.0, 200.0, 1.0, 10.0);
        assert_eq!(mapper.snap_offset(154.9), 150.0);
        assert_eq!(mapper.snap_offset(155.0), 160.0);
        assert_eq!(mapper.snap_offset(150.0), 150.0);
    }

    #[test]
    fn with_config_keeps_spacing_and_swaps_the_range() {
        let original = mapper(40.0, 200.0, 1.0, 10.0);
        let pounds = MeasurementConfig::builder(88.0, 440.0)
            .minor_interval(2.0)
            .major_interval(20.0)
            .build()
            .unwrap();
        let swapped = original.with_config(&pounds);

        assert_eq!(swapped.item_spacing(), 10.0);
        assert_eq!(swapped.offset_to_value(0.0), 88.0);
        assert_eq!(swapped.value_to_offset(90.0), 10.0);
    }

    #[test]
    fn snap_offset_clamps_overscroll() {
        let mapper = mapper(0.0, 20.0, 1.0, 10.0);
        // max_offset is 200.
        assert_eq!(mapper.snap_offset(-14.0), 0.0);
        assert_eq!(mapper.snap_offset(231.0), 200.0);
    }
}
