// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete tick layout derived from a measurement range.

use alloc::format;
use alloc::string::String;

use vernier_units::MeasurementConfig;

use crate::style::ScaleStyle;

/// Tolerance absorbing floating-point noise in the tick-count ratio.
///
/// Without it, a span that divides its minor interval exactly can land an
/// ulp above the integer and grow a phantom tick past the range.
const COUNT_TOLERANCE: f64 = 1e-9;

/// The discrete tick layout of a scale: count, values, classification, labels.
///
/// Derivation rules:
///
/// - `item_count = ceil((max - min) / minor_interval) + 1`,
/// - the tick at `index` sits at value `min + index * minor_interval`,
/// - a tick is major iff its index is a multiple of the validated integer
///   stride `major_interval / minor_interval` (never a floating-point modulo
///   on value differences),
/// - labels come from the style's custom formatter when present, otherwise
///   major ticks (and minor ticks when enabled) format their value to the
///   configured decimal places.
///
/// # Example
///
/// ```rust
/// use vernier_scale::TickModel;
/// use vernier_units::MeasurementConfig;
///
/// let config = MeasurementConfig::builder(0.0, 200.0)
///     .minor_interval(1.0)
///     .major_interval(10.0)
///     .build()
///     .unwrap();
/// let ticks = TickModel::from_config(&config);
///
/// assert_eq!(ticks.item_count(), 201);
/// assert_eq!(ticks.value_at(150), 150.0);
/// assert!(ticks.is_major(150));
/// assert!(!ticks.is_major(155));
/// ```
#[derive(Clone, Debug)]
pub struct TickModel {
    min_value: f64,
    minor_interval: f64,
    major_stride: usize,
    decimal_places: usize,
    item_count: usize,
}

impl TickModel {
    /// Derives the tick layout from a validated measurement range.
    #[must_use]
    pub fn from_config(config: &MeasurementConfig) -> Self {
        let ratio = config.span() / config.minor_interval();
        Self {
            min_value: config.min_value(),
            minor_interval: config.minor_interval(),
            major_stride: config.major_stride(),
            decimal_places: config.decimal_places(),
            item_count: ceil_with_tolerance(ratio) + 1,
        }
    }

    /// Returns the number of ticks on the scale.
    #[must_use]
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the value the tick at `index` represents.
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        #[expect(clippy::cast_precision_loss, reason = "tick counts are small")]
        {
            self.min_value + index as f64 * self.minor_interval
        }
    }

    /// Returns `true` if the tick at `index` is aligned to the major interval.
    #[must_use]
    #[inline]
    pub fn is_major(&self, index: usize) -> bool {
        index % self.major_stride == 0
    }

    /// Returns the label for the tick at `index`, or `None` for an unlabeled
    /// tick.
    ///
    /// A custom formatter on the style takes precedence; a formatter
    /// returning an empty string means the tick carries no label. Without a
    /// formatter, major ticks — and minor ticks when the style enables them —
    /// format their value to the configured decimal places.
    #[must_use]
    pub fn label_at(&self, index: usize, style: &ScaleStyle) -> Option<String> {
        let is_major = self.is_major(index);
        if let Some(formatter) = style.label_formatter() {
            let label = formatter(index, is_major);
            return (!label.is_empty()).then_some(label);
        }
        if is_major || style.show_minor_labels() {
            let value = self.value_at(index);
            Some(format!("{value:.prec$}", prec = self.decimal_places))
        } else {
            None
        }
    }
}

/// Ceiling with a small tolerance below each integer.
fn ceil_with_tolerance(x: f64) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "tick-count ratios are small non-negative numbers"
    )]
    let whole = x as usize;
    #[expect(clippy::cast_precision_loss, reason = "tick counts are small")]
    let frac = x - whole as f64;
    if frac > COUNT_TOLERANCE {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::TickModel;
    use crate::style::ScaleStyle;
    use alloc::format;
    use alloc::string::String;
    use vernier_units::MeasurementConfig;

    fn reference_model() -> TickModel {
        let config = MeasurementConfig::builder(0.0, 200.0)
            .minor_interval(1.0)
            .major_interval(10.0)
            .build()
            .unwrap();
        TickModel::from_config(&config)
    }

    #[test]
    fn item_count_covers_the_range_inclusively() {
        let ticks = reference_model();
        assert_eq!(ticks.item_count(), 201);
        assert_eq!(ticks.value_at(0), 0.0);
        assert_eq!(ticks.value_at(200), 200.0);
    }

    #[test]
    fn item_count_rounds_partial_trailing_intervals_up() {
        let config = MeasurementConfig::builder(0.0, 3.5)
            .minor_interval(1.0)
            .major_interval(1.0)
            .build()
            .unwrap();
        let ticks = TickModel::from_config(&config);
        assert_eq!(ticks.item_count(), 5);
    }

    #[test]
    fn fractional_minor_interval_does_not_grow_phantom_ticks() {
        // 10 / 0.1 lands a hair above 100 in floating point.
        let config = MeasurementConfig::builder(0.0, 10.0)
            .minor_interval(0.1)
            .major_interval(1.0)
            .build()
            .unwrap();
        let ticks = TickModel::from_config(&config);
        assert_eq!(ticks.item_count(), 101);
    }

    #[test]
    fn major_classification_uses_the_index_stride() {
        let ticks = reference_model();
        assert!(ticks.is_major(0));
        assert!(ticks.is_major(150));
        assert!(!ticks.is_major(155));
        assert!(ticks.is_major(160));
    }

    #[test]
    fn major_classification_survives_fractional_intervals() {
        let config = MeasurementConfig::builder(0.0, 10.0)
            .minor_interval(0.1)
            .major_interval(1.0)
            .build()
            .unwrap();
        let ticks = TickModel::from_config(&config);
        // Value 3.0 sits at index 30; a value-space modulo would misfire on
        // 0.1-step accumulation noise, the index test cannot.
        assert!(ticks.is_major(30));
        assert!(!ticks.is_major(31));
    }

    #[test]
    fn default_labels_format_major_ticks_only() {
        let config = MeasurementConfig::builder(0.0, 200.0)
            .minor_interval(1.0)
            .major_interval(10.0)
            .decimal_places(1)
            .build()
            .unwrap();
        let ticks = TickModel::from_config(&config);
        let style = ScaleStyle::builder(10.0).build().unwrap();

        assert_eq!(ticks.label_at(150, &style).as_deref(), Some("150.0"));
        assert_eq!(ticks.label_at(155, &style), None);
    }

    #[test]
    fn minor_labels_appear_when_enabled() {
        let ticks = reference_model();
        let style = ScaleStyle::builder(10.0)
            .show_minor_labels(true)
            .build()
            .unwrap();
        assert_eq!(ticks.label_at(155, &style).as_deref(), Some("155"));
    }

    #[test]
    fn custom_formatter_wins_and_empty_means_unlabeled() {
        let ticks = reference_model();
        let style = ScaleStyle::builder(10.0)
            .label_formatter(|index, is_major| {
                if is_major {
                    format!("#{index}")
                } else {
                    String::new()
                }
            })
            .build()
            .unwrap();
        assert_eq!(ticks.label_at(150, &style).as_deref(), Some("#150"));
        assert_eq!(ticks.label_at(155, &style), None);
    }
}
