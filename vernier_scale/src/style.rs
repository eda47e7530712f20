// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation and behavior configuration for a scale widget.
//!
//! [`ScaleStyle`] carries everything about a scale that is not the value
//! range itself: tick spacing, orientation, how programmatic positioning
//! animates, label options, and the tick geometry/colors the host rendering
//! layer consumes verbatim.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use peniko::Color;
use vernier_timing::Easing;

use crate::mapper::ScaleError;

/// Custom per-tick label formatter, `(index, is_major) -> label`.
///
/// An empty returned string means the tick carries no label.
pub type TickLabelFn = Arc<dyn Fn(usize, bool) -> String + Send + Sync>;

/// Scroll axis of a scale widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Ticks run along the X axis; scrolling moves horizontally.
    #[default]
    Horizontal,
    /// Ticks run along the Y axis; scrolling moves vertically.
    Vertical,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Vertical`].
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// Selects the component of a 2D position that lies along the scroll axis.
    ///
    /// Hosts that track scroll positions as points can feed them through this
    /// to obtain the 1D offset the scale machinery works in.
    #[must_use]
    pub fn axis_offset(self, position: Point) -> f64 {
        match self {
            Self::Horizontal => position.x,
            Self::Vertical => position.y,
        }
    }
}

/// How a programmatic move of the scroll surface is performed.
///
/// A zero duration means the surface jumps; anything else animates with the
/// configured easing curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveStyle {
    duration: Duration,
    easing: Easing,
}

impl MoveStyle {
    /// An instantaneous move.
    #[must_use]
    pub fn jump() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// An animated move with the given duration and easing.
    #[must_use]
    pub fn animated(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Returns the move duration. Zero means jump.
    #[must_use]
    #[inline]
    pub fn duration(self) -> Duration {
        self.duration
    }

    /// Returns the easing curve applied over the move.
    #[must_use]
    #[inline]
    pub fn easing(self) -> Easing {
        self.easing
    }

    /// Returns `true` if the move is instantaneous.
    #[must_use]
    #[inline]
    pub fn is_jump(self) -> bool {
        self.duration.is_zero()
    }
}

impl Default for MoveStyle {
    fn default() -> Self {
        Self::jump()
    }
}

/// Presentation/behavior configuration of a scale widget.
///
/// Behaviorally relevant fields are the tick spacing, orientation, the
/// programmatic-positioning [`MoveStyle`], and the label options. The tick
/// geometry and colors are pass-through data for the host rendering layer;
/// the interaction machinery never reads them.
///
/// # Example
///
/// ```rust
/// use vernier_scale::{Orientation, ScaleStyle};
///
/// let style = ScaleStyle::builder(10.0)
///     .orientation(Orientation::Vertical)
///     .show_minor_labels(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(style.item_spacing(), 10.0);
/// assert!(style.orientation().is_vertical());
/// ```
#[derive(Clone)]
pub struct ScaleStyle {
    item_spacing: f64,
    orientation: Orientation,
    position_animation: MoveStyle,
    show_minor_labels: bool,
    label_formatter: Option<TickLabelFn>,
    major_tick_length: f64,
    minor_tick_length: f64,
    line_width: f64,
    tick_color: Color,
    major_tick_color: Color,
}

impl ScaleStyle {
    /// Starts building a style with the given tick spacing in host pixels.
    #[must_use]
    pub fn builder(item_spacing: f64) -> ScaleStyleBuilder {
        ScaleStyleBuilder::new(item_spacing)
    }

    /// Returns the tick spacing in host pixels.
    #[must_use]
    #[inline]
    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    /// Returns the scroll axis.
    #[must_use]
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns how programmatic positioning moves the surface.
    #[must_use]
    #[inline]
    pub fn position_animation(&self) -> MoveStyle {
        self.position_animation
    }

    /// Returns whether minor ticks carry labels.
    #[must_use]
    #[inline]
    pub fn show_minor_labels(&self) -> bool {
        self.show_minor_labels
    }

    /// Returns the custom label formatter, if one is set.
    #[must_use]
    pub fn label_formatter(&self) -> Option<&TickLabelFn> {
        self.label_formatter.as_ref()
    }

    /// Returns the major tick length, for the rendering layer.
    #[must_use]
    #[inline]
    pub fn major_tick_length(&self) -> f64 {
        self.major_tick_length
    }

    /// Returns the minor tick length, for the rendering layer.
    #[must_use]
    #[inline]
    pub fn minor_tick_length(&self) -> f64 {
        self.minor_tick_length
    }

    /// Returns the tick line width, for the rendering layer.
    #[must_use]
    #[inline]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Returns the minor tick color, for the rendering layer.
    #[must_use]
    #[inline]
    pub fn tick_color(&self) -> Color {
        self.tick_color
    }

    /// Returns the major tick color, for the rendering layer.
    #[must_use]
    #[inline]
    pub fn major_tick_color(&self) -> Color {
        self.major_tick_color
    }
}

// Manual Debug impl since the formatter isn't Debug.
impl fmt::Debug for ScaleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleStyle")
            .field("item_spacing", &self.item_spacing)
            .field("orientation", &self.orientation)
            .field("position_animation", &self.position_animation)
            .field("show_minor_labels", &self.show_minor_labels)
            .field("has_label_formatter", &self.label_formatter.is_some())
            .field("major_tick_length", &self.major_tick_length)
            .field("minor_tick_length", &self.minor_tick_length)
            .field("line_width", &self.line_width)
            .field("tick_color", &self.tick_color)
            .field("major_tick_color", &self.major_tick_color)
            .finish()
    }
}

/// Builder for [`ScaleStyle`].
///
/// Defaults: horizontal orientation, instantaneous programmatic positioning,
/// minor labels hidden, no custom formatter, tick lengths 24/12 pixels, line
/// width 1.5, mid-gray tick colors.
#[derive(Clone)]
pub struct ScaleStyleBuilder {
    item_spacing: f64,
    orientation: Orientation,
    position_animation: MoveStyle,
    show_minor_labels: bool,
    label_formatter: Option<TickLabelFn>,
    major_tick_length: f64,
    minor_tick_length: f64,
    line_width: f64,
    tick_color: Color,
    major_tick_color: Color,
}

impl ScaleStyleBuilder {
    /// Creates a new builder with the given tick spacing in host pixels.
    #[must_use]
    pub fn new(item_spacing: f64) -> Self {
        Self {
            item_spacing,
            orientation: Orientation::default(),
            position_animation: MoveStyle::jump(),
            show_minor_labels: false,
            label_formatter: None,
            major_tick_length: 24.0,
            minor_tick_length: 12.0,
            line_width: 1.5,
            tick_color: Color::from_rgba8(0x9e, 0x9e, 0x9e, 0xff),
            major_tick_color: Color::from_rgba8(0x61, 0x61, 0x61, 0xff),
        }
    }

    /// Sets the scroll axis.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets how programmatic positioning moves the surface.
    #[must_use]
    pub fn position_animation(mut self, style: MoveStyle) -> Self {
        self.position_animation = style;
        self
    }

    /// Sets whether minor ticks carry labels.
    #[must_use]
    pub fn show_minor_labels(mut self, show: bool) -> Self {
        self.show_minor_labels = show;
        self
    }

    /// Sets a custom per-tick label formatter.
    #[must_use]
    pub fn label_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(usize, bool) -> String + Send + Sync + 'static,
    {
        self.label_formatter = Some(Arc::new(formatter));
        self
    }

    /// Sets the major tick length passed through to the rendering layer.
    #[must_use]
    pub fn major_tick_length(mut self, length: f64) -> Self {
        self.major_tick_length = length;
        self
    }

    /// Sets the minor tick length passed through to the rendering layer.
    #[must_use]
    pub fn minor_tick_length(mut self, length: f64) -> Self {
        self.minor_tick_length = length;
        self
    }

    /// Sets the tick line width passed through to the rendering layer.
    #[must_use]
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the minor tick color passed through to the rendering layer.
    #[must_use]
    pub fn tick_color(mut self, color: Color) -> Self {
        self.tick_color = color;
        self
    }

    /// Sets the major tick color passed through to the rendering layer.
    #[must_use]
    pub fn major_tick_color(mut self, color: Color) -> Self {
        self.major_tick_color = color;
        self
    }

    /// Validates the configuration and builds the [`ScaleStyle`].
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::NonPositiveSpacing`] if the spacing is not
    /// strictly positive and finite.
    pub fn build(self) -> Result<ScaleStyle, ScaleError> {
        if !self.item_spacing.is_finite() || self.item_spacing <= 0.0 {
            return Err(ScaleError::NonPositiveSpacing {
                value: self.item_spacing,
            });
        }
        Ok(ScaleStyle {
            item_spacing: self.item_spacing,
            orientation: self.orientation,
            position_animation: self.position_animation,
            show_minor_labels: self.show_minor_labels,
            label_formatter: self.label_formatter,
            major_tick_length: self.major_tick_length,
            minor_tick_length: self.minor_tick_length,
            line_width: self.line_width,
            tick_color: self.tick_color,
            major_tick_color: self.major_tick_color,
        })
    }
}

// Manual Debug impl since the formatter isn't Debug.
impl fmt::Debug for ScaleStyleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleStyleBuilder")
            .field("item_spacing", &self.item_spacing)
            .field("orientation", &self.orientation)
            .field("has_label_formatter", &self.label_formatter.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use core::time::Duration;

    #[test]
    fn builder_defaults() {
        let style = ScaleStyle::builder(10.0).build().unwrap();
        assert_eq!(style.orientation(), Orientation::Horizontal);
        assert!(style.position_animation().is_jump());
        assert!(!style.show_minor_labels());
        assert!(style.label_formatter().is_none());
    }

    #[test]
    fn rejects_degenerate_spacing() {
        assert!(ScaleStyle::builder(0.0).build().is_err());
        assert!(ScaleStyle::builder(-1.0).build().is_err());
        assert!(ScaleStyle::builder(f64::INFINITY).build().is_err());
    }

    #[test]
    fn orientation_selects_the_axis_component() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Orientation::Horizontal.axis_offset(p), 3.0);
        assert_eq!(Orientation::Vertical.axis_offset(p), 7.0);
    }

    #[test]
    fn move_style_jump_detection() {
        assert!(MoveStyle::jump().is_jump());
        let animated = MoveStyle::animated(Duration::from_millis(120), Easing::EaseOut);
        assert!(!animated.is_jump());
        assert_eq!(animated.duration(), Duration::from_millis(120));
        assert_eq!(animated.easing(), Easing::EaseOut);
    }

    #[test]
    fn debug_reports_formatter_presence_not_contents() {
        let style = ScaleStyle::builder(10.0)
            .label_formatter(|index, _| format!("{index}"))
            .build()
            .unwrap();
        let text = format!("{style:?}");
        assert!(text.contains("has_label_formatter: true"));
    }
}
