// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dual-unit measurement picker coordinator.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use vernier_controller::{OwnedSurface, ScaleController, ScaleEvent, ScrollSurface};
use vernier_observe::{SubscriptionId, Subscribers};
use vernier_scale::{ScaleError, ScaleStyle};
use vernier_units::{ConfigError, MeasurementConfig, convert};

/// Error produced when picker construction fails validation.
#[derive(Clone, Debug, PartialEq)]
pub enum PickerError {
    /// The presentation configuration is degenerate.
    Scale(ScaleError),
    /// A measurement configuration rule is violated (e.g. the starting
    /// value override lies outside the active range).
    Config(ConfigError),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for PickerError {}

impl From<ScaleError> for PickerError {
    fn from(err: ScaleError) -> Self {
        Self::Scale(err)
    }
}

impl From<ConfigError> for PickerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// A measured value in its unit. The picker's unified output DTO.
///
/// Constructed fresh for every notification and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementValue {
    /// The value, expressed in `unit`.
    pub value: f64,
    /// Label of the unit the value is expressed in.
    pub unit: String,
    /// `true` when `unit` is the primary unit.
    pub is_primary_unit: bool,
}

/// Events produced by a [`MeasurementPicker`] in response to host input.
#[derive(Clone, Debug, PartialEq)]
pub enum PickerEvent {
    /// The value settled on a new number or the active unit changed.
    Changed(MeasurementValue),
    /// The embedded scale became ready to render.
    Ready,
}

/// Construction options for a [`MeasurementPicker`].
///
/// Defaults: the primary unit starts active, the starting value comes from
/// the active config, and no toggle-affordance labels are set.
#[derive(Clone, Debug, Default)]
pub struct PickerOptions {
    start_in_secondary: bool,
    initial_value: Option<f64>,
    toggle_labels: Option<(String, String)>,
}

impl PickerOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the secondary unit active.
    #[must_use]
    pub fn start_in_secondary(mut self) -> Self {
        self.start_in_secondary = true;
        self
    }

    /// Overrides the starting value (expressed in the initially active
    /// unit). Validated against the active range at construction.
    #[must_use]
    pub fn initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    /// Sets the labels a host shows on the unit-toggle affordance, for the
    /// primary and secondary unit respectively.
    #[must_use]
    pub fn toggle_labels(mut self, primary: &str, secondary: &str) -> Self {
        self.toggle_labels = Some((String::from(primary), String::from(secondary)));
        self
    }
}

/// Coordinates a scale controller across two units of measurement.
///
/// The picker owns the active-unit flag and the current value in the active
/// unit. Scroll input reaches it through the pump methods (forwarded to the
/// embedded [`ScaleController`]); unit toggles convert the value and rebuild
/// the embedded scale around the freshly active configuration — the scale is
/// reconstructed rather than value-converted, because its range and
/// intervals differ per unit.
///
/// Every settled value change and every toggle publishes one fresh
/// [`MeasurementValue`] to subscribers and returns it as
/// [`PickerEvent::Changed`].
///
/// # Example
///
/// ```rust
/// use core::time::Duration;
/// use vernier_picker::{MeasurementPicker, PickerEvent, PickerOptions};
/// use vernier_scale::ScaleStyle;
/// use vernier_units::MeasurementConfig;
///
/// let kg = MeasurementConfig::builder(40.0, 200.0)
///     .conversion_factor(0.453_592)
///     .unit_label("kg")
///     .initial_value(80.0)
///     .build()
///     .unwrap();
/// let lb = kg.derive_paired("lb").unwrap();
/// let style = ScaleStyle::builder(10.0).build().unwrap();
///
/// let mut picker =
///     MeasurementPicker::with_owned_surface(kg, lb, style, PickerOptions::new()).unwrap();
///
/// // The host attaches the surface after its first layout pass.
/// picker.controller_mut().surface_mut().attach();
/// let events = picker.on_layout(Duration::ZERO);
/// assert_eq!(events, vec![PickerEvent::Ready]);
/// assert!(picker.is_ready());
/// ```
#[derive(Debug)]
pub struct MeasurementPicker<S> {
    primary: MeasurementConfig,
    secondary: MeasurementConfig,
    is_primary: bool,
    toggle_labels: Option<(String, String)>,
    controller: ScaleController<S>,
    subscribers: Subscribers<MeasurementValue>,
}

impl MeasurementPicker<OwnedSurface> {
    /// Creates a picker whose controller owns a plain surface.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_owned_surface(
        primary: MeasurementConfig,
        secondary: MeasurementConfig,
        style: ScaleStyle,
        options: PickerOptions,
    ) -> Result<Self, PickerError> {
        Self::new(primary, secondary, style, options, OwnedSurface::new())
    }
}

impl<S: ScrollSurface> MeasurementPicker<S> {
    /// Creates a picker over an externally supplied surface.
    ///
    /// The embedded controller starts detached with initial positioning
    /// armed; the host pumps [`on_layout`](Self::on_layout) until the picker
    /// [`is_ready`](Self::is_ready), showing a neutral placeholder in the
    /// interim.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError`] if the style's spacing is degenerate or the
    /// starting-value override lies outside the initially active range.
    pub fn new(
        primary: MeasurementConfig,
        secondary: MeasurementConfig,
        style: ScaleStyle,
        options: PickerOptions,
        surface: S,
    ) -> Result<Self, PickerError> {
        let is_primary = !options.start_in_secondary;
        let active = if is_primary { &primary } else { &secondary };

        if let Some(value) = options.initial_value {
            if !(active.min_value()..=active.max_value()).contains(&value) {
                return Err(ConfigError::InitialValueOutOfRange {
                    initial: value,
                    min: active.min_value(),
                    max: active.max_value(),
                }
                .into());
            }
        }

        let mut controller = ScaleController::new(active, style, surface)?;
        if let Some(value) = options.initial_value {
            // The surface is not attached yet, so this only seeds the value.
            let _ = controller.set_value(value, Duration::ZERO);
        }
        controller.initialize();

        Ok(Self {
            primary,
            secondary,
            is_primary,
            toggle_labels: options.toggle_labels,
            controller,
            subscribers: Subscribers::new(),
        })
    }

    /// Flips the active unit and converts the current value into it.
    ///
    /// Conversion preserves the factor asymmetry exactly: primary→secondary
    /// multiplies by the primary config's factor, secondary→primary by the
    /// reciprocal of the secondary config's factor. The embedded scale is
    /// rebuilt around the freshly active configuration and repositions on
    /// the next layout pass.
    pub fn toggle_unit(&mut self) -> Vec<PickerEvent> {
        let current = self.controller.value();
        let converted = if self.is_primary {
            convert(current, self.primary.conversion_factor())
        } else {
            convert(current, 1.0 / self.secondary.conversion_factor())
        };
        self.is_primary = !self.is_primary;

        let active = if self.is_primary {
            self.primary.clone()
        } else {
            self.secondary.clone()
        };
        let _ = self.controller.reconfigure(&active, converted);

        let measurement = self.measurement_value();
        self.subscribers.emit(&measurement);
        vec![PickerEvent::Changed(measurement)]
    }

    /// Programmatically sets the value, expressed in the active unit.
    pub fn set_value(&mut self, value: f64, now: Duration) -> Vec<PickerEvent> {
        let events = self.controller.set_value(value, now);
        self.forward(events)
    }

    /// Layout-complete signal from the host, forwarded to the embedded
    /// controller.
    pub fn on_layout(&mut self, now: Duration) -> Vec<PickerEvent> {
        let events = self.controller.on_layout(now);
        self.forward(events)
    }

    /// Offset-change notification from the surface, forwarded to the
    /// embedded controller. Settled value changes publish a fresh
    /// [`MeasurementValue`] in the active unit — the scrolled value is
    /// already expressed in it, so no conversion happens here.
    pub fn on_offset_changed(&mut self, now: Duration) -> Vec<PickerEvent> {
        let events = self.controller.on_offset_changed(now);
        self.forward(events)
    }

    /// Frame tick from the host, forwarded to the embedded controller.
    pub fn on_frame(&mut self, now: Duration) -> Vec<PickerEvent> {
        let events = self.controller.on_frame(now);
        self.forward(events)
    }

    /// Tears down the embedded controller; pending work is canceled and all
    /// further input becomes a no-op.
    pub fn dispose(&mut self) {
        self.controller.dispose();
        self.subscribers.clear();
    }

    /// Registers a change callback, invoked with a fresh
    /// [`MeasurementValue`] on every settled value change or unit toggle.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&MeasurementValue) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Removes a change subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Returns the current value, expressed in the active unit.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.controller.value()
    }

    /// Returns `true` while the primary unit is active.
    #[must_use]
    pub fn is_primary_unit(&self) -> bool {
        self.is_primary
    }

    /// Returns the configuration of the active unit.
    #[must_use]
    pub fn active_config(&self) -> &MeasurementConfig {
        if self.is_primary {
            &self.primary
        } else {
            &self.secondary
        }
    }

    /// Returns the configuration of the inactive unit.
    #[must_use]
    pub fn inactive_config(&self) -> &MeasurementConfig {
        if self.is_primary {
            &self.secondary
        } else {
            &self.primary
        }
    }

    /// Returns the toggle-affordance label for the unit a toggle would
    /// switch to, if labels were configured.
    #[must_use]
    pub fn toggle_label(&self) -> Option<&str> {
        self.toggle_labels.as_ref().map(|(primary, secondary)| {
            if self.is_primary {
                secondary.as_str()
            } else {
                primary.as_str()
            }
        })
    }

    /// Returns `true` once the embedded scale is attached and positioned.
    /// Hosts show a neutral placeholder until then.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.controller.is_ready()
    }

    /// Returns a shared reference to the embedded controller (tick layout
    /// queries for the rendering layer).
    #[must_use]
    pub fn controller(&self) -> &ScaleController<S> {
        &self.controller
    }

    /// Returns a mutable reference to the embedded controller (surface
    /// lifecycle and gesture plumbing).
    pub fn controller_mut(&mut self) -> &mut ScaleController<S> {
        &mut self.controller
    }

    /// Builds the unified output DTO for the current state.
    fn measurement_value(&self) -> MeasurementValue {
        MeasurementValue {
            value: self.controller.value(),
            unit: String::from(self.active_config().unit_label()),
            is_primary_unit: self.is_primary,
        }
    }

    /// Translates controller events into picker events, publishing value
    /// changes to subscribers as they pass through.
    fn forward(&mut self, events: Vec<ScaleEvent>) -> Vec<PickerEvent> {
        let mut out = Vec::new();
        for event in events {
            match event {
                ScaleEvent::ValueChanged(_) => {
                    let measurement = self.measurement_value();
                    self.subscribers.emit(&measurement);
                    out.push(PickerEvent::Changed(measurement));
                }
                ScaleEvent::Ready => out.push(PickerEvent::Ready),
                // Positioning retries and settle bookkeeping are internal to
                // the scale; the picker's contract is the unified change
                // event plus readiness.
                ScaleEvent::InitialPositionDeferred { .. }
                | ScaleEvent::InitialPositionAbandoned
                | ScaleEvent::SnapStarted { .. }
                | ScaleEvent::SnapFinished(_) => {}
            }
        }
        out
    }
}
