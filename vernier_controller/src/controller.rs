// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll-to-value interaction controller.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use vernier_observe::{ObservableCell, SubscriptionId};
use vernier_scale::{ScaleError, ScaleMapper, ScaleStyle, TickModel};
use vernier_timing::{Debouncer, Easing, MoveCompletion, Tween};
use vernier_units::MeasurementConfig;

use crate::surface::ScrollSurface;

/// Quiet period after the last scroll event before the scale settles.
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Duration of the settle animation onto the nearest tick.
pub const SNAP_DURATION: Duration = Duration::from_millis(120);

/// Attempts granted to initial positioning before giving up.
///
/// One attempt is consumed per layout pass while the surface reports no
/// attachment; after the last one the controller abandons the visual sync
/// silently — the value itself is already correct.
pub const INITIAL_POSITION_RETRIES: u8 = 4;

/// Interaction state of a [`ScaleController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The surface has no attachment yet (or the controller was disposed).
    Detached,
    /// Attached, value settled, listening for offset changes.
    Idle,
    /// Attached, the offset is actively changing under user input.
    Scrolling,
    /// A commanded move (settle, initial positioning, or programmatic set)
    /// is in flight; the offset listener is suppressed so the move's own
    /// offset traffic cannot re-enter the value pipeline.
    Snapping,
}

/// Events produced by a [`ScaleController`] in response to host input.
///
/// Each input method returns the events it produced, in order. Value changes
/// are additionally pushed to subscribers registered via
/// [`ScaleController::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScaleEvent {
    /// The published value changed. Fires at most once per distinct clamped
    /// value.
    ValueChanged(f64),
    /// Initial positioning found the surface unattached and will retry on
    /// the next layout pass.
    InitialPositionDeferred {
        /// Attempts left after this one.
        remaining: u8,
    },
    /// Initial positioning exhausted its attempts and gave up. The value is
    /// still correct internally; only the visual offset may be unsynced.
    InitialPositionAbandoned,
    /// The surface is attached and positioned; rendering can begin.
    Ready,
    /// The settle animation toward the nearest tick started.
    SnapStarted {
        /// Offset the surface is settling onto.
        target: f64,
    },
    /// The settle animation ended and the listener resumed.
    SnapFinished(MoveCompletion),
}

/// What an in-flight commanded move is for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MoveKind {
    InitialPosition,
    SetValue,
    Snap,
}

/// Owns a scale's interaction state: it listens for offset changes on the
/// scrollable surface, maps them to clamped domain values, publishes changes,
/// and settles the surface onto tick boundaries after interaction stops.
///
/// The controller is pumped by its host; it never blocks and never looks at
/// a clock. Hosts call:
///
/// - [`initialize`](Self::initialize) once, then
///   [`on_layout`](Self::on_layout) per layout pass (drives the bounded
///   initial-positioning retry),
/// - [`on_offset_changed`](Self::on_offset_changed) whenever the surface's
///   offset changes,
/// - [`on_frame`](Self::on_frame) per frame tick (drives the debounced
///   settle and any in-flight move),
/// - [`dispose`](Self::dispose) on teardown.
///
/// All times are host-supplied `Duration`s since an arbitrary fixed epoch,
/// monotonically non-decreasing.
///
/// # Example
///
/// ```rust
/// use core::time::Duration;
/// use vernier_controller::{OwnedSurface, ScaleController, ScaleEvent, ScrollSurface};
/// use vernier_scale::ScaleStyle;
/// use vernier_units::MeasurementConfig;
///
/// let config = MeasurementConfig::builder(0.0, 200.0)
///     .minor_interval(1.0)
///     .major_interval(10.0)
///     .initial_value(100.0)
///     .build()
///     .unwrap();
/// let style = ScaleStyle::builder(10.0).build().unwrap();
///
/// let mut controller = ScaleController::with_owned_surface(&config, style).unwrap();
/// controller.initialize();
/// controller.surface_mut().attach();
///
/// // First layout pass positions the surface at the initial value.
/// let events = controller.on_layout(Duration::ZERO);
/// assert_eq!(events, vec![ScaleEvent::Ready]);
/// assert_eq!(controller.surface().offset(), 1000.0);
///
/// // A drag moves the surface; the controller publishes the mapped value.
/// controller.surface_mut().set_offset(1555.0).unwrap();
/// let events = controller.on_offset_changed(Duration::from_millis(16));
/// assert_eq!(events, vec![ScaleEvent::ValueChanged(155.5)]);
/// ```
#[derive(Debug)]
pub struct ScaleController<S> {
    mapper: ScaleMapper,
    ticks: TickModel,
    style: ScaleStyle,
    surface: S,
    phase: Phase,
    value: ObservableCell<f64>,
    debounce: Debouncer,
    in_flight: Option<(Tween, MoveKind)>,
    listener_paused: bool,
    initial_pending: bool,
    position_retries: u8,
    disposed: bool,
}

impl ScaleController<crate::surface::OwnedSurface> {
    /// Creates a controller that owns its own plain surface.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaleError`] if the style's spacing is degenerate.
    pub fn with_owned_surface(
        config: &MeasurementConfig,
        style: ScaleStyle,
    ) -> Result<Self, ScaleError> {
        Self::new(config, style, crate::surface::OwnedSurface::new())
    }
}

impl<S: ScrollSurface> ScaleController<S> {
    /// Creates a controller over an externally supplied surface.
    ///
    /// The controller starts [`Phase::Detached`] with the published value at
    /// the config's initial value; call [`initialize`](Self::initialize) to
    /// arm initial positioning.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaleError`] if the style's spacing is degenerate.
    pub fn new(
        config: &MeasurementConfig,
        style: ScaleStyle,
        surface: S,
    ) -> Result<Self, ScaleError> {
        let mapper = ScaleMapper::new(config, style.item_spacing())?;
        let ticks = TickModel::from_config(config);
        let value = ObservableCell::new(config.initial_value());
        Ok(Self {
            mapper,
            ticks,
            style,
            surface,
            phase: Phase::Detached,
            value,
            debounce: Debouncer::new(DEBOUNCE_QUIET_PERIOD),
            in_flight: None,
            listener_paused: false,
            initial_pending: false,
            position_retries: 0,
            disposed: false,
        })
    }

    /// Arms initial positioning: the next layout passes will try to place
    /// the surface at the offset of the current value, with a bounded retry
    /// budget of [`INITIAL_POSITION_RETRIES`].
    pub fn initialize(&mut self) {
        if self.disposed {
            return;
        }
        self.initial_pending = true;
        self.position_retries = INITIAL_POSITION_RETRIES;
    }

    /// Layout-complete signal from the host; drives initial positioning.
    ///
    /// While positioning is armed and the surface reports no attachment,
    /// each call consumes one retry; exhausting the budget abandons the
    /// visual sync silently. Once attached, the surface is commanded to the
    /// current value's offset — instantly or animated per the style — and
    /// [`ScaleEvent::Ready`] fires when the surface is in place.
    pub fn on_layout(&mut self, now: Duration) -> Vec<ScaleEvent> {
        let mut events = Vec::new();
        if self.disposed || !self.initial_pending {
            return events;
        }

        if !self.surface.is_attached() {
            self.position_retries = self.position_retries.saturating_sub(1);
            if self.position_retries == 0 {
                self.initial_pending = false;
                events.push(ScaleEvent::InitialPositionAbandoned);
            } else {
                events.push(ScaleEvent::InitialPositionDeferred {
                    remaining: self.position_retries,
                });
            }
            return events;
        }

        self.initial_pending = false;
        self.position_retries = 0;
        let target = self.mapper.value_to_offset(*self.value.get());
        let move_style = self.style.position_animation();
        if move_style.is_jump() {
            // A surface torn down between the attachment check and the
            // command is an ordinary race; the failure is swallowed.
            let _ = self.surface.set_offset(target);
            self.phase = Phase::Idle;
            events.push(ScaleEvent::Ready);
        } else {
            self.begin_move(
                target,
                now,
                move_style.duration(),
                move_style.easing(),
                MoveKind::InitialPosition,
            );
        }
        events
    }

    /// Offset-change notification from the surface.
    ///
    /// Ignored while a commanded move has the listener paused or the surface
    /// has no attachment. Otherwise the offset is mapped and clamped, the
    /// value published if it changed, and the debounced settle (re)armed.
    pub fn on_offset_changed(&mut self, now: Duration) -> Vec<ScaleEvent> {
        let mut events = Vec::new();
        if self.disposed || self.listener_paused || !self.surface.is_attached() {
            return events;
        }

        let clamped = self.mapper.clamp_value(self.mapper.offset_to_value(self.surface.offset()));
        if self.value.set(clamped) {
            events.push(ScaleEvent::ValueChanged(clamped));
        }
        self.phase = Phase::Scrolling;
        self.debounce.trigger(now);
        events
    }

    /// Frame tick from the host; drives deferred work.
    ///
    /// Samples any in-flight move onto the surface and resumes listening
    /// when it ends (finished or interrupted). Starts the settle animation
    /// when the debounce quiet period expires.
    pub fn on_frame(&mut self, now: Duration) -> Vec<ScaleEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }

        if let Some((tween, kind)) = self.in_flight {
            let result = self.surface.set_offset(tween.sample(now));
            if tween.is_finished(now) || result.is_err() {
                let completion = if result.is_ok() {
                    MoveCompletion::Finished
                } else {
                    MoveCompletion::Interrupted
                };
                self.in_flight = None;
                self.listener_paused = false;
                self.phase = if self.surface.is_attached() {
                    Phase::Idle
                } else {
                    Phase::Detached
                };
                match kind {
                    MoveKind::Snap => events.push(ScaleEvent::SnapFinished(completion)),
                    MoveKind::InitialPosition => {
                        if completion == MoveCompletion::Finished {
                            events.push(ScaleEvent::Ready);
                        }
                    }
                    MoveKind::SetValue => {}
                }
            }
        } else if self.debounce.poll(now) {
            let target = self.mapper.snap_offset(self.surface.offset());
            self.begin_move(target, now, SNAP_DURATION, Easing::EaseOut, MoveKind::Snap);
            events.push(ScaleEvent::SnapStarted { target });
        }
        events
    }

    /// Programmatically sets the value.
    ///
    /// The value is clamped and published if it changed; an attached surface
    /// is repositioned (instantly or animated per the style). Supersedes any
    /// pending settle.
    pub fn set_value(&mut self, value: f64, now: Duration) -> Vec<ScaleEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }

        self.debounce.cancel();
        let clamped = self.mapper.clamp_value(value);
        if self.value.set(clamped) {
            events.push(ScaleEvent::ValueChanged(clamped));
        }

        if self.surface.is_attached() {
            let target = self.mapper.value_to_offset(clamped);
            let move_style = self.style.position_animation();
            if move_style.is_jump() {
                let _ = self.surface.set_offset(target);
                self.phase = Phase::Idle;
            } else {
                self.begin_move(
                    target,
                    now,
                    move_style.duration(),
                    move_style.easing(),
                    MoveKind::SetValue,
                );
            }
        }
        events
    }

    /// Swaps in a new measurement configuration, starting at `initial_value`
    /// (clamped into the new range).
    ///
    /// The machine resets to [`Phase::Detached`]: deferred work is canceled,
    /// the value moves to the clamped starting value (publishing if it
    /// differs), and initial positioning is re-armed. Subscribers survive.
    /// The surface handle is reused; its attachment state is the host's
    /// business.
    pub fn reconfigure(
        &mut self,
        config: &MeasurementConfig,
        initial_value: f64,
    ) -> Vec<ScaleEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }

        self.mapper = self.mapper.with_config(config);
        self.ticks = TickModel::from_config(config);
        self.debounce.cancel();
        self.in_flight = None;
        self.listener_paused = false;
        self.phase = Phase::Detached;
        let start = self.mapper.clamp_value(initial_value);
        if self.value.set(start) {
            events.push(ScaleEvent::ValueChanged(start));
        }
        self.initialize();
        events
    }

    /// Tears the controller down.
    ///
    /// Deferred work is canceled before the surface is released from the
    /// controller's interest, so no callback can fire against a dead host.
    /// Every input method becomes a no-op afterwards.
    pub fn dispose(&mut self) {
        self.debounce.cancel();
        self.in_flight = None;
        self.initial_pending = false;
        self.position_retries = 0;
        self.listener_paused = false;
        self.phase = Phase::Detached;
        self.disposed = true;
    }

    /// Consumes the controller and returns the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Registers a value-change callback, invoked on every published change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&f64) + 'static,
    {
        self.value.subscribe(callback)
    }

    /// Removes a value-change subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.value.unsubscribe(id)
    }

    /// Returns the current published value, always within the configured
    /// range.
    #[must_use]
    pub fn value(&self) -> f64 {
        *self.value.get()
    }

    /// Returns the current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` once the surface is attached, positioned, and the
    /// controller not disposed — the host can render the scale. Until then
    /// a host typically shows a neutral placeholder.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.disposed
            && !self.initial_pending
            && self.surface.is_attached()
            && !matches!(self.in_flight, Some((_, MoveKind::InitialPosition)))
    }

    /// Returns `true` after [`dispose`](Self::dispose).
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns a shared reference to the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable reference to the surface (for the host gesture
    /// system and lifecycle calls).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the number of ticks on the scale.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.ticks.item_count()
    }

    /// Returns `true` if the tick at `index` is aligned to the major
    /// interval.
    #[must_use]
    pub fn is_major_tick(&self, index: usize) -> bool {
        self.ticks.is_major(index)
    }

    /// Returns the label for the tick at `index`, or `None` for an
    /// unlabeled tick.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<String> {
        self.ticks.label_at(index, &self.style)
    }

    /// Returns the offset at which the tick at `index` sits.
    #[must_use]
    pub fn tick_offset(&self, index: usize) -> f64 {
        self.mapper.value_to_offset(self.ticks.value_at(index))
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            phase: self.phase,
            value: *self.value.get(),
            attached: self.surface.is_attached(),
            listener_paused: self.listener_paused,
            initial_pending: self.initial_pending,
            position_retries_remaining: self.position_retries,
            debounce_pending: self.debounce.is_pending(),
            move_in_flight: self.in_flight.is_some(),
            disposed: self.disposed,
        }
    }

    /// Starts a commanded move: pauses the listener and arms the tween from
    /// the surface's current offset.
    fn begin_move(
        &mut self,
        target: f64,
        now: Duration,
        duration: Duration,
        easing: Easing,
        kind: MoveKind,
    ) {
        self.listener_paused = true;
        self.phase = Phase::Snapping;
        let tween = Tween::new(self.surface.offset(), target, now, duration, easing);
        self.in_flight = Some((tween, kind));
    }
}

/// Debug snapshot of a [`ScaleController`] state.
#[derive(Copy, Clone, Debug)]
pub struct ControllerDebugInfo {
    /// Current interaction phase.
    pub phase: Phase,
    /// Current published value.
    pub value: f64,
    /// Whether the surface reports an attachment.
    pub attached: bool,
    /// Whether offset-change notifications are currently suppressed.
    pub listener_paused: bool,
    /// Whether initial positioning is still armed.
    pub initial_pending: bool,
    /// Retry attempts left for initial positioning.
    pub position_retries_remaining: u8,
    /// Whether the settle debounce is armed.
    pub debounce_pending: bool,
    /// Whether a commanded move is in flight.
    pub move_in_flight: bool,
    /// Whether the controller was disposed.
    pub disposed: bool,
}
