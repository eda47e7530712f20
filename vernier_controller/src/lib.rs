// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vernier_controller --heading-base-level=0

//! Vernier Controller: the scroll-to-value interaction machine.
//!
//! This crate turns continuous scroll input into a quantized, clamped value
//! stream and settles the scroll surface onto tick boundaries after
//! interaction stops. It is the stateful heart of a ruler-style picker:
//! everything else in the workspace is either geometry it consumes
//! (`vernier_scale`) or composition built on top of it (`vernier_picker`).
//!
//! The core concepts are:
//!
//! - [`ScrollSurface`]: the narrow seam to the host's scrollable primitive —
//!   attachment state, offset, and commanded offsets. [`OwnedSurface`] is
//!   the built-in implementation for hosts without one.
//! - [`ScaleController`]: the state machine. It is pumped by the host
//!   (layout passes, offset-change notifications, frame ticks) and responds
//!   with [`ScaleEvent`]s; value changes also reach subscribers registered
//!   on the controller.
//! - [`Phase`]: `Detached` → `Idle` ⇄ `Scrolling` → `Snapping`, with the
//!   offset listener suppressed during commanded moves so a settle's own
//!   offset traffic cannot re-trigger value recomputation or another settle.
//!
//! Behavior at a glance:
//!
//! - **Deferred attachment**: initial positioning retries once per layout
//!   pass, at most [`INITIAL_POSITION_RETRIES`] times, then gives up
//!   silently (the value stays correct; only the visual offset may drift —
//!   an accepted degraded mode).
//! - **Debounced settle**: scroll events re-arm a
//!   [`DEBOUNCE_QUIET_PERIOD`] timer; when it expires the surface animates
//!   onto the nearest tick over [`SNAP_DURATION`] with an ease-out curve.
//! - **Change-only publication**: a clamped value equal to the previous one
//!   publishes nothing, so holding a scale past its end does not spam
//!   observers.
//!
//! Single-threaded and host-pumped: no clocks, no threads, no blocking.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod surface;

pub use controller::{
    ControllerDebugInfo, DEBOUNCE_QUIET_PERIOD, INITIAL_POSITION_RETRIES, Phase, SNAP_DURATION,
    ScaleController, ScaleEvent,
};
pub use surface::{OwnedSurface, ScrollSurface, SurfaceDetached};
