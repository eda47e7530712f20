// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vernier_timing --heading-base-level=0

//! Vernier Timing: host-agnostic timer, debounce, and tween primitives.
//!
//! Interaction controllers need three kinds of deferred execution: one-shot
//! timers, debounced actions that fire after a quiet period, and finite
//! animated interpolations with an explicit completion signal. This crate
//! provides all three without owning a clock or a thread: the host supplies a
//! monotonically non-decreasing `now` (a [`Duration`] since any fixed epoch)
//! with every call, and pumps the primitives from its own event loop, render
//! loop, or test harness.
//!
//! The core concepts are:
//!
//! - [`TimerQueue`]: a set of pending one-shot deadlines with stable
//!   [`TimerId`]s; [`TimerQueue::poll`] drains the expired ones in deadline
//!   order.
//! - [`Debouncer`]: a single pending deadline that is re-armed by every
//!   trigger and fires at most once per quiet period.
//! - [`Tween`] and [`Easing`]: finite interpolation between two scalars with
//!   an easing curve; completion is the value [`MoveCompletion`], never an
//!   error — an interrupted move is an ordinary outcome of interaction.
//!
//! ## Minimal example
//!
//! Debouncing a burst of events on a synthetic clock:
//!
//! ```rust
//! use core::time::Duration;
//! use vernier_timing::Debouncer;
//!
//! let quiet = Duration::from_millis(250);
//! let mut debounce = Debouncer::new(quiet);
//!
//! // Three rapid triggers; each re-arms the deadline.
//! debounce.trigger(Duration::from_millis(0));
//! debounce.trigger(Duration::from_millis(100));
//! debounce.trigger(Duration::from_millis(200));
//!
//! // Not quiet for long enough yet.
//! assert!(!debounce.poll(Duration::from_millis(400)));
//! // 250ms after the last trigger it fires, exactly once.
//! assert!(debounce.poll(Duration::from_millis(450)));
//! assert!(!debounce.poll(Duration::from_millis(500)));
//! ```
//!
//! Everything here is single-threaded and allocation-light; `no_std` with
//! `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod queue;
mod tween;

pub use debounce::Debouncer;
pub use queue::{TimerId, TimerQueue};
pub use tween::{Easing, MoveCompletion, Tween};

// Re-exported for documentation convenience; the host supplies all times as
// plain `Duration`s since an arbitrary epoch.
pub use core::time::Duration;
