// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vernier_observe --heading-base-level=0

//! Vernier Observe: explicit publish-subscribe for UI value propagation.
//!
//! Reactive UI code often hides notification inside mutation — assign to a
//! value cell and listeners run implicitly. This crate takes the opposite
//! stance: every notification is an explicit call at the point of state
//! change, made by the code that changed the state.
//!
//! The core concepts are:
//!
//! - [`Subscribers`]: an ordered registry of boxed callbacks with stable
//!   [`SubscriptionId`]s. [`Subscribers::emit`] invokes them in subscription
//!   order; nothing else ever does.
//! - [`ObservableCell`]: a value cell that pairs storage with a
//!   [`Subscribers`] list and publishes *only on change* —
//!   [`ObservableCell::set`] with an equal value is a silent no-op, which is
//!   what keeps duplicate notifications out of downstream observers.
//!
//! Everything is single-threaded: callbacks are plain `FnMut` without `Send`
//! bounds, so hosts can capture `Rc<RefCell<...>>` state the way UI code
//! does. Reentrancy is prevented structurally — emitting takes `&mut self`,
//! so a callback cannot reach back into the registry that is calling it.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use vernier_observe::ObservableCell;
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let mut value = ObservableCell::new(80.0_f64);
//!
//! let sink = seen.clone();
//! value.subscribe(move |v| sink.set(*v));
//!
//! assert!(value.set(81.0)); // changed: published
//! assert_eq!(seen.get(), 81.0);
//! assert!(!value.set(81.0)); // unchanged: silent
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod subscribers;

pub use cell::ObservableCell;
pub use subscribers::{SubscriptionId, Subscribers};
