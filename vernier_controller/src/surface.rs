// Copyright 2025 the Vernier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrollable-surface seam between the controller and the host.
//!
//! A scale widget does not own scroll physics; the host UI toolkit does.
//! [`ScrollSurface`] is the narrow interface the controller needs from
//! whatever scrollable primitive the host provides: attachment state, the
//! current offset, and the ability to command an offset. Hosts with a real
//! scroll view implement the trait over it; hosts without one (and tests)
//! use the plain [`OwnedSurface`].

use core::fmt;

/// Error reported when commanding an offset on a surface with no attachment.
///
/// The controller swallows this — a command racing a teardown is an ordinary
/// interaction outcome — but the trait surfaces it so implementations don't
/// have to lie about what happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SurfaceDetached;

impl fmt::Display for SurfaceDetached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scroll surface has no attachment")
    }
}

impl core::error::Error for SurfaceDetached {}

/// A host scrollable primitive, reduced to what the controller needs.
///
/// The offset is owned by the surface: the gesture system mutates it during
/// drags, the controller mutates it during commanded moves, and the
/// controller reads it when the host reports an offset change.
///
/// `is_attached` is the two-phase initialization protocol: a surface exists
/// from construction but may not be usable until the host's first layout
/// pass. Implementations report `false` until then and after teardown.
pub trait ScrollSurface {
    /// Returns `true` once the surface is laid out and usable.
    fn is_attached(&self) -> bool;

    /// Returns the current scroll offset.
    fn offset(&self) -> f64;

    /// Commands the offset.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceDetached`] if the surface has no attachment; the
    /// offset is left unchanged.
    fn set_offset(&mut self, offset: f64) -> Result<(), SurfaceDetached>;
}

/// A self-contained [`ScrollSurface`] owned by the controller.
///
/// Used when the host supplies no scrollable primitive of its own. The host
/// drives the two-phase lifecycle explicitly: [`attach`](Self::attach) after
/// first layout, [`detach`](Self::detach) on teardown.
///
/// # Example
///
/// ```rust
/// use vernier_controller::{OwnedSurface, ScrollSurface};
///
/// let mut surface = OwnedSurface::new();
/// assert!(!surface.is_attached());
/// assert!(surface.set_offset(10.0).is_err());
///
/// surface.attach();
/// surface.set_offset(10.0).unwrap();
/// assert_eq!(surface.offset(), 10.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OwnedSurface {
    offset: f64,
    attached: bool,
}

impl OwnedSurface {
    /// Creates a detached surface at offset zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the surface usable. Called by the host after first layout.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Marks the surface torn down. Pending commands start failing.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

impl ScrollSurface for OwnedSurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) -> Result<(), SurfaceDetached> {
        if !self.attached {
            return Err(SurfaceDetached);
        }
        self.offset = offset;
        Ok(())
    }
}
