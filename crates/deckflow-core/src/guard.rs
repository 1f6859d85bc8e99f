#![forbid(unsafe_code)]

//! Inner scroll guard for scrollable regions nested inside a slide.
//!
//! A region with its own scroll bar must be able to scroll without the
//! gesture leaking into deck navigation, and once the region hits a
//! boundary the overscroll bounce must not leak either. The guard decides,
//! per event, whether the region's native scroll may proceed or the event
//! must be fully suppressed. Either way the event stops propagating: the
//! deck-level gate never sees input that originated inside a guarded
//! region.
//!
//! Verdicts are a pure function of the event's delta and the extent
//! sampled at event time; the only state the guard owns is the starting
//! coordinate of the current touch sequence.

use crate::event::{TouchEvent, WheelEvent};
use crate::extent::ScrollExtent;

/// Per-event decision of the guard.
///
/// Both verdicts stop the event from propagating to deck-level handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Let the region's native scroll proceed.
    ScrollLocally,
    /// Also prevent the default action: the region is at the relevant
    /// boundary and the overscroll must not turn into a bounce.
    Suppress,
}

/// Scroll guard for one nested scrollable region.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollGuard {
    /// Vertical coordinate where the current touch sequence began.
    touch_start_y: Option<f64>,
}

impl ScrollGuard {
    /// Create a guard with no touch sequence in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide a wheel event against the region's current extent.
    ///
    /// Line deltas are normalized to pixels before the boundary check.
    #[must_use]
    pub fn on_wheel(&self, event: &WheelEvent, extent: ScrollExtent) -> GuardVerdict {
        Self::verdict(event.pixel_delta(), extent)
    }

    /// Record the start of a touch sequence.
    pub fn on_touch_start(&mut self, touch: &TouchEvent) {
        self.touch_start_y = Some(touch.y);
    }

    /// Decide a touch move against the region's current extent.
    ///
    /// The delta is `start_y - current_y`, so dragging the finger upward
    /// (scrolling content down) yields a positive delta, matching the
    /// wheel convention. A move with no recorded start is suppressed.
    #[must_use]
    pub fn on_touch_move(&self, touch: &TouchEvent, extent: ScrollExtent) -> GuardVerdict {
        match self.touch_start_y {
            Some(start_y) => Self::verdict(start_y - touch.y, extent),
            None => GuardVerdict::Suppress,
        }
    }

    /// Clear the touch sequence. Detach path.
    pub fn reset(&mut self) {
        self.touch_start_y = None;
    }

    fn verdict(delta_y: f64, extent: ScrollExtent) -> GuardVerdict {
        if extent.can_scroll(delta_y) {
            GuardVerdict::ScrollLocally
        } else {
            GuardVerdict::Suppress
        }
    }
}
