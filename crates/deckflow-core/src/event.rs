#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the platform-neutral event types the navigation core
//! consumes. The host adapter translates raw platform events (browser wheel
//! and touch events, key presses) into these types at the boundary, sampling
//! any per-event measurements at translation time.
//!
//! # Design Notes
//!
//! - Deltas and coordinates are `f64` device pixels; line-granularity wheel
//!   deltas carry their own mode and are normalized on demand.
//! - `Modifiers` use bitflags for easy combination.
//! - [`DeckEvent`] is the routed form: wheel and touch variants carry the
//!   scroll extent of the region the event originated in, when any. The
//!   extent must be sampled fresh for every event, never cached.

use crate::extent::ScrollExtent;
use bitflags::bitflags;

/// Approximate pixels per line-granularity wheel notch.
///
/// Boundary comparisons operate in pixel units; line deltas are scaled by
/// this factor before comparison.
pub const LINE_HEIGHT_PX: f64 = 16.0;

/// Granularity of a wheel event's delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelDeltaMode {
    /// Continuous pixel deltas, typical of trackpads.
    #[default]
    Pixel,
    /// Discrete line deltas, one per physical notch of a mechanical wheel.
    Line,
}

/// A vertical wheel event.
///
/// Positive `delta_y` scrolls content downward (toward the next slide).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Signed vertical delta, in units of `mode`.
    pub delta_y: f64,
    /// Delta granularity.
    pub mode: WheelDeltaMode,
}

impl WheelEvent {
    /// Create a pixel-granularity wheel event.
    #[must_use]
    pub const fn pixels(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: WheelDeltaMode::Pixel,
        }
    }

    /// Create a line-granularity wheel event.
    #[must_use]
    pub const fn lines(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: WheelDeltaMode::Line,
        }
    }

    /// The delta normalized to pixels.
    ///
    /// Line deltas are scaled by [`LINE_HEIGHT_PX`]; pixel deltas pass
    /// through unchanged.
    #[must_use]
    pub fn pixel_delta(&self) -> f64 {
        match self.mode {
            WheelDeltaMode::Pixel => self.delta_y,
            WheelDeltaMode::Line => self.delta_y * LINE_HEIGHT_PX,
        }
    }
}

/// A single-finger touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Vertical viewport coordinate of the touch point, in pixels.
    pub y: f64,
}

impl TouchEvent {
    /// Create a touch sample at the given vertical coordinate.
    #[must_use]
    pub const fn at(y: f64) -> Self {
        Self { y }
    }
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const META  = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Key codes the deck reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Space bar.
    Space,
    /// Any other printable key.
    Char(char),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// An input event as routed to the interceptor chain.
///
/// Wheel and touch variants carry `Some(extent)` exactly when the raw event
/// originated inside a guarded scrollable region; the host samples the
/// region's extent at dispatch time. Events without an extent originated on
/// the deck surface itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckEvent {
    /// A wheel event.
    Wheel {
        /// The wheel delta.
        wheel: WheelEvent,
        /// Extent of the originating scrollable region, if any.
        extent: Option<ScrollExtent>,
    },
    /// A touch sequence began.
    TouchStart {
        /// The initial touch sample.
        touch: TouchEvent,
        /// Extent of the originating scrollable region, if any.
        extent: Option<ScrollExtent>,
    },
    /// The touch point moved.
    TouchMove {
        /// The current touch sample.
        touch: TouchEvent,
        /// Extent of the originating scrollable region, if any.
        extent: Option<ScrollExtent>,
    },
    /// The touch sequence ended.
    TouchEnd {
        /// The final touch sample.
        touch: TouchEvent,
    },
    /// A keyboard event.
    Key(KeyEvent),
}

impl DeckEvent {
    /// The originating region's extent, when the event carries one.
    #[must_use]
    pub fn extent(&self) -> Option<ScrollExtent> {
        match self {
            Self::Wheel { extent, .. }
            | Self::TouchStart { extent, .. }
            | Self::TouchMove { extent, .. } => *extent,
            Self::TouchEnd { .. } | Self::Key(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_delta_passes_through() {
        let e = WheelEvent::pixels(37.5);
        assert_eq!(e.pixel_delta(), 37.5);
    }

    #[test]
    fn line_delta_normalizes_to_pixels() {
        let e = WheelEvent::lines(3.0);
        assert_eq!(e.pixel_delta(), 48.0);

        let up = WheelEvent::lines(-1.0);
        assert_eq!(up.pixel_delta(), -16.0);
    }

    #[test]
    fn key_event_builder() {
        let k = KeyEvent::new(KeyCode::ArrowDown).with_modifiers(Modifiers::SHIFT);
        assert_eq!(k.code, KeyCode::ArrowDown);
        assert!(k.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn deck_event_extent_only_on_region_events() {
        let extent = ScrollExtent::new(0.0, 100.0, 500.0);
        let inner = DeckEvent::Wheel {
            wheel: WheelEvent::pixels(10.0),
            extent: Some(extent),
        };
        assert_eq!(inner.extent(), Some(extent));

        let key = DeckEvent::Key(KeyEvent::new(KeyCode::Space));
        assert_eq!(key.extent(), None);
    }
}
