#![forbid(unsafe_code)]

//! Wheel gesture gate: wheel streams in, discrete slide steps out.
//!
//! Mechanical wheels report line-granularity deltas where each notch is
//! already a discrete user intent; trackpads report a continuous stream of
//! small pixel deltas. The gate converts both into at most one [`Step`]
//! per cooldown window, so one physical gesture never advances the deck
//! more than one slide.
//!
//! # Algorithm
//!
//! - While the cooldown is active, every event is swallowed: no step, no
//!   accumulation.
//! - A line-granularity event emits a step immediately with the sign of
//!   its delta and starts the cooldown.
//! - Pixel-granularity deltas accumulate with sign; when the magnitude of
//!   the running sum first reaches the threshold, a step with the sum's
//!   sign is emitted, the accumulator resets to zero, and the cooldown
//!   starts. Opposite-direction jitter cancels in the accumulator.
//!
//! The gate is a pure classifier: it knows nothing about slide indices.
//! Callers suppress the default scroll action for every wheel event they
//! feed it, step or no step (see [`GateInterceptor`]).
//!
//! # Invariants
//!
//! 1. At most one step is emitted per cooldown window.
//! 2. Immediately after a step, the pixel accumulator is zero.
//! 3. A zero delta never changes state.
//!
//! [`GateInterceptor`]: crate::intercept::GateInterceptor

use crate::event::{WheelDeltaMode, WheelEvent};
use std::time::{Duration, Instant};

/// Configuration for the wheel gesture gate.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Accumulated pixel-delta magnitude that triggers a step for
    /// pixel-granularity wheels.
    /// Default: 50.0
    pub pixel_threshold_px: f64,

    /// Window after an emitted step during which all wheel input is
    /// swallowed.
    /// Default: 280ms
    pub cooldown: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            pixel_threshold_px: 50.0,
            cooldown: Duration::from_millis(280),
        }
    }
}

/// A discrete navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Advance to the next slide.
    Next,
    /// Return to the previous slide.
    Prev,
}

impl Step {
    /// Signed slide-index delta: `+1` for next, `-1` for previous.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Next => 1,
            Self::Prev => -1,
        }
    }

    /// Classify a signed value: positive is next, negative is previous,
    /// zero is no step.
    #[must_use]
    pub fn from_sign(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Self::Next)
        } else if value < 0.0 {
            Some(Self::Prev)
        } else {
            None
        }
    }
}

/// Gate phase: idle, or cooling down until a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GatePhase {
    Idle,
    Cooldown { until: Instant },
}

/// Stateful wheel gesture gate.
///
/// Feed wheel events via [`on_wheel`](WheelGate::on_wheel) with the current
/// timestamp; time is always injected so tests can drive a fake clock.
#[derive(Debug, Clone)]
pub struct WheelGate {
    config: GateConfig,

    /// Current phase of the `{Idle, Cooldown}` machine.
    phase: GatePhase,

    /// Signed running sum of pixel-granularity deltas.
    pixel_accumulator: f64,

    /// Diagnostic: total steps emitted.
    steps_emitted: u64,
}

impl WheelGate {
    /// Create a gate with the given configuration.
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            phase: GatePhase::Idle,
            pixel_accumulator: 0.0,
            steps_emitted: 0,
        }
    }

    /// Process one wheel event at time `now`.
    ///
    /// Returns the emitted step, if any. Regardless of the return value the
    /// caller must suppress the event's default scroll action: swallowed
    /// and sub-threshold events still must not produce native scrolling.
    pub fn on_wheel(&mut self, event: &WheelEvent, now: Instant) -> Option<Step> {
        if self.in_cooldown(now) {
            return None;
        }
        self.phase = GatePhase::Idle;

        match event.mode {
            WheelDeltaMode::Line => {
                // One notch, one intent. A zero delta carries no intent.
                let step = Step::from_sign(event.delta_y)?;
                self.emit(step, now);
                Some(step)
            }
            WheelDeltaMode::Pixel => {
                self.pixel_accumulator += event.delta_y;
                if self.pixel_accumulator.abs() < self.config.pixel_threshold_px {
                    return None;
                }
                let step = if self.pixel_accumulator > 0.0 {
                    Step::Next
                } else {
                    Step::Prev
                };
                self.pixel_accumulator = 0.0;
                self.emit(step, now);
                Some(step)
            }
        }
    }

    /// Whether the cooldown window is active at time `now`.
    ///
    /// The window is half-open: an event arriving exactly at the deadline
    /// is processed.
    #[must_use]
    pub fn in_cooldown(&self, now: Instant) -> bool {
        matches!(self.phase, GatePhase::Cooldown { until } if now < until)
    }

    /// Current signed pixel accumulator (diagnostic/testing).
    #[inline]
    #[must_use]
    pub fn pixel_accumulator(&self) -> f64 {
        self.pixel_accumulator
    }

    /// Total steps emitted over the gate's lifetime (diagnostic).
    #[inline]
    #[must_use]
    pub fn steps_emitted(&self) -> u64 {
        self.steps_emitted
    }

    /// Reset to the initial state. Used when the gate detaches.
    pub fn reset(&mut self) {
        self.phase = GatePhase::Idle;
        self.pixel_accumulator = 0.0;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    fn emit(&mut self, _step: Step, now: Instant) {
        self.phase = GatePhase::Cooldown {
            until: now + self.config.cooldown,
        };
        self.steps_emitted += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(step = ?_step, "wheel gate emitted step");
    }
}

impl Default for WheelGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}
