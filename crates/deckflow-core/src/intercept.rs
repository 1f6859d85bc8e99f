#![forbid(unsafe_code)]

//! Ordered event interceptor chain.
//!
//! The scroll guard must shadow the wheel gate: input that originates
//! inside a guarded region may scroll that region but must never reach
//! deck-level navigation. Relying on platform bubbling order for this is
//! fragile, so the composition is explicit here: interceptors run in chain
//! order and the first one to return [`Disposition::Handled`] ends the
//! dispatch.
//!
//! The host translates each raw platform event into a [`DeckEvent`]
//! (sampling the originating region's extent, if any), dispatches it
//! through the chain, then applies the returned [`EventFate`] to the raw
//! event and forwards any emitted [`Step`] to the deck controller.

use crate::event::DeckEvent;
use crate::gate::{GateConfig, Step, WheelGate};
use crate::guard::{GuardVerdict, ScrollGuard};
use std::time::Instant;

/// What the host must do with the raw platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFate {
    /// Stop the event from propagating to ancestor handlers.
    pub stop_propagation: bool,
    /// Prevent the event's default action (native scroll, bounce).
    pub prevent_default: bool,
}

impl EventFate {
    /// Let the event propagate and keep its default action.
    #[must_use]
    pub const fn propagate() -> Self {
        Self {
            stop_propagation: false,
            prevent_default: false,
        }
    }

    /// Stop propagation but let the default action proceed.
    #[must_use]
    pub const fn stop() -> Self {
        Self {
            stop_propagation: true,
            prevent_default: false,
        }
    }

    /// Stop propagation and prevent the default action.
    #[must_use]
    pub const fn stop_and_prevent() -> Self {
        Self {
            stop_propagation: true,
            prevent_default: true,
        }
    }

    /// Prevent the default action without stopping propagation.
    #[must_use]
    pub const fn prevent() -> Self {
        Self {
            stop_propagation: false,
            prevent_default: true,
        }
    }
}

/// Result of offering an event to one interceptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The interceptor consumed the event; dispatch ends here.
    Handled {
        /// Fate the host must apply to the raw event.
        fate: EventFate,
        /// Step emitted while handling, if any (gate only).
        step: Option<Step>,
    },
    /// Not this interceptor's concern; offer it to the next one.
    Pass,
}

/// An ordered stage of the input pipeline.
pub trait Interceptor {
    /// Offer one event to this interceptor at time `now`.
    fn intercept(&mut self, event: &DeckEvent, now: Instant) -> Disposition;
}

/// Combined outcome of a chain dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainOutcome {
    /// Fate to apply to the raw event. Events no interceptor handled
    /// propagate untouched.
    pub fate: EventFate,
    /// Step emitted during dispatch, if any.
    pub step: Option<Step>,
}

/// Ordered chain of interceptors.
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// The standard deck pipeline: guard first, gate last.
    #[must_use]
    pub fn standard(gate_config: GateConfig) -> Self {
        let mut chain = Self::new();
        chain.push(GuardInterceptor::new());
        chain.push(GateInterceptor::new(WheelGate::new(gate_config)));
        chain
    }

    /// Append an interceptor to the end of the chain.
    pub fn push(&mut self, interceptor: impl Interceptor + 'static) {
        self.interceptors.push(Box::new(interceptor));
    }

    /// Number of interceptors in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Dispatch one event through the chain in order.
    ///
    /// Stops at the first interceptor that handles the event. An event
    /// nobody handles propagates with its default action intact.
    pub fn dispatch(&mut self, event: &DeckEvent, now: Instant) -> ChainOutcome {
        for interceptor in &mut self.interceptors {
            if let Disposition::Handled { fate, step } = interceptor.intercept(event, now) {
                return ChainOutcome { fate, step };
            }
        }
        ChainOutcome {
            fate: EventFate::propagate(),
            step: None,
        }
    }
}

impl Default for InterceptorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.interceptors.len())
            .finish()
    }
}

/// Chain stage wrapping the [`ScrollGuard`].
///
/// Handles exactly the wheel/touch events that carry an extent (they
/// originated inside the guarded region) and stops their propagation so
/// the gate never sees them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardInterceptor {
    guard: ScrollGuard,
}

impl GuardInterceptor {
    /// Create a guard stage with no touch sequence in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Interceptor for GuardInterceptor {
    fn intercept(&mut self, event: &DeckEvent, _now: Instant) -> Disposition {
        let verdict = match event {
            DeckEvent::Wheel {
                wheel,
                extent: Some(extent),
            } => self.guard.on_wheel(wheel, *extent),
            DeckEvent::TouchStart {
                touch,
                extent: Some(_),
            } => {
                self.guard.on_touch_start(touch);
                GuardVerdict::ScrollLocally
            }
            DeckEvent::TouchMove {
                touch,
                extent: Some(extent),
            } => self.guard.on_touch_move(touch, *extent),
            _ => return Disposition::Pass,
        };

        let fate = match verdict {
            GuardVerdict::ScrollLocally => EventFate::stop(),
            GuardVerdict::Suppress => EventFate::stop_and_prevent(),
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(?verdict, "scroll guard verdict");
        Disposition::Handled { fate, step: None }
    }
}

/// Chain stage wrapping the [`WheelGate`].
///
/// Terminal stage for deck-surface wheel events. Every handled event has
/// its default action prevented, step or no step, so partial trackpad
/// accumulation never produces native scrolling.
#[derive(Debug, Clone)]
pub struct GateInterceptor {
    gate: WheelGate,
}

impl GateInterceptor {
    /// Create a gate stage around the given gate.
    #[must_use]
    pub fn new(gate: WheelGate) -> Self {
        Self { gate }
    }

    /// Access the wrapped gate (diagnostics/tests).
    #[must_use]
    pub fn gate(&self) -> &WheelGate {
        &self.gate
    }
}

impl Interceptor for GateInterceptor {
    fn intercept(&mut self, event: &DeckEvent, now: Instant) -> Disposition {
        match event {
            DeckEvent::Wheel {
                wheel,
                extent: None,
            } => Disposition::Handled {
                fate: EventFate::prevent(),
                step: self.gate.on_wheel(wheel, now),
            },
            _ => Disposition::Pass,
        }
    }
}
