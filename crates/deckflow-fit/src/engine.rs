#![forbid(unsafe_code)]

//! Refit engine: drives the fit computation over a host surface.
//!
//! [`AutoFitEngine`] owns the current scale and the deferred fallback
//! deadline; everything platform-shaped lives behind [`FitSurface`], which
//! the host implements over its real container/content nodes. Measurements
//! return `Option` so a surface whose nodes are not mounted (or already
//! unmounted) turns every refit into a silent no-op — the previous scale
//! stays applied and nothing throws.
//!
//! Time is injected: the deferred fallback is an armed deadline the host
//! polls, not a hidden timer. Unmount paths call
//! [`cancel_deferred`](AutoFitEngine::cancel_deferred) so no refit ever
//! acts on a detached surface.

use crate::fit::{FitConfig, compute_scale};
use crate::watch::{RefitTrigger, WatchTriggers};
use std::time::{Duration, Instant};

/// Default delay of the one-shot fallback refit after mount.
pub const DEFAULT_DEFERRED_DELAY: Duration = Duration::from_millis(200);

/// Measurement/apply boundary between the engine and the host's nodes.
///
/// `content_natural_height` must report the content's height at identity
/// scale; the engine calls [`reset_scale`](FitSurface::reset_scale) before
/// measuring so a previously applied scale cannot distort the reading.
pub trait FitSurface {
    /// Client height of the container, or `None` if it is not mounted.
    fn container_height(&self) -> Option<f64>;

    /// Natural (unscaled) height of the content, or `None` if it is not
    /// mounted.
    fn content_natural_height(&self) -> Option<f64>;

    /// Reset the applied transform to identity ahead of measurement.
    fn reset_scale(&mut self);

    /// Apply a uniform scale, anchored top-center.
    fn apply_scale(&mut self, scale: f64);
}

/// Auto-fit engine for one (container, content) pair.
#[derive(Debug, Clone)]
pub struct AutoFitEngine {
    config: FitConfig,
    watch: WatchTriggers,
    deferred_delay: Duration,

    /// Current applied scale; 1.0 until the first successful refit.
    scale: f64,

    /// Armed deadline of the one-shot fallback refit.
    deferred_at: Option<Instant>,

    /// Diagnostic: successful refits.
    refits: u64,
}

impl AutoFitEngine {
    /// Create an engine with the given fit configuration, watching all
    /// triggers.
    #[must_use]
    pub fn new(config: FitConfig) -> Self {
        Self {
            config,
            watch: WatchTriggers::default(),
            deferred_delay: DEFAULT_DEFERRED_DELAY,
            scale: 1.0,
            deferred_at: None,
            refits: 0,
        }
    }

    /// Restrict the watched trigger set (platform capability gaps).
    #[must_use]
    pub fn with_watch(mut self, watch: WatchTriggers) -> Self {
        self.watch = watch;
        self
    }

    /// Override the deferred fallback delay.
    #[must_use]
    pub fn with_deferred_delay(mut self, delay: Duration) -> Self {
        self.deferred_delay = delay;
        self
    }

    /// Initial fit on mount: recompute now and arm the deferred fallback
    /// that catches late content the observers miss.
    pub fn mount(&mut self, surface: &mut impl FitSurface, now: Instant) -> Option<f64> {
        let scale = self.refit(surface, RefitTrigger::Mount);
        self.schedule_deferred(now);
        scale
    }

    /// Recompute and apply the scale for one trigger.
    ///
    /// Returns the new scale, or `None` when the refit was skipped: the
    /// trigger's watch bit is cleared, or the surface is missing a node.
    /// Recomputing twice against unchanged measurements yields the same
    /// scale.
    pub fn refit(&mut self, surface: &mut impl FitSurface, trigger: RefitTrigger) -> Option<f64> {
        if let Some(bit) = trigger.watch_bit() {
            if !self.watch.contains(bit) {
                return None;
            }
        }

        surface.reset_scale();
        let container = surface.container_height()?;
        let natural = surface.content_natural_height()?;

        let scale = compute_scale(&self.config, container, natural);
        self.scale = scale;
        surface.apply_scale(scale);
        self.refits += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(?trigger, scale, "refit applied");
        Some(scale)
    }

    /// Arm (or re-arm) the one-shot deferred refit relative to `now`.
    pub fn schedule_deferred(&mut self, now: Instant) {
        self.deferred_at = Some(now + self.deferred_delay);
    }

    /// Fire the deferred refit if its deadline has elapsed.
    ///
    /// Fires at most once per arming; a fired or cancelled deadline stays
    /// disarmed until the next [`schedule_deferred`](Self::schedule_deferred).
    pub fn poll_deferred(&mut self, surface: &mut impl FitSurface, now: Instant) -> Option<f64> {
        match self.deferred_at {
            Some(deadline) if now >= deadline => {
                self.deferred_at = None;
                self.refit(surface, RefitTrigger::Deferred)
            }
            _ => None,
        }
    }

    /// Disarm the deferred refit. Unmount path.
    pub fn cancel_deferred(&mut self) {
        self.deferred_at = None;
    }

    /// Whether a deferred refit is armed.
    #[must_use]
    pub fn deferred_pending(&self) -> bool {
        self.deferred_at.is_some()
    }

    /// The current scale, for the host's render path.
    #[inline]
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Total successful refits (diagnostic).
    #[inline]
    #[must_use]
    pub fn refit_count(&self) -> u64 {
        self.refits
    }

    /// Get a reference to the fit configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FitConfig {
        &self.config
    }
}
