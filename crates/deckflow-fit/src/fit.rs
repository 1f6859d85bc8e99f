#![forbid(unsafe_code)]

//! Pure fit computation.
//!
//! Given a container height and the content's natural (unscaled) height,
//! compute the uniform scale that makes the content fit:
//!
//! 1. Content that already fits gets exactly 1.0 — fitting content is
//!    never shrunk, even when a tighter quantized value exists.
//! 2. Otherwise the raw ratio `available / natural` is clamped to
//!    `[min, max]` and quantized *downward* to a multiple of `step`.
//!    Rounding up could violate the fit bound; rounding down never can,
//!    and quantization keeps sub-pixel remeasurement loops from producing
//!    visible jitter.
//!
//! The scale is applied anchored at top-center, so shrinking content
//! recedes toward the top of its container rather than floating mid-air.

/// Configuration for the fit computation.
///
/// Preconditions (documented, not validated): `0 < min <= max`, `step > 0`,
/// and `min` a multiple of `step` (otherwise a clamped-to-min scale floors
/// below `min`). Out-of-range configurations produce unspecified scales.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Lower bound on the applied scale.
    /// Default: 0.80
    pub min: f64,

    /// Upper bound on the applied scale.
    /// Default: 1.0
    pub max: f64,

    /// Quantization step; applied scales are multiples of this.
    /// Default: 0.02
    pub step: f64,

    /// Vertical padding subtracted from the container height before
    /// fitting.
    /// Default: 8.0
    pub padding_px: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            min: 0.80,
            max: 1.0,
            step: 0.02,
            padding_px: 8.0,
        }
    }
}

impl FitConfig {
    /// Override the minimum scale.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Override the container padding.
    #[must_use]
    pub fn with_padding(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }
}

/// Compute the scale for the given measurements.
///
/// `container_height` is the container's full client height; the config's
/// padding is subtracted here. `content_natural_height` must be measured
/// at identity scale.
#[must_use]
pub fn compute_scale(config: &FitConfig, container_height: f64, content_natural_height: f64) -> f64 {
    let available = container_height - config.padding_px;

    if content_natural_height <= available {
        return 1.0;
    }

    let raw = available / content_natural_height;
    let clamped = raw.clamp(config.min, config.max);
    (clamped / config.step).floor() * config.step
}
