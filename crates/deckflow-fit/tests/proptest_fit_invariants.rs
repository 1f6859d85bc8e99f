//! Property-based invariant tests for the fit computation.
//!
//! These tests verify the guarantees that must hold for any measurement:
//!
//! 1. Content that fits gets exactly 1.0, whatever the config.
//! 2. Overflowing content gets a scale in `[min, max]`, a multiple of
//!    `step` within floating tolerance.
//! 3. The fit bound holds whenever the clamp is not binding:
//!    `scale * natural <= available`.
//! 4. Recomputation is idempotent.
//! 5. The scale never increases when natural height grows.

use deckflow_fit::fit::{FitConfig, compute_scale};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Default config without padding, so `container == available`.
fn config() -> FitConfig {
    FitConfig {
        padding_px: 0.0,
        ..FitConfig::default()
    }
}

fn heights() -> impl Strategy<Value = (f64, f64)> {
    (50.0..2000.0f64, 1.0..4000.0f64)
}

const TOL: f64 = 1e-6;

// ═════════════════════════════════════════════════════════════════════════
// 1. Fitting content keeps identity scale
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fitting_content_is_identity((container, frac) in (50.0..2000.0f64, 0.0..1.0f64)) {
        let natural = container * frac;
        prop_assert_eq!(compute_scale(&config(), container, natural), 1.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Overflow scale is bounded and quantized
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn overflow_scale_bounded_and_quantized((container, natural) in heights()) {
        let cfg = config();
        let scale = compute_scale(&cfg, container, natural);

        if natural > container {
            prop_assert!(scale >= cfg.min - TOL, "scale={scale}");
            prop_assert!(scale <= cfg.max + TOL, "scale={scale}");

            let steps = scale / cfg.step;
            prop_assert!(
                (steps - steps.round()).abs() < TOL,
                "scale {} not a multiple of {}", scale, cfg.step
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Fit bound when the min clamp is not binding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fit_bound_holds_above_min((container, natural) in heights()) {
        let cfg = config();
        let scale = compute_scale(&cfg, container, natural);

        let raw = container / natural;
        if natural > container && raw >= cfg.min {
            // Downward quantization can only tighten the bound.
            prop_assert!(
                scale * natural <= container * (1.0 + TOL),
                "scale={} natural={} container={}", scale, natural, container
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn recomputation_is_idempotent((container, natural) in heights()) {
        let cfg = config();
        let a = compute_scale(&cfg, container, natural);
        let b = compute_scale(&cfg, container, natural);
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Monotonicity in natural height
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn growing_content_never_raises_the_scale(
        container in 50.0..2000.0f64,
        natural in 1.0..4000.0f64,
        growth in 0.0..500.0f64
    ) {
        let cfg = config();
        let before = compute_scale(&cfg, container, natural);
        let after = compute_scale(&cfg, container, natural + growth);
        prop_assert!(after <= before + TOL);
    }
}
