#![forbid(unsafe_code)]

//! Auto-fit: uniform downscaling of slide content to fit its container.
//!
//! A slide's content block has a natural height that can exceed the
//! viewport-bound container, and that height moves under the host's feet:
//! images decode, web fonts swap in, children get inserted. This crate
//! computes a discrete uniform scale factor that keeps the rendered
//! content inside the container without scroll bars, and keeps the factor
//! stable while the content churns.
//!
//! - [`fit`] — the pure scale computation (clamp + downward quantization).
//! - [`engine`] — [`AutoFitEngine`], which drives recomputation over a
//!   host-implemented [`FitSurface`] and owns the deferred fallback refit.
//! - [`watch`] — the set of change sources a host wires observers for.
//! - [`subscription`] — explicit disposer registry for those observers.
//!
//! [`AutoFitEngine`]: engine::AutoFitEngine
//! [`FitSurface`]: engine::FitSurface

pub mod engine;
pub mod fit;
pub mod subscription;
pub mod watch;

pub use engine::{AutoFitEngine, FitSurface};
pub use fit::{FitConfig, compute_scale};
pub use subscription::Subscriptions;
pub use watch::{RefitTrigger, WatchTriggers};
