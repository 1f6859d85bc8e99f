#![forbid(unsafe_code)]

//! Core: canonical input events, scroll extents, and gesture gating.

pub mod event;
pub mod extent;
pub mod gate;
pub mod guard;
pub mod intercept;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn, warn_span};
