#![forbid(unsafe_code)]

//! Deckflow public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for hosts. It
//! re-exports the input pipeline from `deckflow-core` and the auto-fit
//! engine from `deckflow-fit`, and adds the [`DeckController`] that owns
//! the current-slide index.
//!
//! # Wiring
//!
//! ```
//! use deckflow::prelude::*;
//! use std::time::Instant;
//!
//! let mut chain = InterceptorChain::standard(GateConfig::default());
//! let mut deck = DeckController::new(DeckConfig::new(12));
//!
//! // One mouse notch on the deck surface.
//! let event = DeckEvent::Wheel {
//!     wheel: WheelEvent::lines(1.0),
//!     extent: None,
//! };
//! let outcome = chain.dispatch(&event, Instant::now());
//! if let Some(step) = outcome.step {
//!     assert_eq!(deck.on_step(step), Some(DeckEffect::ScrollToSlide(2)));
//! }
//! ```

pub mod controller;

// --- Core re-exports -------------------------------------------------------

pub use deckflow_core::event::{
    DeckEvent, KeyCode, KeyEvent, LINE_HEIGHT_PX, Modifiers, TouchEvent, WheelDeltaMode,
    WheelEvent,
};
pub use deckflow_core::extent::ScrollExtent;
pub use deckflow_core::gate::{GateConfig, Step, WheelGate};
pub use deckflow_core::guard::{GuardVerdict, ScrollGuard};
pub use deckflow_core::intercept::{
    ChainOutcome, Disposition, EventFate, GateInterceptor, GuardInterceptor, Interceptor,
    InterceptorChain,
};

// --- Fit re-exports --------------------------------------------------------

pub use deckflow_fit::engine::{AutoFitEngine, DEFAULT_DEFERRED_DELAY, FitSurface};
pub use deckflow_fit::fit::{FitConfig, compute_scale};
pub use deckflow_fit::subscription::Subscriptions;
pub use deckflow_fit::watch::{RefitTrigger, WatchTriggers};

// --- Controller re-exports -------------------------------------------------

pub use controller::{DeckConfig, DeckController, DeckEffect, parse_slide_hash, slide_hash};

/// Commonly used types for day-to-day hosting.
pub mod prelude {
    pub use crate::controller::{DeckConfig, DeckController, DeckEffect};
    pub use deckflow_core::event::{DeckEvent, KeyEvent, TouchEvent, WheelEvent};
    pub use deckflow_core::extent::ScrollExtent;
    pub use deckflow_core::gate::{GateConfig, Step};
    pub use deckflow_core::intercept::{EventFate, InterceptorChain};
    pub use deckflow_fit::engine::{AutoFitEngine, FitSurface};
    pub use deckflow_fit::fit::FitConfig;
}
