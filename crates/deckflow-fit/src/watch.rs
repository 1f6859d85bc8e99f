#![forbid(unsafe_code)]

//! Change sources that trigger a refit.
//!
//! The host installs one observer per enabled [`WatchTriggers`] bit and
//! calls [`AutoFitEngine::refit`] with the matching [`RefitTrigger`] when
//! it fires. A platform lacking a capability (no font-readiness signal on
//! older runtimes, say) clears that bit and skips the observer; the
//! remaining triggers keep the scaler live.
//!
//! [`AutoFitEngine::refit`]: crate::engine::AutoFitEngine::refit

use bitflags::bitflags;

bitflags! {
    /// Set of change sources a host watches for refits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WatchTriggers: u8 {
        /// The container element was resized.
        const CONTAINER_RESIZE = 0b00000001;
        /// The content element was resized.
        const CONTENT_RESIZE   = 0b00000010;
        /// Nodes were added to or removed from the content subtree.
        const SUBTREE_MUTATION = 0b00000100;
        /// An embedded image finished loading.
        const IMAGE_LOAD       = 0b00001000;
        /// The document's fonts finished loading.
        const FONTS_READY      = 0b00010000;
        /// The one-shot delayed fallback shortly after mount.
        const DEFERRED         = 0b00100000;
    }
}

impl Default for WatchTriggers {
    fn default() -> Self {
        Self::all()
    }
}

/// The source of one refit request, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefitTrigger {
    /// Initial computation on mount.
    Mount,
    /// Container resize observer fired.
    ContainerResize,
    /// Content resize observer fired.
    ContentResize,
    /// Content subtree mutated.
    SubtreeMutation,
    /// An embedded image finished loading.
    ImageLoad,
    /// Fonts became ready.
    FontsReady,
    /// The delayed fallback elapsed.
    Deferred,
}

impl RefitTrigger {
    /// The watch bit this trigger belongs to, if it is gated by one.
    ///
    /// [`RefitTrigger::Mount`] is unconditional and has no bit.
    #[must_use]
    pub fn watch_bit(self) -> Option<WatchTriggers> {
        match self {
            Self::Mount => None,
            Self::ContainerResize => Some(WatchTriggers::CONTAINER_RESIZE),
            Self::ContentResize => Some(WatchTriggers::CONTENT_RESIZE),
            Self::SubtreeMutation => Some(WatchTriggers::SUBTREE_MUTATION),
            Self::ImageLoad => Some(WatchTriggers::IMAGE_LOAD),
            Self::FontsReady => Some(WatchTriggers::FONTS_READY),
            Self::Deferred => Some(WatchTriggers::DEFERRED),
        }
    }
}
