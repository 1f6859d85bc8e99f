#![forbid(unsafe_code)]

//! Disposer registry for platform observers.
//!
//! The scaler's triggers are backed by real platform handles: resize and
//! mutation observers, per-image load listeners, a font-readiness
//! callback, a fallback timer. Each one must be released when the owning
//! view unmounts — a leaked observer fires against a detached element.
//! [`Subscriptions`] tracks one disposer callback per acquired handle and
//! releases them exhaustively, in registration order, exactly once.
//!
//! Dropping an undisposed registry still runs every disposer: cleanup is
//! mandatory, not best-effort.

/// Registry of disposer callbacks, released on [`dispose`] or drop.
///
/// [`dispose`]: Subscriptions::dispose
#[derive(Default)]
pub struct Subscriptions {
    disposers: Vec<Box<dyn FnOnce()>>,
}

impl Subscriptions {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one disposer. It runs exactly once, at dispose or drop.
    pub fn push(&mut self, disposer: impl FnOnce() + 'static) {
        self.disposers.push(Box::new(disposer));
    }

    /// Number of registered, not-yet-run disposers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }

    /// Run every disposer in registration order and consume the registry.
    pub fn dispose(mut self) {
        self.run_all();
    }

    fn run_all(&mut self) {
        for disposer in self.disposers.drain(..) {
            disposer();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.run_all();
    }
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriptions")
            .field("len", &self.disposers.len())
            .finish()
    }
}
