#![forbid(unsafe_code)]

//! Deck controller: owns the current-slide index.
//!
//! The controller is the consumer of everything the input pipeline
//! produces: gate steps, navigation keys, deck-level touch swipes,
//! visibility reports from the host's slide tracking, and the autoplay
//! clock. It holds only the index and the two temporal latches (autoplay
//! deadline, touch gesture lock); every side effect leaves as a
//! [`DeckEffect`] value for the host to perform.
//!
//! Slides are 1-based ordinals, matching the `#s1..#sN` anchors a deck
//! page exposes. Navigation outside `1..=total` is ignored, not clamped.

use deckflow_core::event::{KeyCode, KeyEvent};
use deckflow_core::gate::Step;
use std::time::{Duration, Instant};

/// Configuration for the deck controller.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// Number of slides in the deck.
    pub total_slides: usize,

    /// Window after a successful swipe during which further touch input
    /// is ignored, so one flick cannot skip several slides.
    /// Default: 650ms
    pub touch_lock: Duration,

    /// Minimum vertical travel for a touch sequence to count as a swipe.
    /// Default: 30.0
    pub min_swipe_px: f64,

    /// Delay between automatic advances while autoplay is on.
    /// Default: 8s
    pub autoplay_interval: Duration,
}

impl DeckConfig {
    /// Config for a deck of `total_slides` slides, with default timings.
    #[must_use]
    pub fn new(total_slides: usize) -> Self {
        Self {
            total_slides,
            touch_lock: Duration::from_millis(650),
            min_swipe_px: 30.0,
            autoplay_interval: Duration::from_secs(8),
        }
    }
}

/// Side effect the host must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEffect {
    /// Scroll the given slide into view.
    ScrollToSlide(usize),
}

/// Headless deck state: current slide, autoplay, touch swipe handling.
#[derive(Debug, Clone)]
pub struct DeckController {
    config: DeckConfig,

    /// Current slide ordinal, 1-based.
    current: usize,

    /// Whether autoplay is running.
    autoplay: bool,

    /// Deadline of the next automatic advance.
    next_advance_at: Option<Instant>,

    /// Vertical coordinate where the current deck-level touch began.
    touch_start_y: Option<f64>,

    /// Gesture lock deadline after a successful swipe.
    touch_locked_until: Option<Instant>,
}

impl DeckController {
    /// Create a controller positioned on slide 1 with autoplay off.
    #[must_use]
    pub fn new(config: DeckConfig) -> Self {
        Self {
            config,
            current: 1,
            autoplay: false,
            next_advance_at: None,
            touch_start_y: None,
            touch_locked_until: None,
        }
    }

    /// The current slide ordinal (1-based).
    #[inline]
    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current
    }

    /// Whether autoplay is running.
    #[inline]
    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Turn autoplay on or off. Turning it on schedules the next advance
    /// relative to `now`.
    pub fn set_autoplay(&mut self, on: bool, now: Instant) {
        self.autoplay = on;
        self.next_advance_at = on.then(|| now + self.config.autoplay_interval);
    }

    /// Jump to a slide. Out-of-range ordinals are ignored.
    pub fn navigate_to(&mut self, slide: usize) -> Option<DeckEffect> {
        if slide < 1 || slide > self.config.total_slides {
            return None;
        }
        self.current = slide;
        #[cfg(feature = "tracing")]
        tracing::debug!(slide, "navigating");
        Some(DeckEffect::ScrollToSlide(slide))
    }

    /// Apply a step emitted by the wheel gate. Stops autoplay.
    pub fn on_step(&mut self, step: Step) -> Option<DeckEffect> {
        self.stop_autoplay();
        self.navigate_by(step.delta())
    }

    /// Apply a navigation key. Non-navigation keys are ignored; any
    /// navigation key stops autoplay.
    pub fn on_key(&mut self, key: &KeyEvent) -> Option<DeckEffect> {
        let delta = match key.code {
            KeyCode::ArrowDown | KeyCode::ArrowRight | KeyCode::Space => 1,
            KeyCode::ArrowUp | KeyCode::ArrowLeft => -1,
            KeyCode::Char(_) => return None,
        };
        self.stop_autoplay();
        self.navigate_by(delta)
    }

    /// Record the start of a deck-level touch sequence.
    ///
    /// Ignored while the gesture lock is armed.
    pub fn on_touch_start(&mut self, y: f64, now: Instant) {
        if self.touch_locked(now) {
            return;
        }
        self.touch_start_y = Some(y);
    }

    /// Complete a deck-level touch sequence.
    ///
    /// A downward finger travel of at least the configured minimum swipes
    /// to the previous slide; upward travel swipes to the next. Tiny
    /// swipes are ignored. A qualifying swipe stops autoplay and arms the
    /// gesture lock, even at the deck's edges.
    pub fn on_touch_end(&mut self, y: f64, now: Instant) -> Option<DeckEffect> {
        if self.touch_locked(now) {
            return None;
        }
        let start_y = self.touch_start_y.take()?;

        let dy = y - start_y;
        if dy.abs() < self.config.min_swipe_px {
            return None;
        }

        self.stop_autoplay();
        self.touch_locked_until = Some(now + self.config.touch_lock);
        let delta = if dy < 0.0 { 1 } else { -1 };
        self.navigate_by(delta)
    }

    /// Adopt a slide the host observed to be visible (intersection
    /// tracking). Updates the index without emitting a scroll effect.
    pub fn slide_visible(&mut self, slide: usize) {
        if slide >= 1 && slide <= self.config.total_slides {
            self.current = slide;
        }
    }

    /// Drive the autoplay clock.
    ///
    /// When autoplay is on and the interval has elapsed, advances one
    /// slide (wrapping from the last back to the first) and schedules the
    /// next advance. At most one advance per call.
    pub fn tick(&mut self, now: Instant) -> Option<DeckEffect> {
        if !self.autoplay {
            return None;
        }
        let deadline = self.next_advance_at?;
        if now < deadline {
            return None;
        }
        self.next_advance_at = Some(now + self.config.autoplay_interval);

        let next = if self.current >= self.config.total_slides {
            1
        } else {
            self.current + 1
        };
        self.navigate_to(next)
    }

    /// Whether the touch gesture lock is armed at `now`.
    #[must_use]
    pub fn touch_locked(&self, now: Instant) -> bool {
        matches!(self.touch_locked_until, Some(until) if now < until)
    }

    /// Get a reference to the configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    fn navigate_by(&mut self, delta: i32) -> Option<DeckEffect> {
        let target = self.current as i64 + i64::from(delta);
        if target < 1 {
            return None;
        }
        self.navigate_to(target as usize)
    }

    fn stop_autoplay(&mut self) {
        self.autoplay = false;
        self.next_advance_at = None;
    }
}

/// Parse a `#sN` deep-link fragment into a slide ordinal.
///
/// Only in-range ordinals parse; anything else is `None`.
#[must_use]
pub fn parse_slide_hash(hash: &str, total_slides: usize) -> Option<usize> {
    let ordinal: usize = hash.strip_prefix("#s")?.parse().ok()?;
    (1..=total_slides).contains(&ordinal).then_some(ordinal)
}

/// The `#sN` fragment for a slide ordinal.
#[must_use]
pub fn slide_hash(slide: usize) -> String {
    format!("#s{slide}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckflow_core::event::Modifiers;

    fn controller() -> DeckController {
        DeckController::new(DeckConfig::new(10))
    }

    fn t0() -> Instant {
        Instant::now()
    }

    // --- Navigation tests ---

    #[test]
    fn starts_on_slide_one() {
        let c = controller();
        assert_eq!(c.current_slide(), 1);
        assert!(!c.autoplay());
    }

    #[test]
    fn step_next_advances_and_emits_scroll() {
        let mut c = controller();
        assert_eq!(c.on_step(Step::Next), Some(DeckEffect::ScrollToSlide(2)));
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn step_prev_on_first_slide_is_ignored() {
        let mut c = controller();
        assert_eq!(c.on_step(Step::Prev), None);
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn step_next_on_last_slide_is_ignored() {
        let mut c = controller();
        c.navigate_to(10);
        assert_eq!(c.on_step(Step::Next), None);
        assert_eq!(c.current_slide(), 10);
    }

    #[test]
    fn out_of_range_navigation_is_ignored() {
        let mut c = controller();
        assert_eq!(c.navigate_to(0), None);
        assert_eq!(c.navigate_to(11), None);
        assert_eq!(c.current_slide(), 1);
    }

    // --- Keyboard tests ---

    #[test]
    fn forward_keys_advance() {
        for code in [KeyCode::ArrowDown, KeyCode::ArrowRight, KeyCode::Space] {
            let mut c = controller();
            let fx = c.on_key(&KeyEvent::new(code));
            assert_eq!(fx, Some(DeckEffect::ScrollToSlide(2)), "{code:?}");
        }
    }

    #[test]
    fn backward_keys_retreat() {
        let mut c = controller();
        c.navigate_to(5);
        assert_eq!(
            c.on_key(&KeyEvent::new(KeyCode::ArrowUp)),
            Some(DeckEffect::ScrollToSlide(4))
        );
        assert_eq!(
            c.on_key(&KeyEvent::new(KeyCode::ArrowLeft)),
            Some(DeckEffect::ScrollToSlide(3))
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut c = controller();
        let key = KeyEvent::new(KeyCode::Char('x')).with_modifiers(Modifiers::CTRL);
        assert_eq!(c.on_key(&key), None);
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn navigation_key_stops_autoplay() {
        let mut c = controller();
        c.set_autoplay(true, t0());
        c.on_key(&KeyEvent::new(KeyCode::ArrowDown));
        assert!(!c.autoplay());
    }

    // --- Touch swipe tests ---

    #[test]
    fn swipe_up_goes_next() {
        let mut c = controller();
        let now = t0();
        c.on_touch_start(500.0, now);
        // Finger travels 80px upward.
        assert_eq!(
            c.on_touch_end(420.0, now),
            Some(DeckEffect::ScrollToSlide(2))
        );
    }

    #[test]
    fn swipe_down_goes_prev() {
        let mut c = controller();
        c.navigate_to(3);
        let now = t0();
        c.on_touch_start(200.0, now);
        assert_eq!(
            c.on_touch_end(300.0, now),
            Some(DeckEffect::ScrollToSlide(2))
        );
    }

    #[test]
    fn tiny_swipe_is_ignored() {
        let mut c = controller();
        let now = t0();
        c.on_touch_start(500.0, now);
        assert_eq!(c.on_touch_end(480.0, now), None);
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn gesture_lock_swallows_second_swipe() {
        let mut c = controller();
        let now = t0();

        c.on_touch_start(500.0, now);
        c.on_touch_end(400.0, now);
        assert_eq!(c.current_slide(), 2);

        // Second flick 200ms later: inside the 650ms lock.
        let later = now + Duration::from_millis(200);
        c.on_touch_start(500.0, later);
        assert_eq!(c.on_touch_end(400.0, later), None);
        assert_eq!(c.current_slide(), 2);

        // After the lock expires, swipes work again.
        let after = now + Duration::from_millis(700);
        c.on_touch_start(500.0, after);
        assert_eq!(
            c.on_touch_end(400.0, after),
            Some(DeckEffect::ScrollToSlide(3))
        );
    }

    #[test]
    fn edge_swipe_still_arms_the_lock() {
        let mut c = controller();
        let now = t0();

        // Swipe down on slide 1: no navigation, but the gesture counted.
        c.on_touch_start(200.0, now);
        assert_eq!(c.on_touch_end(300.0, now), None);
        assert!(c.touch_locked(now + Duration::from_millis(100)));
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut c = controller();
        assert_eq!(c.on_touch_end(100.0, t0()), None);
    }

    // --- Autoplay tests ---

    #[test]
    fn autoplay_advances_after_interval() {
        let mut c = controller();
        let now = t0();
        c.set_autoplay(true, now);

        assert_eq!(c.tick(now + Duration::from_secs(4)), None);
        assert_eq!(
            c.tick(now + Duration::from_secs(8)),
            Some(DeckEffect::ScrollToSlide(2))
        );
    }

    #[test]
    fn autoplay_wraps_to_first_slide() {
        let mut c = controller();
        let now = t0();
        c.navigate_to(10);
        c.set_autoplay(true, now);

        assert_eq!(
            c.tick(now + Duration::from_secs(8)),
            Some(DeckEffect::ScrollToSlide(1))
        );
        assert!(c.autoplay(), "wrap-around must not stop autoplay");
    }

    #[test]
    fn tick_without_autoplay_does_nothing() {
        let mut c = controller();
        assert_eq!(c.tick(t0() + Duration::from_secs(60)), None);
    }

    #[test]
    fn one_advance_per_tick_call() {
        let mut c = controller();
        let now = t0();
        c.set_autoplay(true, now);

        // Even far past several intervals, a single tick advances once.
        let fx = c.tick(now + Duration::from_secs(40));
        assert_eq!(fx, Some(DeckEffect::ScrollToSlide(2)));
        assert_eq!(c.current_slide(), 2);
    }

    // --- Visibility tracking tests ---

    #[test]
    fn visible_slide_is_adopted_without_effect() {
        let mut c = controller();
        c.slide_visible(4);
        assert_eq!(c.current_slide(), 4);
    }

    #[test]
    fn out_of_range_visibility_is_ignored() {
        let mut c = controller();
        c.slide_visible(0);
        c.slide_visible(99);
        assert_eq!(c.current_slide(), 1);
    }

    // --- Deep link tests ---

    #[test]
    fn hash_roundtrip() {
        assert_eq!(parse_slide_hash("#s7", 10), Some(7));
        assert_eq!(slide_hash(7), "#s7");
    }

    #[test]
    fn malformed_or_out_of_range_hashes_reject() {
        assert_eq!(parse_slide_hash("#s0", 10), None);
        assert_eq!(parse_slide_hash("#s11", 10), None);
        assert_eq!(parse_slide_hash("#slide3", 10), None);
        assert_eq!(parse_slide_hash("s3", 10), None);
        assert_eq!(parse_slide_hash("", 10), None);
        assert_eq!(parse_slide_hash("#s-1", 10), None);
    }
}
