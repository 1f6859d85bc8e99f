#![forbid(unsafe_code)]

//! Scroll extent of a scrollable region.
//!
//! [`ScrollExtent`] is a point-in-time measurement, not a handle: region
//! content can change between events, so the host must sample a fresh
//! extent for every event it routes. The guard never caches one.

/// Point-in-time scroll measurements of a scrollable region, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollExtent {
    /// Current scroll offset from the top.
    pub scroll_top: f64,
    /// Visible height of the region.
    pub client_height: f64,
    /// Total height of the region's content.
    pub scroll_height: f64,
}

impl ScrollExtent {
    /// Create an extent from raw measurements.
    #[must_use]
    pub const fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Whether the region is scrolled to its top boundary.
    #[must_use]
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    /// Whether the region is scrolled to its bottom boundary.
    ///
    /// Uses a ceiling on the bottom edge so fractional scroll positions on
    /// high-DPI surfaces still register as "at bottom".
    #[must_use]
    pub fn at_bottom(&self) -> bool {
        (self.scroll_top + self.client_height).ceil() >= self.scroll_height
    }

    /// Whether the region can absorb a vertical scroll of `delta_y` pixels.
    ///
    /// Negative deltas scroll up (allowed unless at the top), positive
    /// deltas scroll down (allowed unless at the bottom). A zero delta
    /// never scrolls.
    #[must_use]
    pub fn can_scroll(&self, delta_y: f64) -> bool {
        if delta_y < 0.0 {
            !self.at_top()
        } else if delta_y > 0.0 {
            !self.at_bottom()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_top_when_scroll_top_zero_or_negative() {
        assert!(ScrollExtent::new(0.0, 100.0, 500.0).at_top());
        // Overscroll bounce can report negative offsets.
        assert!(ScrollExtent::new(-4.0, 100.0, 500.0).at_top());
        assert!(!ScrollExtent::new(1.0, 100.0, 500.0).at_top());
    }

    #[test]
    fn at_bottom_uses_ceiling() {
        assert!(ScrollExtent::new(400.0, 100.0, 500.0).at_bottom());
        // 399.2 + 100 = 499.2, ceil = 500 >= 500.
        assert!(ScrollExtent::new(399.2, 100.0, 500.0).at_bottom());
        assert!(!ScrollExtent::new(398.0, 100.0, 500.0).at_bottom());
    }

    #[test]
    fn boundary_rules_from_midpoint() {
        let mid = ScrollExtent::new(200.0, 100.0, 500.0);
        assert!(mid.can_scroll(-10.0));
        assert!(mid.can_scroll(10.0));
        assert!(!mid.can_scroll(0.0));
    }

    #[test]
    fn blocked_at_top_and_bottom() {
        let top = ScrollExtent::new(0.0, 100.0, 500.0);
        assert!(!top.can_scroll(-10.0));
        assert!(top.can_scroll(10.0));

        let bottom = ScrollExtent::new(400.0, 100.0, 500.0);
        assert!(bottom.can_scroll(-10.0));
        assert!(!bottom.can_scroll(10.0));
    }

    #[test]
    fn unscrollable_region_blocks_both_directions() {
        // Content no taller than the viewport: at top and at bottom at once.
        let flat = ScrollExtent::new(0.0, 100.0, 100.0);
        assert!(!flat.can_scroll(-10.0));
        assert!(!flat.can_scroll(10.0));
    }
}
