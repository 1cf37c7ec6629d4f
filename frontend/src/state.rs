//! Per-component view state.
//!
//! Each component owns exactly one of these values inside a signal. They are
//! plain data with no browser dependency so the transition rules can be
//! exercised natively.
//!
//! - [`Carousel`] - hero slide rotation
//! - [`MenuState`] - mobile menu toggle
//! - [`RevealLatch`] - one-shot viewport reveal
//! - [`is_scrolled`] - navbar scroll flag

use std::time::Duration;

// =============================================================================
// Carousel
// =============================================================================

/// Index of the displayed hero slide plus the autoplay phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    period: Duration,
    /// Time accumulated since the last advance or manual selection.
    phase: Duration,
}

impl Carousel {
    /// Create a carousel over `len` slides, starting at slide 0.
    ///
    /// A zero-length carousel is treated as a single slide so the index
    /// arithmetic stays total.
    pub fn new(len: usize, period: Duration) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            period,
            phase: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Move to the next slide, wrapping after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Jump straight to `index` and restart the autoplay phase.
    ///
    /// Returns `false` (and leaves the state untouched) when `index` is out
    /// of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.phase = Duration::ZERO;
        true
    }

    /// Let `elapsed` time pass, advancing once per full period.
    ///
    /// Returns the number of advances performed.
    pub fn elapse(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.phase += elapsed;
        let mut advanced = 0;
        while self.phase >= self.period {
            self.phase -= self.period;
            self.advance();
            advanced += 1;
        }
        advanced
    }
}

// =============================================================================
// Mobile menu
// =============================================================================

/// Open/closed state of the stacked mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu, e.g. after one of its links was followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

// =============================================================================
// Scroll flag
// =============================================================================

/// Whether the page counts as scrolled for a given vertical offset.
///
/// Strictly greater than: sitting exactly on the threshold is still "top".
pub fn is_scrolled(offset_px: f64, threshold_px: f64) -> bool {
    offset_px > threshold_px
}

// =============================================================================
// Reveal latch
// =============================================================================

/// One-shot visibility latch.
///
/// Trips the first time an observation reports the element intersecting with
/// at least `threshold` of its area visible, then stays tripped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection observation.
    ///
    /// Returns `true` only for the observation that trips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(5_000);

    #[test]
    fn test_carousel_starts_at_zero() {
        let carousel = Carousel::new(4, PERIOD);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn test_carousel_wraps_after_n_ticks() {
        let mut carousel = Carousel::new(4, PERIOD);
        for ticks in 1..=9 {
            carousel.advance();
            assert_eq!(carousel.index(), ticks % 4);
        }
    }

    #[test]
    fn test_carousel_wraps_from_selected_slide() {
        let mut carousel = Carousel::new(4, PERIOD);
        assert!(carousel.select(2));
        for ticks in 1..=9 {
            assert_eq!(carousel.elapse(PERIOD), 1);
            assert_eq!(carousel.index(), (2 + ticks) % 4);
        }
    }

    #[test]
    fn test_carousel_fifteen_seconds_reaches_slide_three() {
        let mut carousel = Carousel::new(4, PERIOD);
        let advanced = carousel.elapse(Duration::from_millis(15_000));
        assert_eq!(advanced, 3);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_carousel_partial_period_carries_over() {
        let mut carousel = Carousel::new(4, PERIOD);
        assert_eq!(carousel.elapse(Duration::from_millis(4_999)), 0);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.elapse(Duration::from_millis(1)), 1);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_carousel_select_sets_index_and_resets_phase() {
        let mut carousel = Carousel::new(4, PERIOD);
        carousel.elapse(Duration::from_millis(4_000));
        assert!(carousel.select(2));
        assert_eq!(carousel.index(), 2);

        // The selected slide gets a full period before moving on.
        assert_eq!(carousel.elapse(Duration::from_millis(4_000)), 0);
        assert_eq!(carousel.index(), 2);
        carousel.elapse(Duration::from_millis(1_000));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_carousel_select_every_slide() {
        let mut carousel = Carousel::new(4, PERIOD);
        for k in [3, 0, 2, 1] {
            assert!(carousel.select(k));
            assert_eq!(carousel.index(), k);
        }
    }

    #[test]
    fn test_carousel_select_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(4, PERIOD);
        carousel.advance();
        assert!(!carousel.select(4));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_carousel_zero_period_never_advances() {
        let mut carousel = Carousel::new(4, Duration::ZERO);
        assert_eq!(carousel.elapse(Duration::from_secs(60)), 0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_carousel_empty_behaves_as_single_slide() {
        let mut carousel = Carousel::new(0, PERIOD);
        assert_eq!(carousel.elapse(Duration::from_millis(10_000)), 2);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.select(1));
    }

    #[test]
    fn test_menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        // Closing an already closed menu is a no-op.
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0, 10.0));
        assert!(!is_scrolled(10.0, 10.0));
        assert!(is_scrolled(10.5, 10.0));
        assert!(is_scrolled(800.0, 10.0));
        // Scrolling back up clears the flag.
        assert!(!is_scrolled(3.0, 10.0));
    }

    #[test]
    fn test_reveal_latch_trips_once() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.is_revealed());

        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 0.05));
        assert!(latch.observe(true, 0.1));
        assert!(latch.is_revealed());

        // Leaving and re-entering the viewport never fires again.
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 0.8));
        assert!(latch.is_revealed());
    }
}
