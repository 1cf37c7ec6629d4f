//! Application configuration.
//!
//! Centralized configuration for the Project02 landing page.
//! Everything here is a compile-time constant; the page has no runtime
//! configuration source.

use std::time::Duration;

/// Brand name shown in the navbar, headings and document title.
pub const APP_NAME: &str = "Project02";

/// Brand logo, served from the static asset directory.
pub const LOGO_PATH: &str = "/favicon.png";

/// Console log level for the WASM build.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Vertical scroll offset (in CSS pixels) past which the navbar turns solid.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Autoplay period of the hero carousel.
///
/// 5 seconds per slide.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(5_000);

/// Animation frames to wait after mounting before starting entrance
/// transitions. The hidden start style has to be painted first.
pub const ENTRANCE_SETTLE_FRAMES: u32 = 2;

/// Fraction of a section that must be visible before it reveals itself.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay added per list position for staggered entrance animations.
pub const STAGGER_STEP_MS: u32 = 100;

/// Cross-fade duration between carousel slides.
pub const SLIDE_TRANSITION_MS: u32 = 800;

/// Open/close duration of the mobile menu.
pub const MENU_TRANSITION_MS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_threshold_is_a_fraction() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    }

    #[test]
    fn test_entrance_waits_for_painted_start_style() {
        // One frame only reaches the first style recalc, which already sees
        // the final style.
        assert!(ENTRANCE_SETTLE_FRAMES >= 2);
    }

    #[test]
    fn test_slide_transition_shorter_than_period() {
        // A slide must finish fading in before the next one starts.
        assert!(u128::from(SLIDE_TRANSITION_MS) < CAROUSEL_INTERVAL.as_millis());
    }
}
