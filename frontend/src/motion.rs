//! State-to-style functions for the page's transitions.
//!
//! Components never animate imperatively. They derive a [`Motion`] (or a
//! class string) from their current state and let CSS transitions
//! interpolate between the old and new inline styles.

use std::fmt::Write;

use crate::config::{MENU_TRANSITION_MS, SLIDE_TRANSITION_MS, STAGGER_STEP_MS};

/// CSS timing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Target visual state of an element plus how to transition into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub opacity: f64,
    pub scale: f64,
    /// Vertical offset in pixels (positive = pushed down).
    pub translate_y: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate_y: 0.0,
            duration_ms: 0,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }
}

impl Motion {
    /// Render as an inline `style` attribute value.
    pub fn to_style(&self) -> String {
        let mut style = format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y, self.scale
        );
        if self.duration_ms > 0 {
            let ease = self.easing.css();
            let _ = write!(
                style,
                " transition: opacity {d}ms {ease} {delay}ms, transform {d}ms {ease} {delay}ms;",
                d = self.duration_ms,
                delay = self.delay_ms,
            );
        }
        style
    }
}

/// Carousel slide: the active slide is fully shown, the others fade out and
/// shrink slightly.
pub fn slide(is_active: bool) -> Motion {
    Motion {
        opacity: if is_active { 1.0 } else { 0.0 },
        scale: if is_active { 1.0 } else { 0.95 },
        duration_ms: SLIDE_TRANSITION_MS,
        easing: Easing::EaseInOut,
        ..Motion::default()
    }
}

/// Fade-up entrance: hidden and pushed down by `offset_y` until `shown`.
pub fn reveal(shown: bool, offset_y: f64, duration_ms: u32, delay_ms: u32) -> Motion {
    Motion {
        opacity: if shown { 1.0 } else { 0.0 },
        translate_y: if shown { 0.0 } else { offset_y },
        duration_ms,
        delay_ms,
        ..Motion::default()
    }
}

/// Plain fade, no movement.
pub fn fade(shown: bool, duration_ms: u32, delay_ms: u32) -> Motion {
    reveal(shown, 0.0, duration_ms, delay_ms)
}

/// Entrance delay for the `index`-th item of a staggered list.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
}

/// Inline style of the collapsible mobile menu.
pub fn collapse(open: bool) -> String {
    let (max_height, opacity, visibility) = if open {
        ("24rem", 1, "visible")
    } else {
        ("0px", 0, "hidden")
    };
    format!(
        "max-height: {max_height}; opacity: {opacity}; visibility: {visibility}; overflow: hidden; \
         transition: max-height {MENU_TRANSITION_MS}ms ease-out, opacity {MENU_TRANSITION_MS}ms ease-out, \
         visibility {MENU_TRANSITION_MS}ms;"
    )
}

/// Navbar classes: solid and blurred once the page is scrolled.
pub fn navbar_class(scrolled: bool) -> String {
    let variant = if scrolled {
        "bg-gray-900/90 backdrop-blur-md py-2"
    } else {
        "bg-transparent py-4"
    };
    format!("fixed w-full z-50 transition-all duration-300 {variant}")
}

/// Carousel indicator classes: the active dot is stretched into a pill.
pub fn indicator_class(is_active: bool) -> &'static str {
    if is_active {
        "h-3 rounded-full transition-all bg-white w-6"
    } else {
        "h-3 rounded-full transition-all bg-white/50 w-3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_slide_is_fully_visible() {
        let motion = slide(true);
        assert_eq!(motion.opacity, 1.0);
        assert_eq!(motion.scale, 1.0);
        let style = motion.to_style();
        assert!(style.starts_with("opacity: 1; transform: translateY(0px) scale(1);"));
        assert!(style.contains("opacity 800ms ease-in-out 0ms"));
    }

    #[test]
    fn test_inactive_slide_is_hidden_and_shrunk() {
        let style = slide(false).to_style();
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("scale(0.95)"));
    }

    #[test]
    fn test_reveal_before_and_after() {
        let hidden = reveal(false, 50.0, 500, 200);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.translate_y, 50.0);

        let shown = reveal(true, 50.0, 500, 200);
        assert_eq!(shown.opacity, 1.0);
        assert_eq!(shown.translate_y, 0.0);
        assert!(shown.to_style().contains("transform 500ms ease-out 200ms"));
    }

    #[test]
    fn test_zero_duration_has_no_transition() {
        let style = Motion::default().to_style();
        assert!(!style.contains("transition"));
    }

    #[test]
    fn test_stagger_is_proportional_to_position() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(3), 300);
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_collapse_styles() {
        let closed = collapse(false);
        assert!(closed.contains("max-height: 0px"));
        assert!(closed.contains("visibility: hidden"));

        let open = collapse(true);
        assert!(open.contains("opacity: 1"));
        assert!(open.contains("300ms"));
    }

    #[test]
    fn test_navbar_class_follows_scroll_flag() {
        assert!(navbar_class(false).contains("bg-transparent py-4"));
        let scrolled = navbar_class(true);
        assert!(scrolled.contains("backdrop-blur-md"));
        assert!(scrolled.starts_with("fixed w-full z-50"));
    }

    #[test]
    fn test_indicator_class() {
        assert!(indicator_class(true).contains("w-6"));
        assert!(indicator_class(false).contains("bg-white/50"));
    }
}
