//! Window scroll tracking.

use leptos::*;

use crate::state::is_scrolled;
use crate::{AppError, AppResult};

fn scroll_offset() -> AppResult<f64> {
    window()
        .scroll_y()
        .map_err(|e| AppError::Dom(format!("scrollY unavailable: {:?}", e)))
}

/// Track whether the page is scrolled past `threshold_px`.
///
/// The listener is attached to `window` when called and removed when the
/// owning component is cleaned up. The flag stays `false` until the first
/// scroll event arrives.
pub fn track_scroll_past(threshold_px: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = create_signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = match scroll_offset() {
            Ok(offset) => offset,
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };
        let now = is_scrolled(offset, threshold_px);
        // Only notify subscribers on a flip
        if now != scrolled.get_untracked() {
            log::debug!("📜 Scroll flag -> {} (offset {}px)", now, offset);
            set_scrolled.set(now);
        }
    });

    on_cleanup(move || handle.remove());

    scrolled
}
