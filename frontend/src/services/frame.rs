//! Animation-frame scheduling.

use leptos::request_animation_frame;

/// Run `f` after `frames` animation frames have gone by.
///
/// With `frames >= 2` the browser has computed and painted the styles the
/// elements were mounted with, so a style change made in `f` transitions
/// from them instead of replacing them.
pub fn after_frames<F>(frames: u32, f: F)
where
    F: FnOnce() + 'static,
{
    match frames.checked_sub(1) {
        None => f(),
        Some(remaining) => request_animation_frame(move || after_frames(remaining, f)),
    }
}
