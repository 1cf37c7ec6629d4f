//! Viewport visibility observation built on `IntersectionObserver`.

use js_sys::Array;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::RevealLatch;
use crate::{AppError, AppResult};

type EntriesCallback = dyn FnMut(Array, IntersectionObserver);

/// Watches one element and reports every threshold crossing.
///
/// The observer is disconnected when this value is dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    // Must outlive the observer, which only holds a JS reference to it
    _callback: Closure<EntriesCallback>,
}

impl VisibilityObserver {
    /// Start observing `target`.
    ///
    /// `on_entry` receives `(is_intersecting, intersection_ratio, observer)`
    /// each time the visible fraction crosses `threshold`.
    pub fn observe<F>(target: &Element, threshold: f64, mut on_entry: F) -> AppResult<Self>
    where
        F: FnMut(bool, f64, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(entry.is_intersecting(), entry.intersection_ratio(), &observer);
                    }
                }
            },
        ) as Box<EntriesCallback>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| AppError::Observer(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Reveal a section the first time it scrolls into view.
///
/// Returns a flag that flips to `true` once at least `threshold` of the
/// section is visible and never flips back. The observer stops watching as
/// soon as it fires and is released with the owning component. If the
/// browser cannot observe the section it is revealed right away.
pub fn reveal_once(section: NodeRef<html::Section>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = create_signal(false);
    let observer = store_value(None::<VisibilityObserver>);

    section.on_load(move |el| {
        let mut latch = RevealLatch::new(threshold);
        let on_entry = move |intersecting: bool, ratio: f64, obs: &IntersectionObserver| {
            if latch.observe(intersecting, ratio) {
                log::debug!("👀 Section revealed at {:.0}% visibility", ratio * 100.0);
                obs.disconnect();
                set_revealed.set(true);
            }
        };
        let watched = VisibilityObserver::observe(&el, threshold, on_entry);

        match watched {
            Ok(watched) => observer.set_value(Some(watched)),
            Err(e) => {
                log::warn!("{} - revealing section without animation", e);
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|watched| drop(watched.take()));
    });

    revealed
}
