//! Repeating timer with deterministic cancellation.

use std::time::Duration;

use gloo_timers::callback::Interval;

/// A browser interval that is cleared when cancelled or dropped.
pub struct RepeatingTimer {
    period: Duration,
    interval: Option<Interval>,
}

impl RepeatingTimer {
    /// Schedule `callback` every `period`, first firing one period from now.
    pub fn start(period: Duration, callback: impl FnMut() + 'static) -> Self {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Self {
            period,
            interval: Some(Interval::new(millis, callback)),
        }
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&mut self) {
        // Dropping the Interval clears it on the browser side
        if self.interval.take().is_some() {
            log::debug!("⏹️ Timer ({:?}) cancelled", self.period);
        }
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
