// Throttling of high-frequency progress reports toward the engine

use parking_lot::Mutex;
use playback_bridge_core::PlaybackEvent;
use std::time::{Duration, Instant};

/// Lets at most one progress report through per interval.
/// Every other event passes unthrottled.
pub(crate) struct ProgressThrottle {
    last_report: Mutex<Option<Instant>>,
    interval: Duration,
}

impl ProgressThrottle {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            last_report: Mutex::new(None),
            interval,
        }
    }

    pub(crate) fn admit(&self, event: &PlaybackEvent) -> bool {
        if !event.is_progress() {
            return true;
        }

        let mut last_report = self.last_report.lock();
        match *last_report {
            Some(at) if at.elapsed() < self.interval => false,
            _ => {
                *last_report = Some(Instant::now());
                true
            }
        }
    }
}
