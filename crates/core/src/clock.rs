// Lock-free playback time snapshot for platform renderers
// Queries run on engine threads and must never wait on the audio thread

use crate::state::PlayerActivity;
use crate::time::{TimeValue, TIME_UNKNOWN};
use std::sync::atomic::{AtomicI64, AtomicU8, Ordering};

/// Last known position and duration of the platform renderer.
///
/// The audio thread stores progress as it renders; the bridge reads it
/// from any thread. Position only moves while the engine-declared activity
/// is active, so after a pause or stop queries return the most recent
/// position played.
#[derive(Debug)]
pub struct PlaybackClock {
    position_ms: AtomicI64,
    duration_ms: AtomicI64,
    activity: AtomicU8,
}

impl PlaybackClock {
    pub const fn new() -> Self {
        Self {
            position_ms: AtomicI64::new(TIME_UNKNOWN),
            duration_ms: AtomicI64::new(TIME_UNKNOWN),
            activity: AtomicU8::new(PlayerActivity::Idle.to_u8()),
        }
    }

    pub fn position(&self) -> TimeValue {
        TimeValue::from_raw(self.position_ms.load(Ordering::Acquire))
    }

    pub fn duration(&self) -> TimeValue {
        TimeValue::from_raw(self.duration_ms.load(Ordering::Acquire))
    }

    pub fn activity(&self) -> PlayerActivity {
        PlayerActivity::from_u8(self.activity.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Mirror the activity the engine declared
    pub fn set_activity(&self, activity: PlayerActivity) {
        self.activity.store(activity.to_u8(), Ordering::Release);
    }

    pub fn set_position(&self, position: TimeValue) {
        self.position_ms.store(position.as_millis(), Ordering::Release);
    }

    /// Unknown for live or indeterminate streams
    pub fn set_duration(&self, duration: TimeValue) {
        self.duration_ms.store(duration.as_millis(), Ordering::Release);
    }

    /// Move the position forward by rendered time.
    ///
    /// Ignored unless the current activity is active; late ticks from the
    /// audio thread after a pause must not move the last known position.
    /// An unknown position starts counting from zero.
    pub fn advance(&self, elapsed_ms: u64) {
        if !self.activity().is_active() {
            return;
        }
        let elapsed = i64::try_from(elapsed_ms).unwrap_or(i64::MAX);
        let _ = self
            .position_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(current.max(0).saturating_add(elapsed))
            });
    }

    /// Forget position and duration, e.g. when new media is loaded
    pub fn reset(&self) {
        self.position_ms.store(TIME_UNKNOWN, Ordering::Release);
        self.duration_ms.store(TIME_UNKNOWN, Ordering::Release);
        log::trace!("Playback clock reset");
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
