// Platform audio player trait

use playback_bridge_core::{PlayerActivity, TimeValue};

/// AudioPlayer should be implemented to handle audio output from the engine.
///
/// The engine decides what plays and when; the platform renders it and
/// reports timing back. Transport button presses are not routed through
/// this trait.
///
/// Implementations are called from engine threads, possibly concurrently:
/// an activity notification and a time query may overlap. Keep internal
/// state readable without waiting on the audio thread, for example with a
/// [`PlaybackClock`](playback_bridge_core::PlaybackClock).
pub trait AudioPlayer: Send + Sync {
    /// Notifies the platform implementation of a change in audio playback state.
    ///
    /// Advisory only: update UI, LEDs or logs here. Must return quickly.
    fn player_activity_changed(&self, _state: PlayerActivity) {}

    /// Current playback position.
    ///
    /// If the audio source is not playing, the most recent position played
    /// is returned. `TimeValue::UNKNOWN` if the position is unknown or invalid.
    fn player_position(&self) -> TimeValue {
        TimeValue::UNKNOWN
    }

    /// Playback duration, or `TimeValue::UNKNOWN` for live or not yet
    /// started media.
    fn player_duration(&self) -> TimeValue {
        TimeValue::UNKNOWN
    }
}

impl<T: AudioPlayer + ?Sized> AudioPlayer for Box<T> {
    fn player_activity_changed(&self, state: PlayerActivity) {
        (**self).player_activity_changed(state)
    }

    fn player_position(&self) -> TimeValue {
        (**self).player_position()
    }

    fn player_duration(&self) -> TimeValue {
        (**self).player_duration()
    }
}
