// Platform-facing audio player bridge

use crate::config::BridgeConfig;
use crate::engine::{AudioPlayerEngineInterface, EngineChannel};
use crate::player::AudioPlayer;
use crate::throttle::ProgressThrottle;
use playback_bridge_core::{PlaybackEvent, PlayerActivity, TimeValue};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Weak;

/// Connects one platform audio output to the engine.
///
/// The engine pushes activity changes in and pulls playback times out;
/// the platform can raise playback events back toward the engine. The
/// activity is mirrored as declared and never validated here: any value
/// may follow any other.
///
/// Dropping the bridge does not notify the engine.
pub struct AudioPlayerBridge<P: AudioPlayer> {
    platform: P,
    engine: EngineChannel,
    activity: AtomicU8,
    throttle: ProgressThrottle,
    config: BridgeConfig,
}

impl<P: AudioPlayer> AudioPlayerBridge<P> {
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, BridgeConfig::default())
    }

    pub fn with_config(platform: P, config: BridgeConfig) -> Self {
        Self {
            platform,
            engine: EngineChannel::new(),
            activity: AtomicU8::new(PlayerActivity::Idle.to_u8()),
            throttle: ProgressThrottle::new(config.position_report_interval),
            config,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Entry point for engine activity notifications.
    ///
    /// Runs the platform hook on the calling thread. A panic in the hook is
    /// logged and swallowed so it never unwinds into the engine.
    pub fn player_activity_changed(&self, state: PlayerActivity) {
        let previous = self.activity.swap(state.to_u8(), Ordering::AcqRel);
        log::debug!(
            "Player activity changed: {} -> {}",
            PlayerActivity::from_u8(previous).unwrap_or_default(),
            state
        );

        let result = catch_unwind(AssertUnwindSafe(|| {
            self.platform.player_activity_changed(state)
        }));
        if result.is_err() {
            log::error!("Platform handler panicked while handling activity {}", state);
        }
    }

    /// Last activity declared by the engine, `Idle` until the first notification
    pub fn current_activity(&self) -> PlayerActivity {
        PlayerActivity::from_u8(self.activity.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Playback position in milliseconds, or `TIME_UNKNOWN`
    pub fn get_player_position(&self) -> TimeValue {
        self.platform.player_position()
    }

    /// Playback duration in milliseconds, or `TIME_UNKNOWN`
    pub fn get_player_duration(&self) -> TimeValue {
        self.platform.player_duration()
    }

    pub fn is_engine_attached(&self) -> bool {
        self.engine.resolve().is_some()
    }

    /// Position according to the attached engine.
    /// Unknown when no engine is attached or it has gone away.
    pub fn engine_player_position(&self) -> TimeValue {
        self.engine
            .with_engine(|engine| engine.on_get_player_position())
            .unwrap_or(TimeValue::UNKNOWN)
    }

    /// Duration according to the attached engine
    pub fn engine_player_duration(&self) -> TimeValue {
        self.engine
            .with_engine(|engine| engine.on_get_player_duration())
            .unwrap_or(TimeValue::UNKNOWN)
    }

    /// Forwards a platform event to the engine.
    ///
    /// Returns whether it was delivered: a stale channel or a throttled
    /// progress report both yield `false`.
    pub fn notify_engine(&self, event: PlaybackEvent) -> bool {
        let Some(engine) = self.engine.resolve() else {
            return false;
        };
        if !self.throttle.admit(&event) {
            return false;
        }
        engine.on_playback_event(event);
        true
    }

    pub fn report_buffer_underrun(&self) -> bool {
        self.notify_engine(PlaybackEvent::BufferUnderrun)
    }

    pub fn report_buffer_refilled(&self) -> bool {
        self.notify_engine(PlaybackEvent::BufferRefilled)
    }

    pub fn report_finished(&self) -> bool {
        self.notify_engine(PlaybackEvent::PlaybackFinished)
    }

    pub fn report_error(&self, message: impl Into<String>) -> bool {
        self.notify_engine(PlaybackEvent::PlaybackError {
            message: message.into(),
        })
    }

    /// Sends the platform's current position and duration as a progress report
    pub fn report_position(&self) -> bool {
        self.notify_engine(PlaybackEvent::PositionReported {
            position: self.get_player_position(),
            duration: self.get_player_duration(),
        })
    }

    pub(crate) fn set_engine_interface(&self, engine: Weak<dyn AudioPlayerEngineInterface>) {
        self.engine.set_engine_interface(engine);
    }

    pub(crate) fn clear_engine_interface(&self) {
        self.engine.clear();
    }
}
