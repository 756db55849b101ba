// Engine side of the bridge: the callback interface and the weak channel to it

use crate::bridge::AudioPlayerBridge;
use crate::player::AudioPlayer;
use parking_lot::RwLock;
use playback_bridge_core::{PlaybackEvent, TimeValue};
use std::sync::{Arc, Weak};

/// Engine-side target of the bridge's outbound calls.
///
/// Implemented by the engine, never by the platform.
pub trait AudioPlayerEngineInterface: Send + Sync {
    /// Position of the media the engine is currently driving
    fn on_get_player_position(&self) -> TimeValue {
        TimeValue::UNKNOWN
    }

    /// Duration of the media the engine is currently driving
    fn on_get_player_duration(&self) -> TimeValue {
        TimeValue::UNKNOWN
    }

    /// Signal raised by the platform renderer.
    /// Should return quickly; it runs on the platform's thread.
    fn on_playback_event(&self, _event: PlaybackEvent) {}
}

/// Non-owning handle to the attached engine.
///
/// Holds the engine weakly so a bridge never keeps it alive. The lock only
/// guards the handle swap and the upgrade; engine calls run after it is
/// released.
#[derive(Default)]
pub(crate) struct EngineChannel {
    target: RwLock<Option<Weak<dyn AudioPlayerEngineInterface>>>,
}

impl EngineChannel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous engine. The old one is simply forgotten.
    pub(crate) fn set_engine_interface(&self, engine: Weak<dyn AudioPlayerEngineInterface>) {
        *self.target.write() = Some(engine);
    }

    pub(crate) fn clear(&self) {
        self.target.write().take();
    }

    /// Upgrades the stored handle, or `None` if unattached or the engine is gone
    pub(crate) fn resolve(&self) -> Option<Arc<dyn AudioPlayerEngineInterface>> {
        self.target.read().as_ref().and_then(Weak::upgrade)
    }

    /// Runs `f` against the live engine; a stale channel skips the call
    pub(crate) fn with_engine<R>(
        &self,
        f: impl FnOnce(&dyn AudioPlayerEngineInterface) -> R,
    ) -> Option<R> {
        let engine = self.resolve()?;
        Some(f(engine.as_ref()))
    }
}

/// Binds `engine` to `bridge`, replacing any previous binding.
///
/// Engine-internal wiring: platform code must never call this. The bridge
/// only keeps a weak reference, so the caller stays responsible for keeping
/// `engine` alive.
pub fn attach<P, E>(bridge: &AudioPlayerBridge<P>, engine: &Arc<E>)
where
    P: AudioPlayer,
    E: AudioPlayerEngineInterface + 'static,
{
    let weak = Arc::downgrade(engine) as Weak<dyn AudioPlayerEngineInterface>;
    bridge.set_engine_interface(weak);
    log::info!("Engine interface attached to audio player bridge");
}

/// Drops the bridge's reference to its engine without notifying either side.
pub fn detach<P: AudioPlayer>(bridge: &AudioPlayerBridge<P>) {
    bridge.clear_engine_interface();
    log::info!("Engine interface detached from audio player bridge");
}

/// Engine double recording every call, for tests
#[cfg(test)]
pub(crate) struct TestEngine {
    pub(crate) position: TimeValue,
    pub(crate) duration: TimeValue,
    events: parking_lot::Mutex<Vec<PlaybackEvent>>,
}

#[cfg(test)]
impl TestEngine {
    pub(crate) fn new(position: TimeValue, duration: TimeValue) -> Self {
        Self {
            position,
            duration,
            events: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn get_events(&self) -> Vec<PlaybackEvent> {
        self.events.lock().clone()
    }
}

#[cfg(test)]
impl AudioPlayerEngineInterface for TestEngine {
    fn on_get_player_position(&self) -> TimeValue {
        self.position
    }

    fn on_get_player_duration(&self) -> TimeValue {
        self.duration
    }

    fn on_playback_event(&self, event: PlaybackEvent) {
        self.events.lock().push(event);
    }
}
