// Platform audio playback bridge
// Lets a platform renderer mirror engine-driven playback state and report timing back

pub mod bridge;
pub mod config;
pub mod engine;
pub mod player;
mod throttle;

// Re-exports
pub use bridge::AudioPlayerBridge;
pub use config::BridgeConfig;
pub use engine::AudioPlayerEngineInterface;
pub use player::AudioPlayer;
pub use playback_bridge_core::{
    BridgeError, PlaybackClock, PlaybackEvent, PlayerActivity, TimeValue, TIME_UNKNOWN,
};

// Initialize logging based on platform
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("PlaybackBridge"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        // Hosts on other platforms install their own `log` backend
    }
}
