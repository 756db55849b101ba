// Core value types shared by the playback bridge and its engine

pub mod clock;
pub mod error;
pub mod event;
pub mod state;
pub mod time;

// Re-export commonly used types
pub use clock::PlaybackClock;
pub use error::{BridgeError, Result};
pub use event::PlaybackEvent;
pub use state::PlayerActivity;
pub use time::{TimeValue, TIME_UNKNOWN};
