// Platform-initiated playback signals sent toward the engine

use crate::time::TimeValue;

/// Playback event types raised by the platform renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The renderer ran out of buffered audio
    BufferUnderrun,

    /// Enough audio was buffered again to continue
    BufferRefilled,

    /// The renderer reached the end of the media
    PlaybackFinished,

    /// Playback failed on the platform side
    PlaybackError { message: String },

    /// Periodic progress report
    PositionReported {
        position: TimeValue,
        duration: TimeValue,
    },
}

impl PlaybackEvent {
    /// Progress reports are high-frequency and may be dropped by throttling
    pub fn is_progress(&self) -> bool {
        matches!(self, PlaybackEvent::PositionReported { .. })
    }
}
