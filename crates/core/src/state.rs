// Playback activity as declared by the engine

use crate::error::{BridgeError, Result};
use std::fmt;
use std::str::FromStr;

/// Specifies the state of audio playback activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PlayerActivity {
    /// Audio playback has not yet begun
    #[default]
    Idle = 0,
    /// Audio is currently playing
    Playing = 1,
    /// Audio playback is stopped, either from a stop directive or playback error
    Stopped = 2,
    /// Audio playback is paused
    Paused = 3,
    /// Audio playback is stalled because a buffer underrun has occurred
    BufferUnderrun = 4,
    /// Audio playback is finished
    Finished = 5,
}

impl PlayerActivity {
    /// Every activity, in declaration order
    pub const ALL: [PlayerActivity; 6] = [
        PlayerActivity::Idle,
        PlayerActivity::Playing,
        PlayerActivity::Stopped,
        PlayerActivity::Paused,
        PlayerActivity::BufferUnderrun,
        PlayerActivity::Finished,
    ];

    /// Canonical rendering used in logs and diagnostics
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerActivity::Idle => "IDLE",
            PlayerActivity::Playing => "PLAYING",
            PlayerActivity::Stopped => "STOPPED",
            PlayerActivity::Paused => "PAUSED",
            PlayerActivity::BufferUnderrun => "BUFFER_UNDERRUN",
            PlayerActivity::Finished => "FINISHED",
        }
    }

    /// Whether playback is logically in progress.
    /// A stalled stream still counts: the engine expects it to resume on its own.
    pub const fn is_active(self) -> bool {
        matches!(self, PlayerActivity::Playing | PlayerActivity::BufferUnderrun)
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(PlayerActivity::Idle),
            1 => Some(PlayerActivity::Playing),
            2 => Some(PlayerActivity::Stopped),
            3 => Some(PlayerActivity::Paused),
            4 => Some(PlayerActivity::BufferUnderrun),
            5 => Some(PlayerActivity::Finished),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerActivity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerActivity {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        PlayerActivity::ALL
            .into_iter()
            .find(|activity| activity.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownActivity(s.to_string()))
    }
}
