// Millisecond time values with an explicit unknown sentinel

use crate::error::{BridgeError, Result};
use std::fmt;

/// Used when audio time is unknown or indeterminate.
pub const TIME_UNKNOWN: i64 = -1;

/// Playback time in milliseconds, or unknown.
///
/// The inner value is always either `TIME_UNKNOWN` or non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeValue(i64);

impl TimeValue {
    pub const UNKNOWN: TimeValue = TimeValue(TIME_UNKNOWN);
    pub const ZERO: TimeValue = TimeValue(0);

    /// Known time in milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        if ms > i64::MAX as u64 {
            TimeValue(i64::MAX)
        } else {
            TimeValue(ms as i64)
        }
    }

    /// Lossy conversion from a raw millisecond value.
    /// Any negative input is treated as unknown.
    pub const fn from_raw(ms: i64) -> Self {
        if ms < 0 {
            TimeValue::UNKNOWN
        } else {
            TimeValue(ms)
        }
    }

    pub const fn is_unknown(self) -> bool {
        self.0 == TIME_UNKNOWN
    }

    /// Raw value as exchanged with the engine: milliseconds or `TIME_UNKNOWN`
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn known_millis(self) -> Option<u64> {
        if self.0 < 0 {
            None
        } else {
            Some(self.0 as u64)
        }
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        TimeValue::UNKNOWN
    }
}

impl TryFrom<i64> for TimeValue {
    type Error = BridgeError;

    fn try_from(ms: i64) -> Result<Self> {
        if ms < TIME_UNKNOWN {
            Err(BridgeError::InvalidTime(ms))
        } else {
            Ok(TimeValue(ms))
        }
    }
}

impl From<TimeValue> for i64 {
    fn from(value: TimeValue) -> Self {
        value.0
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.known_millis() {
            Some(ms) => write!(f, "{}ms", ms),
            None => f.write_str("unknown"),
        }
    }
}
