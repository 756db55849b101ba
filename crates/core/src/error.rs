// Error handling for bridge value types

use std::fmt;

/// Bridge error types
///
/// Bridge operations themselves never fail; these are only produced when
/// parsing or constructing values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Text did not match any canonical player activity rendering
    UnknownActivity(String),

    /// Millisecond value below the unknown sentinel
    InvalidTime(i64),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BridgeError::UnknownActivity(text) => write!(f, "Unknown player activity: {}", text),
            BridgeError::InvalidTime(ms) => write!(f, "Invalid time value: {} ms", ms),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Result type alias for bridge value operations
pub type Result<T> = std::result::Result<T, BridgeError>;
