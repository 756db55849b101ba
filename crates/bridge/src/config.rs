// Bridge configuration

use std::time::Duration;

/// Tunables for a single bridge instance
#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    /// Minimum spacing between progress reports forwarded to the engine
    pub position_report_interval: Duration,
}

impl BridgeConfig {
    pub fn with_position_report_interval(mut self, interval: Duration) -> Self {
        self.position_report_interval = interval;
        self
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            position_report_interval: Duration::from_millis(1000),
        }
    }
}
