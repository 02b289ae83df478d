//! Dashboard settings shared by every front-end.

use std::time::Duration;

use ledboard_domain::error::ValidationError;
use serde::Deserialize;

/// Polling and command settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix of every API path. Empty means same-origin requests.
    pub api_base: String,
    /// Period of the button/LED poll, in milliseconds.
    pub refresh_interval_ms: u64,
    /// Delay before re-polling LEDs after a successful command, in milliseconds.
    pub follow_up_delay_ms: u64,
    /// Network name shown next to the connectivity indicator.
    pub wifi_ssid: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            refresh_interval_ms: 500,
            follow_up_delay_ms: 100,
            wifi_ssid: "nRF70-WebServer".to_string(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    #[must_use]
    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms)
    }

    /// Reject settings that would make the poller spin.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroRefreshInterval`] when the interval is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.refresh_interval_ms == 0 {
            return Err(ValidationError::ZeroRefreshInterval);
        }
        Ok(())
    }
}
