//! Page configuration from `<body data-*>` attributes.
//!
//! ```html
//! <body data-api-base="http://192.168.7.1" data-refresh-interval="500" data-wifi-ssid="bench">
//! ```
//!
//! Missing attributes keep the [`DashboardConfig`] defaults.

use ledboard_app::config::DashboardConfig;
use web_sys::Document;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct BodyAttributes {
    pub api_base: Option<String>,
    pub refresh_interval: Option<String>,
    pub wifi_ssid: Option<String>,
}

impl BodyAttributes {
    fn read(document: &Document) -> Self {
        let Some(body) = document.body() else {
            return Self::default();
        };
        let data = body.dataset();
        Self {
            api_base: data.get("apiBase"),
            refresh_interval: data.get("refreshInterval"),
            wifi_ssid: data.get("wifiSsid"),
        }
    }

    fn apply(self, config: &mut DashboardConfig) {
        if let Some(base) = self.api_base {
            config.api_base = base;
        }
        if let Some(raw) = self.refresh_interval {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.refresh_interval_ms = ms,
                _ => tracing::warn!(value = %raw, "ignoring invalid data-refresh-interval"),
            }
        }
        if let Some(ssid) = self.wifi_ssid.filter(|ssid| !ssid.is_empty()) {
            config.wifi_ssid = ssid;
        }
    }
}

pub(crate) fn from_body(document: &Document) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    BodyAttributes::read(document).apply(&mut config);
    config
}
