// File: crates/dashboard-client/src/config.rs
// Summary: Client configuration (backend URL, timings) with env-backed defaults.

use std::time::Duration;

use dashboard_core::types::{DRAW_DELAY, NOTICE_TTL};

/// Environment variable consulted by `ClientConfig::default`.
pub const BASE_URL_ENV: &str = "CHART_DASHBOARD_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Origin of the chart backend, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    /// Upper bound for one request. `None` waits for the transport to resolve.
    pub request_timeout: Option<Duration>,
    /// Delay between mounting a widget and drawing it.
    pub draw_delay: Duration,
    /// How long a notice stays up before it is removed.
    pub notice_ttl: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
            draw_delay: DRAW_DELAY,
            notice_ttl: NOTICE_TTL,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_draw_delay(mut self, delay: Duration) -> Self {
        self.draw_delay = delay;
        self
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}
