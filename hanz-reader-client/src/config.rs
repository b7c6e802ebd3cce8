use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of a locally started analysis service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout. URL analysis fetches the page server side, so
/// this is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the service, without a trailing path.
    pub base_url: String,
    /// Upper bound for one request, body read included.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Full URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
