//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Endpoint probed when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/hello";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Backend endpoint the status controller queries.
    pub endpoint: EndpointConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Target of the single status request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Absolute URL (e.g., "http://localhost:5000/api/hello").
    pub url: String,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
