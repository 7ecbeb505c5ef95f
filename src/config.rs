//! Gateway configuration
//!
//! Settings are merged once at startup (explicit flag > `GS_` environment
//! variable > default) by the `server` binary and then handed to the
//! construction layer by reference. Nothing reads configuration ambiently.

use serde::{Deserialize, Serialize};

/// Port used when neither `--server-port` nor `GS_SERVER_PORT` is set
pub const DEFAULT_PORT: &str = "4000";

/// Interface the service server listens on by default
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Immutable view over the gateway's startup settings
///
/// Values are kept as the strings the user supplied; each server variant
/// validates the settings it actually consumes during its configure step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Variant selector, `SERVICE` or `KAFKA`
    pub server_type: String,
    /// Port the service server listens on
    pub server_port: String,
    /// Host/interface the service server binds to
    pub host: String,
    /// Attach permissive CORS headers to every response
    pub cors_enabled: bool,
}

impl GatewayConfig {
    pub fn new(server_type: impl Into<String>, server_port: impl Into<String>) -> Self {
        Self {
            server_type: server_type.into(),
            server_port: server_port.into(),
            host: DEFAULT_HOST.to_string(),
            cors_enabled: false,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors_enabled = enabled;
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_PORT)
    }
}
