//! API server configuration.

use parley_core::ApiKey;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub bind_addr: String,
    /// Credential for the upstream completion service.
    pub api_key: ApiKey,
}

impl ApiConfig {
    pub fn new(host: &str, port: u16, api_key: ApiKey) -> Self {
        Self {
            bind_addr: format!("{host}:{port}"),
            api_key,
        }
    }
}
