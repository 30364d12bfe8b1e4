//! Console configuration loaded from environment variables.

use std::env;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote users API
    pub api_base_url: String,
    /// Request timeout in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if it exists (ignore errors if not found)
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
