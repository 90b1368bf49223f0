use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the smart-kitchen backend lives.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    ///
    /// Environment variables:
    /// - SMART_KITCHEN_API_URL: API root (default: "http://127.0.0.1:5000/api")
    /// - SMART_KITCHEN_API_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SMART_KITCHEN_API_URL").ok(),
            env::var("SMART_KITCHEN_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(api_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
