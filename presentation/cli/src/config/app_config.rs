use super::{backend_config::BackendConfig, session_config::SessionConfig};

pub struct AppConfig {
    pub backend: BackendConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend: BackendConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }

    /// Applies command-line flags on top of the environment.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.backend.api_url = url.trim().to_string();
        }
        self
    }
}
