use std::env;
use std::path::PathBuf;

use directories::BaseDirs;

const SESSION_FILENAME: &str = "session.json";
const APP_DIR: &str = "smart-kitchen";

/// Location of the persisted session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub file: PathBuf,
}

impl SessionConfig {
    /// Environment variables:
    /// - SMART_KITCHEN_SESSION_FILE: session file path
    ///   (default: "<config dir>/smart-kitchen/session.json")
    pub fn from_env() -> Self {
        let file = env::var("SMART_KITCHEN_SESSION_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_path);
        Self { file }
    }
}

fn default_session_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join(SESSION_FILENAME)
}
