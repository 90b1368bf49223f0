use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::StoreError;
use business::domain::session::model::Session;
use business::domain::session::store::SessionStore;

use super::entity::SessionEntity;

/// Keeps the session in a small JSON file.
pub struct SessionStoreJsonFile {
    path: PathBuf,
}

impl SessionStoreJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SessionStore for SessionStoreJsonFile {
    async fn load(&self) -> Result<Option<Session>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        let entity: SessionEntity =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupted(e.to_string()))?;
        match entity.into_domain() {
            Some(session) => Ok(Some(session)),
            None => Err(StoreError::Corrupted("empty user_id".to_string())),
        }
    }

    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(&SessionEntity::from_domain(session))
            .map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}
