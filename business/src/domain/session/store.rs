use async_trait::async_trait;

use crate::domain::errors::StoreError;

use super::model::Session;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// `None` when no session was saved yet.
    async fn load(&self) -> Result<Option<Session>, StoreError>;
    async fn save(&self, session: &Session) -> Result<(), StoreError>;
}
