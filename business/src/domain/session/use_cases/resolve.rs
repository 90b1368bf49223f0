use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::shared::value_objects::UserId;

pub struct ResolveSessionParams {
    /// Acts as this user for one invocation without touching the stored session.
    pub user_override: Option<UserId>,
}

#[async_trait]
pub trait ResolveSessionUseCase: Send + Sync {
    async fn execute(&self, params: ResolveSessionParams) -> Result<Session, SessionError>;
}
