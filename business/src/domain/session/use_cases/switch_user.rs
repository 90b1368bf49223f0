use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::shared::value_objects::UserId;

pub struct SwitchUserParams {
    /// `None` generates the next sequential id.
    pub user_id: Option<UserId>,
}

#[async_trait]
pub trait SwitchUserUseCase: Send + Sync {
    async fn execute(&self, params: SwitchUserParams) -> Result<Session, SessionError>;
}
