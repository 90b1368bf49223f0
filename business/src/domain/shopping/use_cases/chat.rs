use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::ChatReply;

pub struct ChatWithAssistantParams {
    pub user_id: UserId,
    pub message: String,
}

#[async_trait]
pub trait ChatWithAssistantUseCase: Send + Sync {
    async fn execute(&self, params: ChatWithAssistantParams) -> Result<ChatReply, ShoppingError>;
}
