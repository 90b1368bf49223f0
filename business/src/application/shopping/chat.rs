use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::gateway::ShoppingGateway;
use crate::domain::shopping::model::{CHAT_FALLBACK_REPLY, ChatMessage, ChatReply};
use crate::domain::shopping::use_cases::chat::{ChatWithAssistantParams, ChatWithAssistantUseCase};

pub struct ChatWithAssistantUseCaseImpl {
    pub gateway: Arc<dyn ShoppingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ChatWithAssistantUseCase for ChatWithAssistantUseCaseImpl {
    async fn execute(&self, params: ChatWithAssistantParams) -> Result<ChatReply, ShoppingError> {
        let message = ChatMessage::new(params.user_id, &params.message)?;

        self.logger
            .info(&format!("Asking the shopping assistant for {}", message.user_id));

        let mut reply = self.gateway.chat(&message).await?;
        if reply.response.trim().is_empty() {
            self.logger.warn("Shopping assistant replied with an empty message");
            reply.response = CHAT_FALLBACK_REPLY.to_string();
        }
        Ok(reply)
    }
}
