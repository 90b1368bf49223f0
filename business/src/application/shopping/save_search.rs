use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::gateway::ShoppingGateway;
use crate::domain::shopping::model::SearchHistoryEntry;
use crate::domain::shopping::use_cases::save_search::{SaveSearchParams, SaveSearchUseCase};

pub struct SaveSearchUseCaseImpl {
    pub gateway: Arc<dyn ShoppingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveSearchUseCase for SaveSearchUseCaseImpl {
    async fn execute(&self, params: SaveSearchParams) -> Result<SearchHistoryEntry, ShoppingError> {
        if params.user_id.is_empty() {
            return Err(ShoppingError::UserRequired);
        }
        let query = params.query.trim();
        if query.is_empty() {
            return Err(ShoppingError::QueryEmpty);
        }

        self.logger
            .info(&format!("Saving search '{}' for {}", query, params.user_id));
        let entry = self
            .gateway
            .save_history(&params.user_id, query, &params.filters)
            .await?;
        Ok(entry)
    }
}
