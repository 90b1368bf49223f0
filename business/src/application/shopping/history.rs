use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::gateway::ShoppingGateway;
use crate::domain::shopping::model::{DEFAULT_HISTORY_LIMIT, SearchHistoryEntry};
use crate::domain::shopping::use_cases::history::{
    GetShoppingHistoryParams, GetShoppingHistoryUseCase,
};

pub struct GetShoppingHistoryUseCaseImpl {
    pub gateway: Arc<dyn ShoppingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingHistoryUseCase for GetShoppingHistoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingHistoryParams,
    ) -> Result<Vec<SearchHistoryEntry>, ShoppingError> {
        if params.user_id.is_empty() {
            return Err(ShoppingError::UserRequired);
        }
        let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT).max(1);

        let mut entries = self.gateway.history(&params.user_id, limit).await?;
        entries.sort_by(|a, b| b.searched_at.cmp(&a.searched_at));
        entries.truncate(limit);

        self.logger.debug(&format!(
            "Loaded {} history entries for {}",
            entries.len(),
            params.user_id
        ));
        Ok(entries)
    }
}
