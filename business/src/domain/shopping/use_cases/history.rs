use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::SearchHistoryEntry;

pub struct GetShoppingHistoryParams {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

#[async_trait]
pub trait GetShoppingHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingHistoryParams,
    ) -> Result<Vec<SearchHistoryEntry>, ShoppingError>;
}
