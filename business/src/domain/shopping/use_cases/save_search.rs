use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::{SearchFilters, SearchHistoryEntry};

pub struct SaveSearchParams {
    pub user_id: UserId,
    pub query: String,
    pub filters: SearchFilters,
}

#[async_trait]
pub trait SaveSearchUseCase: Send + Sync {
    async fn execute(&self, params: SaveSearchParams) -> Result<SearchHistoryEntry, ShoppingError>;
}
