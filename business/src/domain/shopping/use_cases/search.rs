use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::{SearchFilters, SearchResults};

pub struct SearchProductsParams {
    pub user_id: UserId,
    pub query: String,
    pub filters: SearchFilters,
    pub currency: Option<String>,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<SearchResults, ShoppingError>;
}
