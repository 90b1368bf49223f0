use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::ShoppingProduct;

pub struct GetRecommendationsParams {
    pub user_id: UserId,
    pub keywords: Vec<String>,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
}

#[async_trait]
pub trait GetRecommendationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecommendationsParams,
    ) -> Result<Vec<ShoppingProduct>, ShoppingError>;
}
