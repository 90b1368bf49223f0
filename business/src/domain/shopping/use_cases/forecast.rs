use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::ForecastReport;

pub struct ForecastNeedsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ForecastNeedsUseCase: Send + Sync {
    async fn execute(&self, params: ForecastNeedsParams) -> Result<ForecastReport, ShoppingError>;
}
