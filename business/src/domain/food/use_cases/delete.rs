use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::shared::value_objects::FoodId;

pub struct DeleteFoodParams {
    pub id: FoodId,
}

#[async_trait]
pub trait DeleteFoodUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFoodParams) -> Result<(), FoodError>;
}
