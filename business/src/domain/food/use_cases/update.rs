use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::{FoodChangesProps, FoodRecord};
use crate::domain::shared::value_objects::FoodId;

pub struct UpdateFoodParams {
    pub id: FoodId,
    pub changes: FoodChangesProps,
}

#[async_trait]
pub trait UpdateFoodUseCase: Send + Sync {
    async fn execute(&self, params: UpdateFoodParams) -> Result<FoodRecord, FoodError>;
}
