use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::FoodRecord;
use crate::domain::food::value_objects::StorageType;
use crate::domain::shared::value_objects::UserId;

pub struct AddFoodParams {
    pub user_id: UserId,
    pub food_name: String,
    pub item_name: String,
    pub category: String,
    pub storage_type: StorageType,
    pub purchase_date: String,
    pub printed_expiry_date: Option<String>,
    pub quantity: f64,
    pub used_before_expiry: bool,
}

#[async_trait]
pub trait AddFoodUseCase: Send + Sync {
    async fn execute(&self, params: AddFoodParams) -> Result<FoodRecord, FoodError>;
}
