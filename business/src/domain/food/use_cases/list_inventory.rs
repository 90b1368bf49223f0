use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::inventory::{InventoryRow, InventoryView};

pub struct ListInventoryParams {
    pub view: InventoryView,
}

#[async_trait]
pub trait ListInventoryUseCase: Send + Sync {
    async fn execute(&self, params: ListInventoryParams) -> Result<Vec<InventoryRow>, FoodError>;
}
