use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::inventory::{InventoryStats, InventoryView};

pub struct InventoryStatsParams {
    pub view: InventoryView,
}

#[async_trait]
pub trait InventoryStatsUseCase: Send + Sync {
    async fn execute(&self, params: InventoryStatsParams) -> Result<InventoryStats, FoodError>;
}
