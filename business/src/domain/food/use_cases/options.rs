use async_trait::async_trait;

use crate::domain::food::gateway::FoodOptions;

/// Never fails: an unreachable options endpoint yields the built-in categories.
#[async_trait]
pub trait GetFoodOptionsUseCase: Send + Sync {
    async fn execute(&self) -> FoodOptions;
}
