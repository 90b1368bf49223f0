use async_trait::async_trait;

use crate::domain::nutrition::errors::NutritionError;

#[async_trait]
pub trait ListConditionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, NutritionError>;
}
