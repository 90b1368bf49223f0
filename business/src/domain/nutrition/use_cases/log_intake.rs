use async_trait::async_trait;

use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::model::LoggedIntake;
use crate::domain::shared::value_objects::UserId;

pub struct LogIntakeParams {
    pub user_id: UserId,
    pub food_id: String,
    pub food_name: String,
    pub quantity: f64,
    /// `YYYY-MM-DD`; defaults to today when absent.
    pub date: Option<String>,
}

#[async_trait]
pub trait LogIntakeUseCase: Send + Sync {
    async fn execute(&self, params: LogIntakeParams) -> Result<LoggedIntake, NutritionError>;
}
