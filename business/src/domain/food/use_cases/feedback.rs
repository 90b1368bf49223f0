use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::feedback::FeedbackReceipt;
use crate::domain::food::value_objects::FeedbackKind;
use crate::domain::shared::value_objects::{FoodId, UserId};

pub struct SubmitFeedbackParams {
    pub food_id: FoodId,
    pub user_id: UserId,
    pub kind: FeedbackKind,
    pub actual_days: f64,
}

#[async_trait]
pub trait SubmitFeedbackUseCase: Send + Sync {
    async fn execute(&self, params: SubmitFeedbackParams) -> Result<FeedbackReceipt, FoodError>;
}
