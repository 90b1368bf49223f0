use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::feedback::{ExpiryFeedback, FeedbackReceipt};
use crate::domain::food::gateway::FoodGateway;
use crate::domain::food::use_cases::feedback::{SubmitFeedbackParams, SubmitFeedbackUseCase};
use crate::domain::logger::Logger;

pub struct SubmitFeedbackUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitFeedbackUseCase for SubmitFeedbackUseCaseImpl {
    async fn execute(&self, params: SubmitFeedbackParams) -> Result<FeedbackReceipt, FoodError> {
        self.logger.info(&format!(
            "Submitting {} feedback for food: {}",
            params.kind, params.food_id
        ));

        let feedback = ExpiryFeedback::new(
            params.food_id,
            params.user_id,
            params.kind,
            params.actual_days,
        )?;

        let receipt = self
            .gateway
            .feedback(&feedback)
            .await
            .map_err(FoodError::from_gateway)?;

        if receipt.personalization_activated_now {
            self.logger.info(&format!(
                "Personalization activated for {} ({})",
                receipt.item_name, receipt.category
            ));
        }

        Ok(receipt)
    }
}
