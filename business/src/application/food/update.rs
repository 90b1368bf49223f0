use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::gateway::FoodGateway;
use crate::domain::food::model::{FoodChanges, FoodRecord};
use crate::domain::food::use_cases::update::{UpdateFoodParams, UpdateFoodUseCase};
use crate::domain::logger::Logger;

pub struct UpdateFoodUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateFoodUseCase for UpdateFoodUseCaseImpl {
    async fn execute(&self, params: UpdateFoodParams) -> Result<FoodRecord, FoodError> {
        self.logger.info(&format!("Updating food: {}", params.id));

        let changes = FoodChanges::new(params.changes)?;
        if changes.is_empty() {
            return Err(FoodError::NothingToUpdate);
        }

        let record = self
            .gateway
            .update(&params.id, &changes)
            .await
            .map_err(FoodError::from_gateway)?;

        self.logger.info(&format!("Food updated: {}", record.id));
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::food::feedback::{ExpiryFeedback, FeedbackReceipt};
    use crate::domain::food::gateway::{FoodListing, FoodOptions};
    use crate::domain::food::model::{FoodChangesProps, NewFood};
    use crate::domain::food::prediction::{PredictionOutcome, PredictionRequest};
    use crate::domain::food::value_objects::StorageType;
    use crate::domain::shared::dates::parse_date;
    use crate::domain::shared::value_objects::{FoodId, UserId};
    use mockall::mock;

    mock! {
        pub FoodGw {}

        #[async_trait]
        impl FoodGateway for FoodGw {
            async fn list(&self) -> Result<FoodListing, GatewayError>;
            async fn create(&self, food: &NewFood) -> Result<FoodRecord, GatewayError>;
            async fn predict(&self, request: &PredictionRequest) -> Result<PredictionOutcome, GatewayError>;
            async fn update(&self, id: &FoodId, changes: &FoodChanges) -> Result<FoodRecord, GatewayError>;
            async fn delete(&self, id: &FoodId) -> Result<(), GatewayError>;
            async fn feedback(&self, feedback: &ExpiryFeedback) -> Result<FeedbackReceipt, GatewayError>;
            async fn options(&self) -> Result<FoodOptions, GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn record() -> FoodRecord {
        FoodRecord {
            id: FoodId::new("f1"),
            user_id: UserId::new("U001"),
            food_name: "Yogurt".to_string(),
            item_name: "yogurt".to_string(),
            category: "dairy".to_string(),
            storage_type: StorageType::Fridge,
            purchase_date: parse_date("2024-06-01"),
            printed_expiry_date: None,
            quantity: 4.0,
            used_before_expiry: false,
            baseline_expiry_date: None,
            personalized_expiry_date: None,
            final_expiry_date: None,
            scp_priority_score: None,
            days_left: None,
            prediction_history: vec![],
        }
    }

    #[tokio::test]
    async fn should_send_validated_changes() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_update()
            .withf(|id, changes| {
                id.as_str() == "f1"
                    && changes.quantity == Some(2.0)
                    && changes.printed_expiry_date == Some(None)
            })
            .times(1)
            .returning(|_, _| Ok(record()));

        let use_case = UpdateFoodUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: FoodId::new("f1"),
                changes: FoodChangesProps {
                    quantity: Some(2.0),
                    printed_expiry_date: Some(String::new()),
                    ..Default::default()
                },
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_edit_without_calling_backend() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway.expect_update().never();

        let use_case = UpdateFoodUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: FoodId::new("f1"),
                changes: FoodChangesProps::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), FoodError::NothingToUpdate));
    }

    #[tokio::test]
    async fn should_reject_invalid_purchase_date() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway.expect_update().never();

        let use_case = UpdateFoodUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: FoodId::new("f1"),
                changes: FoodChangesProps {
                    purchase_date: Some("2024-13-01".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), FoodError::PurchaseDateInvalid));
    }

    #[tokio::test]
    async fn should_map_missing_record_to_not_found() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_update()
            .returning(|_, _| Err(GatewayError::NotFound));

        let use_case = UpdateFoodUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateFoodParams {
                id: FoodId::new("missing"),
                changes: FoodChangesProps {
                    food_name: Some("Greek yogurt".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), FoodError::NotFound));
    }
}
