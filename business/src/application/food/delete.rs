use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::gateway::FoodGateway;
use crate::domain::food::use_cases::delete::{DeleteFoodParams, DeleteFoodUseCase};
use crate::domain::logger::Logger;

pub struct DeleteFoodUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFoodUseCase for DeleteFoodUseCaseImpl {
    async fn execute(&self, params: DeleteFoodParams) -> Result<(), FoodError> {
        self.logger.info(&format!("Deleting food: {}", params.id));

        self.gateway
            .delete(&params.id)
            .await
            .map_err(FoodError::from_gateway)?;

        self.logger.info(&format!("Food deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::food::feedback::{ExpiryFeedback, FeedbackReceipt};
    use crate::domain::food::gateway::{FoodListing, FoodOptions};
    use crate::domain::food::model::{FoodChanges, FoodRecord, NewFood};
    use crate::domain::food::prediction::{PredictionOutcome, PredictionRequest};
    use crate::domain::shared::value_objects::FoodId;
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

    #[tokio::test]
    async fn should_delete_food() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_delete()
            .withf(|id| id.as_str() == "f1")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteFoodUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFoodParams {
                id: FoodId::new("f1"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_backend_has_no_record() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_delete()
            .returning(|_| Err(GatewayError::NotFound));

        let use_case = DeleteFoodUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFoodParams {
                id: FoodId::new("gone"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), FoodError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_backend_rejection() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_delete()
            .returning(|_| Err(GatewayError::rejected(400, "Invalid food id")));

        let use_case = DeleteFoodUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(DeleteFoodParams {
                id: FoodId::new("??"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid food id");
    }
}
