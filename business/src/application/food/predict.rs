use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food::errors::FoodError;
use crate::domain::food::gateway::FoodGateway;
use crate::domain::food::model::FoodRecord;
use crate::domain::food::prediction::PredictionRequest;
use crate::domain::food::use_cases::predict::{
    PredictExpiryParams, PredictExpiryUseCase, PredictionReport, PrintedDateChoice,
};
use crate::domain::logger::Logger;
use crate::domain::shared::dates::{is_iso_date, parse_date};
use crate::domain::shared::value_objects::FoodId;

pub struct PredictExpiryUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl PredictExpiryUseCaseImpl {
    async fn find_record(&self, id: &FoodId) -> Result<FoodRecord, FoodError> {
        self.gateway
            .list()
            .await?
            .records
            .into_iter()
            .find(|record| &record.id == id)
            .ok_or(FoodError::NotFound)
    }
}

#[async_trait]
impl PredictExpiryUseCase for PredictExpiryUseCaseImpl {
    async fn execute(&self, params: PredictExpiryParams) -> Result<PredictionReport, FoodError> {
        self.logger
            .info(&format!("Predicting expiry for food: {}", params.food_id));

        let printed_override = match params.printed_expiry_date {
            PrintedDateChoice::UseStored => None,
            PrintedDateChoice::Omit => Some(None),
            PrintedDateChoice::Replace(raw) => {
                let raw = raw.trim().to_string();
                if !is_iso_date(&raw) {
                    return Err(FoodError::PrintedExpiryDateInvalid);
                }
                Some(parse_date(&raw))
            }
        };

        let record = self.find_record(&params.food_id).await?;
        let owner = if record.user_id.is_empty() {
            params.user_id
        } else {
            record.user_id.clone()
        };
        let request = PredictionRequest::for_record(&record, owner, printed_override)?;

        let outcome = self
            .gateway
            .predict(&request)
            .await
            .map_err(FoodError::from_gateway)?;

        if !outcome.respects_safety_cap() {
            self.logger.warn(&format!(
                "Prediction for {} returned a final expiry after the printed date",
                params.food_id
            ));
        }

        let summary = outcome.summarize(Some(request.purchase_date), self.clock.today());

        let refreshed = match self.find_record(&params.food_id).await {
            Ok(updated) => Some(updated),
            Err(err) => {
                self.logger.warn(&format!(
                    "Could not reload food {} after prediction: {}",
                    params.food_id, err
                ));
                None
            }
        };

        self.logger.info(&format!(
            "Prediction complete for {}: personalization={}, cap_applied={}",
            params.food_id, outcome.personalization_enabled, outcome.printed_cap_applied
        ));

        Ok(PredictionReport {
            outcome,
            summary,
            refreshed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::errors::GatewayError;
    use crate::domain::food::feedback::{ExpiryFeedback, FeedbackReceipt};
    use crate::domain::food::gateway::{FoodListing, FoodOptions};
    use crate::domain::food::model::{FoodChanges, NewFood};
    use crate::domain::food::prediction::PredictionOutcome;
    use crate::domain::food::priority::PriorityLabel;
    use crate::domain::food::value_objects::StorageType;
    use crate::domain::shared::value_objects::UserId;
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

    fn clock() -> Arc<dyn Clock> {
        let now = parse_date("2024-06-04")
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Arc::new(FixedClock(now))
    }

    fn stored_record() -> FoodRecord {
        FoodRecord {
            id: FoodId::new("f1"),
            user_id: UserId::new("U007"),
            food_name: "Chicken breast".to_string(),
            item_name: "chicken".to_string(),
            category: "meat".to_string(),
            storage_type: StorageType::Fridge,
            purchase_date: parse_date("2024-06-01"),
            printed_expiry_date: parse_date("2024-06-05"),
            quantity: 1.0,
            used_before_expiry: false,
            baseline_expiry_date: None,
            personalized_expiry_date: None,
            final_expiry_date: None,
            scp_priority_score: None,
            days_left: None,
            prediction_history: vec![],
        }
    }

    fn outcome() -> PredictionOutcome {
        PredictionOutcome {
            item_name: "chicken".to_string(),
            category: "meat".to_string(),
            baseline_days: Some(6.0),
            baseline_expiry_date: parse_date("2024-06-07"),
            min_required_feedback: 5,
            item_feedback_count: 1,
            feedback_needed: 4,
            personalization_enabled: false,
            personalized_days: None,
            personalized_expiry_date: None,
            printed_expiry_date: parse_date("2024-06-05"),
            final_expiry_date: parse_date("2024-06-05"),
            printed_cap_applied: true,
            days_left: Some(1),
            priority_score: Some(1.0),
            message: Some("Personalization warming up (1/5 feedbacks for this item)".to_string()),
        }
    }

    fn params(choice: PrintedDateChoice) -> PredictExpiryParams {
        PredictExpiryParams {
            food_id: FoodId::new("f1"),
            user_id: UserId::new("U001"),
            printed_expiry_date: choice,
        }
    }

    #[tokio::test]
    async fn should_predict_for_record_owner_and_summarize() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_list()
            .returning(|| Ok(vec![stored_record()].into()));
        mock_gateway
            .expect_predict()
            .withf(|request| {
                request.user_id.as_str() == "U007"
                    && request.printed_expiry_date == parse_date("2024-06-05")
            })
            .times(1)
            .returning(|_| Ok(outcome()));

        let use_case = PredictExpiryUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: mock_logger(),
        };

        let report = use_case
            .execute(params(PrintedDateChoice::UseStored))
            .await
            .unwrap();

        assert_eq!(report.summary.baseline_expiry_date, parse_date("2024-06-07"));
        assert_eq!(report.summary.days_left_from_baseline, Some(3));
        assert_eq!(report.summary.priority, Some(PriorityLabel::High));
        assert!(report.refreshed.is_some());
    }

    #[tokio::test]
    async fn should_omit_printed_date_when_asked() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_list()
            .returning(|| Ok(vec![stored_record()].into()));
        mock_gateway
            .expect_predict()
            .withf(|request| request.printed_expiry_date.is_none())
            .times(1)
            .returning(|_| {
                let mut o = outcome();
                o.printed_expiry_date = None;
                o.printed_cap_applied = false;
                Ok(o)
            });

        let use_case = PredictExpiryUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(PrintedDateChoice::Omit)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_malformed_printed_override() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway.expect_list().never();
        mock_gateway.expect_predict().never();

        let use_case = PredictExpiryUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(PrintedDateChoice::Replace("05/06/2024".to_string())))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            FoodError::PrintedExpiryDateInvalid
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_record() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway.expect_list().returning(|| Ok(FoodListing::default()));
        mock_gateway.expect_predict().never();

        let use_case = PredictExpiryUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(PrintedDateChoice::UseStored)).await;

        assert!(matches!(result.unwrap_err(), FoodError::NotFound));
    }

    #[tokio::test]
    async fn should_warn_when_final_date_exceeds_printed_date() {
        let mut mock_gateway = MockFoodGw::new();
        mock_gateway
            .expect_list()
            .returning(|| Ok(vec![stored_record()].into()));
        mock_gateway.expect_predict().returning(|_| {
            let mut o = outcome();
            o.final_expiry_date = parse_date("2024-06-07");
            Ok(o)
        });

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("after the printed date"))
            .times(1)
            .returning(|_| ());

        let use_case = PredictExpiryUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params(PrintedDateChoice::UseStored)).await;

        assert!(result.is_ok());
    }
}
