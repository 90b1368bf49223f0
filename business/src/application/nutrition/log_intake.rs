use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::gateway::NutritionGateway;
use crate::domain::nutrition::model::{IntakeEntry, LoggedIntake};
use crate::domain::nutrition::use_cases::log_intake::{LogIntakeParams, LogIntakeUseCase};
use crate::domain::shared::dates::to_iso;

pub struct LogIntakeUseCaseImpl {
    pub gateway: Arc<dyn NutritionGateway>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogIntakeUseCase for LogIntakeUseCaseImpl {
    async fn execute(&self, params: LogIntakeParams) -> Result<LoggedIntake, NutritionError> {
        let date = params
            .date
            .unwrap_or_else(|| to_iso(self.clock.today()));
        let entry = IntakeEntry::new(
            params.user_id,
            params.food_id,
            params.food_name,
            params.quantity,
            &date,
        )?;

        self.logger.info(&format!(
            "Logging intake for {}: {} x{} on {}",
            entry.user_id, entry.food_name, entry.quantity, date
        ));

        let logged = self.gateway.add_intake(&entry).await?;
        Ok(logged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::shared::dates::parse_date;
    use crate::domain::errors::GatewayError;
    use crate::domain::nutrition::model::{
        FoodMatch, IntakeEntry, LoggedIntake, NutritionProfile, NutritionReport, ReportPeriod,
    };
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub NutritionGw {}

        #[async_trait]
        impl NutritionGateway for NutritionGw {
            async fn conditions(&self) -> Result<Vec<String>, GatewayError>;
            async fn profile(&self, user_id: &UserId) -> Result<NutritionProfile, GatewayError>;
            async fn save_profile(&self, profile: &NutritionProfile) -> Result<NutritionProfile, GatewayError>;
            async fn search_foods(&self, query: &str, limit: usize) -> Result<Vec<FoodMatch>, GatewayError>;
            async fn add_intake(&self, entry: &IntakeEntry) -> Result<LoggedIntake, GatewayError>;
            async fn intake_summary(&self, user_id: &UserId, period: ReportPeriod) -> Result<NutritionReport, GatewayError>;
            async fn report(&self, user_id: &UserId, period: ReportPeriod) -> Result<NutritionReport, GatewayError>;
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
        let now = parse_date("2024-06-15")
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        Arc::new(FixedClock(now))
    }

    fn params(date: Option<&str>, quantity: f64) -> LogIntakeParams {
        LogIntakeParams {
            user_id: UserId::new("U003"),
            food_id: "F101".to_string(),
            food_name: "String hoppers".to_string(),
            quantity,
            date: date.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn should_default_to_today() {
        let mut mock_gateway = MockNutritionGw::new();
        mock_gateway
            .expect_add_intake()
            .withf(|entry| entry.date == parse_date("2024-06-15").unwrap())
            .times(1)
            .returning(|entry| {
                Ok(LoggedIntake {
                    entry: entry.clone(),
                    recorded_at: Some("2024-06-15T14:00:00Z".to_string()),
                })
            });

        let use_case = LogIntakeUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: mock_logger(),
        };

        let logged = use_case.execute(params(None, 2.0)).await.unwrap();

        assert_eq!(logged.entry.quantity, 2.0);
    }

    #[tokio::test]
    async fn should_reject_bad_quantity_locally() {
        let mut mock_gateway = MockNutritionGw::new();
        mock_gateway.expect_add_intake().never();

        let use_case = LogIntakeUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Some("2024-06-14"), -1.0)).await;

        assert!(matches!(
            result.unwrap_err(),
            NutritionError::QuantityNotPositive
        ));
    }

    #[tokio::test]
    async fn should_surface_backend_validation_message() {
        let mut mock_gateway = MockNutritionGw::new();
        mock_gateway.expect_add_intake().returning(|_| {
            Err(GatewayError::rejected(
                400,
                "Invalid date format. Use YYYY-MM-DD",
            ))
        });

        let use_case = LogIntakeUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            clock: clock(),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(params(Some("2024-06-14"), 1.0))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid date format. Use YYYY-MM-DD");
    }
}
