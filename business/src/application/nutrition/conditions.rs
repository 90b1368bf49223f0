use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::gateway::NutritionGateway;
use crate::domain::nutrition::use_cases::conditions::ListConditionsUseCase;

pub struct ListConditionsUseCaseImpl {
    pub gateway: Arc<dyn NutritionGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListConditionsUseCase for ListConditionsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, NutritionError> {
        let mut conditions = self.gateway.conditions().await?;
        conditions.retain(|c| !c.trim().is_empty());
        conditions.sort();
        conditions.dedup();
        self.logger
            .debug(&format!("Loaded {} health conditions", conditions.len()));
        Ok(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[tokio::test]
    async fn should_return_sorted_unique_conditions() {
        let mut mock_gateway = MockNutritionGw::new();
        mock_gateway.expect_conditions().returning(|| {
            Ok(vec![
                "hypertension".to_string(),
                "diabetes".to_string(),
                "".to_string(),
                "diabetes".to_string(),
            ])
        });

        let use_case = ListConditionsUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let conditions = use_case.execute().await.unwrap();

        assert_eq!(
            conditions,
            vec!["diabetes".to_string(), "hypertension".to_string()]
        );
    }

    #[tokio::test]
    async fn should_propagate_unavailable_backend() {
        let mut mock_gateway = MockNutritionGw::new();
        mock_gateway
            .expect_conditions()
            .returning(|| Err(GatewayError::unavailable("connection refused")));

        let use_case = ListConditionsUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), NutritionError::Gateway(_)));
    }
}
