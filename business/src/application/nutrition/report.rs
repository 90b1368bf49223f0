use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::gateway::NutritionGateway;
use crate::domain::nutrition::model::{NutritionReport, ReportKind};
use crate::domain::nutrition::use_cases::report::{
    GetNutritionReportParams, GetNutritionReportUseCase,
};

pub struct GetNutritionReportUseCaseImpl {
    pub gateway: Arc<dyn NutritionGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetNutritionReportUseCase for GetNutritionReportUseCaseImpl {
    async fn execute(
        &self,
        params: GetNutritionReportParams,
    ) -> Result<NutritionReport, NutritionError> {
        if params.user_id.is_empty() {
            return Err(NutritionError::UserRequired);
        }

        self.logger.info(&format!(
            "Fetching {} nutrition {:?} for {}",
            params.period, params.kind, params.user_id
        ));

        let report = match params.kind {
            ReportKind::Summary => {
                self.gateway
                    .intake_summary(&params.user_id, params.period)
                    .await?
            }
            ReportKind::Full => self.gateway.report(&params.user_id, params.period).await?,
        };
        Ok(report)
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

    fn body(kind: ReportKind, period: ReportPeriod) -> NutritionReport {
        NutritionReport {
            kind,
            period,
            body: serde_json::json!({ "user_id": "U001", "period": period.to_string() }),
        }
    }

    #[tokio::test]
    async fn should_fetch_summary_for_summary_kind() {
        let mut mock_gateway = MockNutritionGw::new();
        mock_gateway
            .expect_intake_summary()
            .withf(|_, period| *period == ReportPeriod::Weekly)
            .times(1)
            .returning(|_, period| Ok(body(ReportKind::Summary, period)));
        mock_gateway.expect_report().never();

        let use_case = GetNutritionReportUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let report = use_case
            .execute(GetNutritionReportParams {
                user_id: UserId::new("U001"),
                period: ReportPeriod::Weekly,
                kind: ReportKind::Summary,
            })
            .await
            .unwrap();

        assert_eq!(report.kind, ReportKind::Summary);
    }

    #[tokio::test]
    async fn should_fetch_full_report_for_full_kind() {
        let mut mock_gateway = MockNutritionGw::new();
        mock_gateway.expect_intake_summary().never();
        mock_gateway
            .expect_report()
            .times(1)
            .returning(|_, period| Ok(body(ReportKind::Full, period)));

        let use_case = GetNutritionReportUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let report = use_case
            .execute(GetNutritionReportParams {
                user_id: UserId::new("U001"),
                period: ReportPeriod::Monthly,
                kind: ReportKind::Full,
            })
            .await
            .unwrap();

        assert_eq!(report.period, ReportPeriod::Monthly);
    }
}
