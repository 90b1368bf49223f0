use async_trait::async_trait;

use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::model::{NutritionReport, ReportKind, ReportPeriod};
use crate::domain::shared::value_objects::UserId;

pub struct GetNutritionReportParams {
    pub user_id: UserId,
    pub period: ReportPeriod,
    pub kind: ReportKind,
}

#[async_trait]
pub trait GetNutritionReportUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetNutritionReportParams,
    ) -> Result<NutritionReport, NutritionError>;
}
