use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::UserId;

use super::model::{
    FoodMatch, IntakeEntry, LoggedIntake, NutritionProfile, NutritionReport, ReportPeriod,
};

/// Port to the nutrition-guidance resource family of the backend.
#[async_trait]
pub trait NutritionGateway: Send + Sync {
    async fn conditions(&self) -> Result<Vec<String>, GatewayError>;
    async fn profile(&self, user_id: &UserId) -> Result<NutritionProfile, GatewayError>;
    async fn save_profile(&self, profile: &NutritionProfile)
    -> Result<NutritionProfile, GatewayError>;
    async fn search_foods(&self, query: &str, limit: usize) -> Result<Vec<FoodMatch>, GatewayError>;
    async fn add_intake(&self, entry: &IntakeEntry) -> Result<LoggedIntake, GatewayError>;
    async fn intake_summary(
        &self,
        user_id: &UserId,
        period: ReportPeriod,
    ) -> Result<NutritionReport, GatewayError>;
    async fn report(
        &self,
        user_id: &UserId,
        period: ReportPeriod,
    ) -> Result<NutritionReport, GatewayError>;
}
