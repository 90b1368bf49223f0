use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::FoodRecord;
use crate::domain::food::prediction::{PredictionOutcome, PredictionSummary};
use crate::domain::shared::value_objects::{FoodId, UserId};

/// Which printed label date the prediction is capped against.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintedDateChoice {
    /// Keep whatever the record already stores.
    UseStored,
    /// Cap against this `YYYY-MM-DD` date.
    Replace(String),
    /// The package has no printed date.
    Omit,
}

pub struct PredictExpiryParams {
    pub food_id: FoodId,
    /// Session user, used when the record carries no owner.
    pub user_id: UserId,
    pub printed_expiry_date: PrintedDateChoice,
}

#[derive(Debug)]
pub struct PredictionReport {
    pub outcome: PredictionOutcome,
    pub summary: PredictionSummary,
    /// The record as stored after the prediction, when it could be reloaded.
    pub refreshed: Option<FoodRecord>,
}

#[async_trait]
pub trait PredictExpiryUseCase: Send + Sync {
    async fn execute(&self, params: PredictExpiryParams) -> Result<PredictionReport, FoodError>;
}
