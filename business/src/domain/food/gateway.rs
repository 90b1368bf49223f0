use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::FoodId;

use super::feedback::{ExpiryFeedback, FeedbackReceipt};
use super::model::{FoodChanges, FoodRecord, NewFood};
use super::prediction::{PredictionOutcome, PredictionRequest};

/// Dropdown choices for the add/edit forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodOptions {
    /// Item keys the prediction model knows.
    pub items: Vec<String>,
    pub categories: Vec<String>,
}

/// Stored foods as listed by the backend. Documents that could not be read
/// are left out and counted in `skipped`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodListing {
    pub records: Vec<FoodRecord>,
    pub skipped: usize,
}

impl From<Vec<FoodRecord>> for FoodListing {
    fn from(records: Vec<FoodRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }
}

/// Port to the food-expiry resource family of the backend.
#[async_trait]
pub trait FoodGateway: Send + Sync {
    async fn list(&self) -> Result<FoodListing, GatewayError>;
    async fn create(&self, food: &NewFood) -> Result<FoodRecord, GatewayError>;
    async fn predict(&self, request: &PredictionRequest)
    -> Result<PredictionOutcome, GatewayError>;
    async fn update(&self, id: &FoodId, changes: &FoodChanges)
    -> Result<FoodRecord, GatewayError>;
    async fn delete(&self, id: &FoodId) -> Result<(), GatewayError>;
    async fn feedback(&self, feedback: &ExpiryFeedback) -> Result<FeedbackReceipt, GatewayError>;
    async fn options(&self) -> Result<FoodOptions, GatewayError>;
}
