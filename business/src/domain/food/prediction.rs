use chrono::NaiveDate;

use super::errors::FoodError;
use super::model::FoodRecord;
use super::priority::PriorityLabel;
use super::value_objects::StorageType;
use crate::domain::shared::dates::{days_between_dates, shift_date};
use crate::domain::shared::value_objects::{FoodId, UserId};

/// Input for a server-side expiry prediction of one inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub food_id: FoodId,
    pub user_id: UserId,
    pub item_name: String,
    pub category: String,
    pub purchase_date: NaiveDate,
    pub storage_type: StorageType,
    pub quantity: f64,
    pub used_before_expiry: bool,
    pub printed_expiry_date: Option<NaiveDate>,
}

impl PredictionRequest {
    /// Builds a request from a stored record.
    ///
    /// `printed_override` replaces the stored printed date; `Some(None)`
    /// predicts without any printed date.
    pub fn for_record(
        record: &FoodRecord,
        user_id: UserId,
        printed_override: Option<Option<NaiveDate>>,
    ) -> Result<Self, FoodError> {
        if user_id.is_empty() {
            return Err(FoodError::UserRequired);
        }
        if record.item_name.trim().is_empty() {
            return Err(FoodError::ItemNameEmpty);
        }
        if record.category.trim().is_empty() {
            return Err(FoodError::CategoryEmpty);
        }
        let purchase_date = record.purchase_date.ok_or(FoodError::PurchaseDateInvalid)?;

        Ok(Self {
            food_id: record.id.clone(),
            user_id,
            item_name: record.item_name.clone(),
            category: record.category.clone(),
            purchase_date,
            storage_type: record.storage_type,
            quantity: record.quantity,
            used_before_expiry: record.used_before_expiry,
            printed_expiry_date: printed_override.unwrap_or(record.printed_expiry_date),
        })
    }
}

/// What the backend answered for a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub item_name: String,
    pub category: String,
    pub baseline_days: Option<f64>,
    pub baseline_expiry_date: Option<NaiveDate>,
    pub min_required_feedback: u32,
    pub item_feedback_count: u32,
    pub feedback_needed: u32,
    pub personalization_enabled: bool,
    pub personalized_days: Option<f64>,
    pub personalized_expiry_date: Option<NaiveDate>,
    pub printed_expiry_date: Option<NaiveDate>,
    pub final_expiry_date: Option<NaiveDate>,
    pub printed_cap_applied: bool,
    pub days_left: Option<i64>,
    pub priority_score: Option<f64>,
    pub message: Option<String>,
}

impl PredictionOutcome {
    /// False when the final date lies after the printed label date.
    pub fn respects_safety_cap(&self) -> bool {
        match (self.final_expiry_date, self.printed_expiry_date) {
            (Some(final_date), Some(printed)) => final_date <= printed,
            _ => true,
        }
    }

    /// Fills in the dates the backend left out and derives the days-left
    /// figures shown next to each of them.
    pub fn summarize(
        &self,
        purchase_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> PredictionSummary {
        let baseline_expiry_date = self.baseline_expiry_date.or_else(|| {
            purchase_date
                .zip(self.baseline_days)
                .and_then(|(purchase, days)| shift_date(purchase, days))
        });

        let personalized_expiry_date = if self.personalization_enabled {
            self.personalized_expiry_date.or_else(|| {
                purchase_date
                    .zip(self.personalized_days)
                    .and_then(|(purchase, days)| shift_date(purchase, days))
            })
        } else {
            None
        };

        PredictionSummary {
            baseline_expiry_date,
            personalized_expiry_date,
            final_expiry_date: self.final_expiry_date,
            days_left_from_baseline: baseline_expiry_date.map(|d| days_between_dates(today, d)),
            days_left_from_personalized: personalized_expiry_date
                .map(|d| days_between_dates(today, d)),
            priority: PriorityLabel::from_score(self.priority_score),
            printed_cap_applied: self.printed_cap_applied,
            feedback_needed: self.feedback_needed,
        }
    }
}

/// Display-ready view of a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSummary {
    pub baseline_expiry_date: Option<NaiveDate>,
    /// Only present while personalization is active for the item.
    pub personalized_expiry_date: Option<NaiveDate>,
    pub final_expiry_date: Option<NaiveDate>,
    pub days_left_from_baseline: Option<i64>,
    pub days_left_from_personalized: Option<i64>,
    pub priority: Option<PriorityLabel>,
    pub printed_cap_applied: bool,
    pub feedback_needed: u32,
}
