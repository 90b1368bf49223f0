use chrono::{DateTime, NaiveDate, Utc};

use super::errors::FoodError;
use super::value_objects::{StorageType, canonical_category, canonical_item_name};
use crate::domain::shared::dates::{DayRounding, day_offset, is_iso_date, parse_date};
use crate::domain::shared::value_objects::{FoodId, UserId};

/// One past prediction for a food record. Entries are never modified once
/// the backend has appended them.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionHistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub baseline_days: f64,
    pub baseline_expiry_date: Option<NaiveDate>,
    pub personalization_enabled: bool,
    pub personalized_days: Option<f64>,
    pub personalized_expiry_date: Option<NaiveDate>,
    pub final_expiry_date: Option<NaiveDate>,
    pub days_left: Option<i64>,
    pub priority_score: Option<f64>,
    pub printed_expiry_date: Option<NaiveDate>,
    pub printed_cap_applied: bool,
}

/// Inventory entry as served by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    pub id: FoodId,
    pub user_id: UserId,
    pub food_name: String,
    pub item_name: String,
    pub category: String,
    pub storage_type: StorageType,
    pub purchase_date: Option<NaiveDate>,
    pub printed_expiry_date: Option<NaiveDate>,
    pub quantity: f64,
    pub used_before_expiry: bool,
    pub baseline_expiry_date: Option<NaiveDate>,
    pub personalized_expiry_date: Option<NaiveDate>,
    pub final_expiry_date: Option<NaiveDate>,
    pub scp_priority_score: Option<f64>,
    /// Days left as computed by the backend when the list was served.
    pub days_left: Option<i64>,
    pub prediction_history: Vec<PredictionHistoryEntry>,
}

impl FoodRecord {
    /// Name shown in lists, falling back to the model item key.
    pub fn display_name(&self) -> &str {
        if self.food_name.trim().is_empty() {
            &self.item_name
        } else {
            &self.food_name
        }
    }

    /// The date the item should be treated as expiring on.
    pub fn effective_expiry(&self) -> Option<NaiveDate> {
        self.final_expiry_date
            .or(self.personalized_expiry_date)
            .or(self.baseline_expiry_date)
    }

    /// False when the final date lies after the printed label date.
    pub fn respects_safety_cap(&self) -> bool {
        match (self.final_expiry_date, self.printed_expiry_date) {
            (Some(final_date), Some(printed)) => final_date <= printed,
            _ => true,
        }
    }

    pub fn is_future_purchase(&self, today: NaiveDate) -> bool {
        self.purchase_date.is_some_and(|purchase| purchase > today)
    }

    /// Days from today until the purchase date; negative once purchased.
    pub fn days_until_purchase(&self, today: NaiveDate) -> Option<i64> {
        self.purchase_date.map(|purchase| {
            day_offset(
                today.and_time(chrono::NaiveTime::MIN),
                purchase.and_time(chrono::NaiveTime::MIN),
                DayRounding::Nearest,
            )
        })
    }

    pub fn history_newest_first(&self) -> Vec<&PredictionHistoryEntry> {
        let mut entries: Vec<&PredictionHistoryEntry> = self.prediction_history.iter().collect();
        entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        entries
    }
}

pub struct NewFoodProps {
    pub user_id: UserId,
    pub food_name: String,
    pub item_name: String,
    pub category: String,
    pub storage_type: StorageType,
    pub purchase_date: String,
    pub printed_expiry_date: Option<String>,
    pub quantity: f64,
    pub used_before_expiry: bool,
}

/// Validated input for adding a food to the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFood {
    pub user_id: UserId,
    pub food_name: String,
    pub item_name: String,
    pub category: String,
    pub storage_type: StorageType,
    pub purchase_date: NaiveDate,
    pub printed_expiry_date: Option<NaiveDate>,
    pub quantity: f64,
    pub used_before_expiry: bool,
}

impl NewFood {
    pub fn new(props: NewFoodProps) -> Result<Self, FoodError> {
        if props.user_id.is_empty() {
            return Err(FoodError::UserRequired);
        }
        if props.food_name.trim().is_empty() {
            return Err(FoodError::NameEmpty);
        }

        let item_name = canonical_item_name(&props.item_name);
        if item_name.is_empty() {
            return Err(FoodError::ItemNameEmpty);
        }
        let category = canonical_category(&props.category);
        if category.is_empty() {
            return Err(FoodError::CategoryEmpty);
        }

        let purchase_date = strict_date(&props.purchase_date)
            .ok_or(FoodError::PurchaseDateInvalid)?;
        let printed_expiry_date = optional_strict_date(props.printed_expiry_date.as_deref())
            .map_err(|_| FoodError::PrintedExpiryDateInvalid)?;

        if !props.quantity.is_finite() || props.quantity <= 0.0 {
            return Err(FoodError::QuantityNotPositive);
        }

        Ok(Self {
            user_id: props.user_id,
            food_name: props.food_name.trim().to_string(),
            item_name,
            category,
            storage_type: props.storage_type,
            purchase_date,
            printed_expiry_date,
            quantity: props.quantity,
            used_before_expiry: props.used_before_expiry,
        })
    }
}

/// Edit of the descriptive fields of a record. Derived expiry fields are
/// owned by the backend and cannot be edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodChanges {
    pub food_name: Option<String>,
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub storage_type: Option<StorageType>,
    pub purchase_date: Option<NaiveDate>,
    pub quantity: Option<f64>,
    pub used_before_expiry: Option<bool>,
    /// `Some(None)` clears the printed date.
    pub printed_expiry_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Default)]
pub struct FoodChangesProps {
    pub food_name: Option<String>,
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub storage_type: Option<StorageType>,
    pub purchase_date: Option<String>,
    pub quantity: Option<f64>,
    pub used_before_expiry: Option<bool>,
    pub printed_expiry_date: Option<String>,
}

impl FoodChanges {
    /// Validates an edit. An empty printed date string clears the date.
    pub fn new(props: FoodChangesProps) -> Result<Self, FoodError> {
        let food_name = match props.food_name {
            Some(name) if name.trim().is_empty() => return Err(FoodError::NameEmpty),
            Some(name) => Some(name.trim().to_string()),
            None => None,
        };
        let item_name = match props.item_name.map(|n| canonical_item_name(&n)) {
            Some(name) if name.is_empty() => return Err(FoodError::ItemNameEmpty),
            other => other,
        };
        let category = match props.category.map(|c| canonical_category(&c)) {
            Some(category) if category.is_empty() => return Err(FoodError::CategoryEmpty),
            other => other,
        };
        let purchase_date = match props.purchase_date {
            Some(raw) => Some(strict_date(&raw).ok_or(FoodError::PurchaseDateInvalid)?),
            None => None,
        };
        if let Some(quantity) = props.quantity
            && (!quantity.is_finite() || quantity <= 0.0)
        {
            return Err(FoodError::QuantityNotPositive);
        }
        let printed_expiry_date = match props.printed_expiry_date {
            Some(raw) => Some(
                optional_strict_date(Some(&raw))
                    .map_err(|_| FoodError::PrintedExpiryDateInvalid)?,
            ),
            None => None,
        };

        Ok(Self {
            food_name,
            item_name,
            category,
            storage_type: props.storage_type,
            purchase_date,
            quantity: props.quantity,
            used_before_expiry: props.used_before_expiry,
            printed_expiry_date,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == FoodChanges::default()
    }
}

fn strict_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if is_iso_date(trimmed) {
        parse_date(trimmed)
    } else {
        None
    }
}

/// Blank input means "no date"; anything else must be a strict ISO date.
fn optional_strict_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ()> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => strict_date(value).map(Some).ok_or(()),
    }
}
