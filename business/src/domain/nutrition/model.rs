use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::NutritionError;
use crate::domain::shared::dates::{is_iso_date, parse_date};
use crate::domain::shared::value_objects::UserId;

pub const DEFAULT_SEARCH_LIMIT: usize = 15;
const MAX_AGE: u32 = 120;

/// Reference population a nutrient requirement table is picked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationGroup {
    #[default]
    Male,
    Female,
    Pregnant,
    Lactating,
}

impl std::fmt::Display for PopulationGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopulationGroup::Male => write!(f, "male"),
            PopulationGroup::Female => write!(f, "female"),
            PopulationGroup::Pregnant => write!(f, "pregnant"),
            PopulationGroup::Lactating => write!(f, "lactating"),
        }
    }
}

impl std::str::FromStr for PopulationGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(PopulationGroup::Male),
            "female" => Ok(PopulationGroup::Female),
            "pregnant" => Ok(PopulationGroup::Pregnant),
            "lactating" => Ok(PopulationGroup::Lactating),
            _ => Err(format!("Invalid population group: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionProfile {
    pub user_id: UserId,
    pub age: Option<u32>,
    pub group: PopulationGroup,
    /// Lower-cased condition names, blanks removed.
    pub conditions: Vec<String>,
}

impl NutritionProfile {
    pub fn new(
        user_id: UserId,
        age: Option<u32>,
        group: PopulationGroup,
        conditions: Vec<String>,
    ) -> Result<Self, NutritionError> {
        if user_id.is_empty() {
            return Err(NutritionError::UserRequired);
        }
        if age.is_some_and(|a| a == 0 || a > MAX_AGE) {
            return Err(NutritionError::AgeInvalid);
        }

        let mut cleaned: Vec<String> = Vec::new();
        for condition in conditions {
            let condition = condition.trim().to_lowercase();
            if !condition.is_empty() && !cleaned.contains(&condition) {
                cleaned.push(condition);
            }
        }

        Ok(Self {
            user_id,
            age,
            group,
            conditions: cleaned,
        })
    }
}

/// A food from the nutrition dataset, as offered by search.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodMatch {
    pub food_id: Option<String>,
    pub food_name: String,
    pub serving_basis: Option<String>,
    pub serving_size_g: Option<f64>,
}

/// One logged meal: `quantity` servings of a dataset food on `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeEntry {
    pub user_id: UserId,
    pub food_id: String,
    pub food_name: String,
    pub quantity: f64,
    pub date: NaiveDate,
}

impl IntakeEntry {
    pub fn new(
        user_id: UserId,
        food_id: String,
        food_name: String,
        quantity: f64,
        date: &str,
    ) -> Result<Self, NutritionError> {
        if user_id.is_empty() {
            return Err(NutritionError::UserRequired);
        }
        let food_id = food_id.trim().to_string();
        let food_name = food_name.trim().to_string();
        if food_id.is_empty() && food_name.is_empty() {
            return Err(NutritionError::FoodRequired);
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(NutritionError::QuantityNotPositive);
        }
        let date = date.trim();
        let date = if is_iso_date(date) {
            parse_date(date).ok_or(NutritionError::DateInvalid)?
        } else {
            return Err(NutritionError::DateInvalid);
        };

        Ok(Self {
            user_id,
            food_id,
            food_name,
            quantity,
            date,
        })
    }
}

/// An intake entry as stored by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedIntake {
    pub entry: IntakeEntry,
    /// Server timestamp, verbatim.
    pub recorded_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    #[default]
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub fn days(&self) -> u32 {
        match self {
            ReportPeriod::Weekly => 7,
            ReportPeriod::Monthly => 30,
        }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportPeriod::Weekly => write!(f, "weekly"),
            ReportPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

impl std::str::FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(ReportPeriod::Weekly),
            "monthly" | "month" => Ok(ReportPeriod::Monthly),
            _ => Err(format!("Invalid report period: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Totals and daily averages.
    Summary,
    /// Requirement comparison with recommendations.
    Full,
}

/// Report body whose shape is owned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionReport {
    pub kind: ReportKind,
    pub period: ReportPeriod,
    pub body: serde_json::Value,
}

impl NutritionReport {
    /// Top-level scalar fields, for a compact listing.
    pub fn headline(&self) -> Vec<(String, String)> {
        match &self.body {
            serde_json::Value::Object(map) => map
                .iter()
                .filter_map(|(key, value)| match value {
                    serde_json::Value::String(s) => Some((key.clone(), s.clone())),
                    serde_json::Value::Number(n) => Some((key.clone(), n.to_string())),
                    serde_json::Value::Bool(b) => Some((key.clone(), b.to_string())),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        }
    }
}
