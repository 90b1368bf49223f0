use chrono::{DateTime, NaiveTime, Timelike, Utc};

use super::errors::ShoppingError;
use crate::domain::shared::value_objects::UserId;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// ISO 4217 style three-letter code, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Result<Self, ShoppingError> {
        let code = code.trim().to_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ShoppingError::CurrencyInvalid);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub price_range: Option<(f64, f64)>,
    pub category: Option<String>,
    pub min_rating: Option<f64>,
}

impl SearchFilters {
    pub fn new(
        min_price: Option<f64>,
        max_price: Option<f64>,
        category: Option<String>,
        min_rating: Option<f64>,
    ) -> Result<Self, ShoppingError> {
        let price_range = match (min_price, max_price) {
            (None, None) => None,
            (min, max) => {
                let min = min.unwrap_or(0.0);
                let max = max.unwrap_or(f64::MAX);
                if !min.is_finite() || min < 0.0 || max.is_nan() || min > max {
                    return Err(ShoppingError::PriceRangeInvalid);
                }
                Some((min, max))
            }
        };
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            price_range,
            category,
            min_rating,
        })
    }
}

/// A product offer from one of the aggregated platforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingProduct {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub availability: Option<String>,
    pub recommendation_score: Option<f64>,
    pub recommendation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub user_id: UserId,
    pub query: String,
    pub filters: SearchFilters,
    pub currency: Currency,
}

impl SearchQuery {
    pub fn new(
        user_id: UserId,
        query: &str,
        filters: SearchFilters,
        currency: Currency,
    ) -> Result<Self, ShoppingError> {
        if user_id.is_empty() {
            return Err(ShoppingError::UserRequired);
        }
        let query = query.trim();
        if query.is_empty() {
            return Err(ShoppingError::QueryEmpty);
        }
        Ok(Self {
            user_id,
            query: query.to_string(),
            filters,
            currency,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub products: Vec<ShoppingProduct>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHistoryEntry {
    pub id: Option<String>,
    pub query: String,
    pub results_count: u32,
    pub searched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationRequest {
    pub keywords: Vec<String>,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub currency: Currency,
    /// Recent queries, newest first.
    pub search_history: Vec<String>,
}

/// Orders products by recommendation score, unscored last.
pub fn rank_by_score(products: &mut [ShoppingProduct]) {
    products.sort_by(|a, b| {
        let a_score = a.recommendation_score.unwrap_or(f64::NEG_INFINITY);
        let b_score = b.recommendation_score.unwrap_or(f64::NEG_INFINITY);
        b_score.total_cmp(&a_score)
    });
}

/// Shown when the assistant answers with nothing.
pub const CHAT_FALLBACK_REPLY: &str =
    "I can help you with that! Let me find the best options for you.";

/// Context sent with every message so the assistant answers as a shopping helper.
pub const CHAT_CONTEXT: &str = "shopping assistant";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub user_id: UserId,
    pub message: String,
}

impl ChatMessage {
    pub fn new(user_id: UserId, message: &str) -> Result<Self, ShoppingError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ShoppingError::MessageEmpty);
        }
        Ok(Self {
            user_id,
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub replied_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    /// Breakfast before 11:00, lunch before 16:00, dinner after.
    pub fn next_after(time: NaiveTime) -> Self {
        match time.hour() {
            0..=10 => Meal::Breakfast,
            11..=15 => Meal::Lunch,
            _ => Meal::Dinner,
        }
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meal::Breakfast => write!(f, "Breakfast"),
            Meal::Lunch => write!(f, "Lunch"),
            Meal::Dinner => write!(f, "Dinner"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl MealPlan {
    pub fn meal(&self, meal: Meal) -> Option<&str> {
        match meal {
            Meal::Breakfast => self.breakfast.as_deref(),
            Meal::Lunch => self.lunch.as_deref(),
            Meal::Dinner => self.dinner.as_deref(),
        }
    }
}

/// Tomorrow's needs as predicted from the user's search history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeedsForecast {
    pub preferences: Vec<String>,
    pub weekend_habit: Option<String>,
    pub seasonal_prediction: Option<String>,
    pub meal_plan: Option<MealPlan>,
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    /// `None` until the user has searched enough for a prediction.
    pub forecast: Option<NeedsForecast>,
    pub next_meal: Meal,
}
