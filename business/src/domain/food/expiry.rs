use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::shared::dates::days_left;

/// Items with this many days left or fewer are flagged as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Display bucket for an item's expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Expiry day has passed.
    Expired,
    /// Expires today or within the next three days.
    ExpiringSoon,
    Normal,
    /// No predicted expiry date yet.
    Unknown,
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryStatus::Expired => write!(f, "expired"),
            ExpiryStatus::ExpiringSoon => write!(f, "expiring_soon"),
            ExpiryStatus::Normal => write!(f, "normal"),
            ExpiryStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Buckets an already computed days-left value.
///
/// Business rules:
/// - below 0 -> Expired
/// - 0 to 3 -> ExpiringSoon
/// - 4 and above -> Normal
pub fn status_for_days_left(days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= EXPIRING_SOON_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Normal
    }
}

/// Classifies a predicted expiry date relative to `now`.
pub fn classify(now: NaiveDateTime, expiry: Option<NaiveDate>) -> ExpiryStatus {
    match expiry {
        Some(date) => status_for_days_left(days_left(now, date)),
        None => ExpiryStatus::Unknown,
    }
}
