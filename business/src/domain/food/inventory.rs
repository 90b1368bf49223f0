use chrono::NaiveDateTime;

use super::expiry::{ExpiryStatus, classify, status_for_days_left};
use super::model::{FoodRecord, PredictionHistoryEntry};
use super::priority::PriorityLabel;
use crate::domain::shared::dates::days_left;
use crate::domain::shared::value_objects::UserId;

/// Options for rendering the inventory.
///
/// Earlier inventory screens differed only in these switches; one
/// annotation pass serves all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    /// Use the backend's `daysLeft` when it is present instead of deriving it.
    pub prefer_server_days_left: bool,
    /// Maximum prediction history entries kept per row, newest first.
    pub history_limit: usize,
    /// Restrict the rows to one user's records.
    pub only_user: Option<UserId>,
}

impl Default for InventoryView {
    fn default() -> Self {
        Self {
            prefer_server_days_left: false,
            history_limit: 5,
            only_user: None,
        }
    }
}

/// A record annotated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub record: FoodRecord,
    pub status: ExpiryStatus,
    pub days_left: Option<i64>,
    pub priority: Option<PriorityLabel>,
    /// Purchase date lies in the future; the backend has no priority for it yet.
    pub future_purchase: bool,
    pub days_until_purchase: Option<i64>,
    pub history: Vec<PredictionHistoryEntry>,
}

/// Annotates records and orders them by effective expiry, undated last.
pub fn annotate_inventory(
    records: Vec<FoodRecord>,
    now: NaiveDateTime,
    view: &InventoryView,
) -> Vec<InventoryRow> {
    let today = now.date();
    let mut rows: Vec<InventoryRow> = records
        .into_iter()
        .filter(|record| {
            view.only_user
                .as_ref()
                .is_none_or(|user| &record.user_id == user)
        })
        .map(|record| {
            let expiry = record.effective_expiry();
            let server_days = record.days_left.filter(|_| view.prefer_server_days_left);
            let (days_left, status) = match server_days {
                Some(days) if expiry.is_some() => (Some(days), status_for_days_left(days)),
                _ => (expiry.map(|date| days_left(now, date)), classify(now, expiry)),
            };
            let future_purchase = record.is_future_purchase(today);
            let days_until_purchase = if future_purchase {
                record.days_until_purchase(today)
            } else {
                None
            };
            let history = record
                .history_newest_first()
                .into_iter()
                .take(view.history_limit)
                .cloned()
                .collect();

            InventoryRow {
                priority: PriorityLabel::from_score(record.scp_priority_score),
                status,
                days_left,
                future_purchase,
                days_until_purchase,
                history,
                record,
            }
        })
        .collect();

    rows.sort_by_key(|row| (row.record.effective_expiry().is_none(), row.record.effective_expiry()));
    rows
}

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub unknown: usize,
}

impl InventoryStats {
    pub fn from_rows(rows: &[InventoryRow]) -> Self {
        rows.iter().fold(
            InventoryStats {
                total: rows.len(),
                ..Default::default()
            },
            |mut stats, row| {
                match row.status {
                    ExpiryStatus::ExpiringSoon => stats.expiring_soon += 1,
                    ExpiryStatus::Expired => stats.expired += 1,
                    ExpiryStatus::Unknown => stats.unknown += 1,
                    ExpiryStatus::Normal => {}
                }
                stats
            },
        )
    }
}
