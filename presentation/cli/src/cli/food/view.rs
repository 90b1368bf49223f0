use chrono::NaiveDate;

use business::domain::food::expiry::ExpiryStatus;
use business::domain::food::feedback::FeedbackReceipt;
use business::domain::food::gateway::FoodOptions;
use business::domain::food::inventory::{InventoryRow, InventoryStats};
use business::domain::food::model::{FoodRecord, PredictionHistoryEntry};
use business::domain::food::use_cases::predict::PredictionReport;
use business::domain::shared::dates::{PLACEHOLDER, or_placeholder, to_iso};

use crate::cli::table::Table;

fn date_text(date: Option<NaiveDate>) -> String {
    or_placeholder(date.map(to_iso))
}

/// Human phrasing of a days-left figure.
pub fn days_text(days: Option<i64>) -> String {
    match days {
        None => PLACEHOLDER.to_string(),
        Some(0) => "today".to_string(),
        Some(1) => "1 day left".to_string(),
        Some(-1) => "expired 1 day ago".to_string(),
        Some(n) if n < 0 => format!("expired {} days ago", -n),
        Some(n) => format!("{} days left", n),
    }
}

fn status_text(row: &InventoryRow) -> String {
    if row.future_purchase {
        return match row.days_until_purchase {
            Some(days) => format!("purchase in {}d", days),
            None => "upcoming purchase".to_string(),
        };
    }
    match row.status {
        ExpiryStatus::Expired => "expired",
        ExpiryStatus::ExpiringSoon => "expiring soon",
        ExpiryStatus::Normal => "ok",
        ExpiryStatus::Unknown => "unknown",
    }
    .to_string()
}

fn history_line(entry: &PredictionHistoryEntry) -> String {
    let mut line = format!(
        "    {}  baseline {}  final {}",
        entry.recorded_at.format("%Y-%m-%d %H:%M"),
        date_text(entry.baseline_expiry_date),
        date_text(entry.final_expiry_date),
    );
    if entry.personalization_enabled {
        line.push_str(&format!(
            "  personalized {}",
            date_text(entry.personalized_expiry_date)
        ));
    }
    if entry.printed_cap_applied {
        line.push_str("  (capped by printed date)");
    }
    line
}

pub fn inventory(rows: &[InventoryRow]) -> String {
    if rows.is_empty() {
        return "No food items yet.".to_string();
    }

    let mut table = Table::new(&[
        "ID", "NAME", "CATEGORY", "STORAGE", "PURCHASED", "EXPIRES", "DAYS LEFT", "STATUS",
        "PRIORITY",
    ]);
    for row in rows {
        let record = &row.record;
        table.row(vec![
            record.id.to_string(),
            record.display_name().to_string(),
            record.category.clone(),
            record.storage_type.to_string(),
            date_text(record.purchase_date),
            date_text(record.effective_expiry()),
            or_placeholder(row.days_left),
            status_text(row),
            or_placeholder(row.priority),
        ]);
    }

    let mut output = table.render();
    for row in rows.iter().filter(|row| !row.history.is_empty()) {
        output.push_str(&format!("\n\n{} history:", row.record.display_name()));
        for entry in &row.history {
            output.push('\n');
            output.push_str(&history_line(entry));
        }
    }
    output
}

pub fn stats(stats: &InventoryStats) -> String {
    format!(
        "Total items:    {}\nExpiring soon:  {}\nExpired:        {}\nNo prediction:  {}",
        stats.total, stats.expiring_soon, stats.expired, stats.unknown
    )
}

pub fn record(action: &str, record: &FoodRecord) -> String {
    format!(
        "{} {} (id {}): {} x{}, {}, purchased {}, expires {}",
        action,
        record.display_name(),
        record.id,
        record.category,
        record.quantity,
        record.storage_type,
        date_text(record.purchase_date),
        date_text(record.effective_expiry()),
    )
}

fn field(label: &str, value: String) -> String {
    format!("  {:<22}{}", label, value)
}

pub fn prediction(report: &PredictionReport) -> String {
    let outcome = &report.outcome;
    let summary = &report.summary;
    let mut lines = vec![format!(
        "Prediction for {} ({})",
        outcome.item_name, outcome.category
    )];

    lines.push(field(
        "Baseline expiry:",
        format!(
            "{} ({})",
            date_text(summary.baseline_expiry_date),
            days_text(summary.days_left_from_baseline)
        ),
    ));
    lines.push(field(
        "Personalized expiry:",
        match summary.personalized_expiry_date {
            Some(date) => format!(
                "{} ({})",
                to_iso(date),
                days_text(summary.days_left_from_personalized)
            ),
            None if summary.feedback_needed > 0 => format!(
                "{} ({} more feedback needed)",
                PLACEHOLDER, summary.feedback_needed
            ),
            None => PLACEHOLDER.to_string(),
        },
    ));
    lines.push(field("Final expiry:", date_text(summary.final_expiry_date)));
    lines.push(field("Priority:", or_placeholder(summary.priority)));
    if summary.printed_cap_applied {
        lines.push("  Final date capped by the printed expiry date.".to_string());
    }
    if let Some(message) = &outcome.message {
        lines.push(format!("  {}", message));
    }
    lines.join("\n")
}

pub fn receipt(receipt: &FeedbackReceipt) -> String {
    let mut lines = vec![format!(
        "Feedback recorded for {} ({}): {}/{}",
        receipt.item_name,
        receipt.category,
        receipt.item_feedback_count,
        receipt.min_required_feedback
    )];
    if receipt.personalization_activated_now {
        lines.push("Personalized predictions are now active for this item.".to_string());
    } else if receipt.personalization_active() {
        lines.push("Personalized predictions are active for this item.".to_string());
    } else {
        lines.push(format!(
            "{} more feedback needed before predictions are personalized.",
            receipt.feedback_needed
        ));
    }
    if let Some(message) = &receipt.message {
        lines.push(message.clone());
    }
    lines.join("\n")
}

pub fn options(options: &FoodOptions) -> String {
    let items = if options.items.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        options.items.join(", ")
    };
    format!(
        "Items:      {}\nCategories: {}",
        items,
        options.categories.join(", ")
    )
}
