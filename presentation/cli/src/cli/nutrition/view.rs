use business::domain::nutrition::model::{
    FoodMatch, LoggedIntake, NutritionProfile, NutritionReport, ReportKind,
};
use business::domain::shared::dates::{PLACEHOLDER, or_placeholder, to_iso};

use crate::cli::table::Table;

pub fn matches(matches: &[FoodMatch]) -> String {
    if matches.is_empty() {
        return "No matching foods.".to_string();
    }
    let mut table = Table::new(&["ID", "FOOD", "SERVING", "GRAMS"]);
    for item in matches {
        table.row(vec![
            or_placeholder(item.food_id.as_deref()),
            item.food_name.clone(),
            or_placeholder(item.serving_basis.as_deref()),
            or_placeholder(item.serving_size_g),
        ]);
    }
    table.render()
}

pub fn profile(profile: &NutritionProfile) -> String {
    let conditions = if profile.conditions.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        profile.conditions.join(", ")
    };
    format!(
        "User:        {}\nAge:         {}\nGroup:       {}\nConditions:  {}",
        profile.user_id,
        or_placeholder(profile.age),
        profile.group,
        conditions
    )
}

pub fn intake(logged: &LoggedIntake) -> String {
    format!(
        "Logged {} x{} for {} on {}",
        logged.entry.food_name,
        logged.entry.quantity,
        logged.entry.user_id,
        to_iso(logged.entry.date)
    )
}

pub fn conditions(conditions: &[String]) -> String {
    if conditions.is_empty() {
        return "No conditions available.".to_string();
    }
    conditions.join("\n")
}

/// Scalar headline fields first, then the full body as indented JSON.
pub fn report(report: &NutritionReport) -> String {
    let title = match report.kind {
        ReportKind::Summary => "Intake summary",
        ReportKind::Full => "Nutrition report",
    };
    let mut lines = vec![format!("{} ({}, {} days)", title, report.period, report.period.days())];
    let headline = report.headline();
    for (key, value) in &headline {
        lines.push(format!("  {}: {}", key, value));
    }
    if report.kind == ReportKind::Full || headline.is_empty() {
        lines.push(serde_json::to_string_pretty(&report.body).unwrap_or_default());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::nutrition::model::{PopulationGroup, ReportPeriod};
    use business::domain::shared::value_objects::UserId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn should_render_profile_with_placeholders() {
        let output = profile(&NutritionProfile {
            user_id: UserId::new("U001"),
            age: None,
            group: PopulationGroup::Pregnant,
            conditions: vec![],
        });

        assert_eq!(
            output,
            "User:        U001\nAge:         —\nGroup:       pregnant\nConditions:  —"
        );
    }

    #[test]
    fn should_list_summary_headline_only() {
        let output = report(&NutritionReport {
            kind: ReportKind::Summary,
            period: ReportPeriod::Weekly,
            body: json!({"user_id": "U001", "entries": 5, "totals": {"energy_kcal": 9800}}),
        });

        assert_eq!(
            output,
            "Intake summary (weekly, 7 days)\n  entries: 5\n  user_id: U001"
        );
    }

    #[test]
    fn should_render_match_table() {
        let output = matches(&[FoodMatch {
            food_id: Some("12".to_string()),
            food_name: "Kiribath".to_string(),
            serving_basis: None,
            serving_size_g: Some(250.0),
        }]);

        assert_eq!(output.lines().nth(1), Some("12  Kiribath  —        250"));
    }
}
