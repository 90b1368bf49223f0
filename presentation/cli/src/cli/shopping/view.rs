use business::domain::shared::dates::or_placeholder;
use business::domain::shopping::model::{
    ChatReply, ForecastReport, Meal, SearchHistoryEntry, SearchResults, ShoppingProduct,
};

use crate::cli::table::Table;

fn price_text(product: &ShoppingProduct) -> String {
    match (product.price, product.currency.as_deref()) {
        (Some(price), Some(currency)) => format!("{:.2} {}", price, currency),
        (Some(price), None) => format!("{:.2}", price),
        (None, _) => or_placeholder::<f64>(None),
    }
}

pub fn products(products: &[ShoppingProduct]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }
    let mut table = Table::new(&["NAME", "PRICE", "RATING", "STORE", "SCORE", "URL"]);
    for product in products {
        table.row(vec![
            product.name.clone(),
            price_text(product),
            or_placeholder(product.rating),
            or_placeholder(product.platform.as_deref()),
            or_placeholder(product.recommendation_score.map(|s| format!("{:.0}", s))),
            or_placeholder(product.url.as_deref()),
        ]);
    }

    let mut output = table.render();
    let reasons: Vec<String> = products
        .iter()
        .filter_map(|p| {
            p.recommendation_reason
                .as_deref()
                .map(|reason| format!("  {}: {}", p.name, reason))
        })
        .collect();
    if !reasons.is_empty() {
        output.push_str("\n\nWhy:\n");
        output.push_str(&reasons.join("\n"));
    }
    output
}

pub fn results(results: &SearchResults) -> String {
    format!(
        "{} result(s) for \"{}\"\n{}",
        results.total,
        results.query,
        products(&results.products)
    )
}

pub fn history(entries: &[SearchHistoryEntry]) -> String {
    if entries.is_empty() {
        return "No searches yet.".to_string();
    }
    let mut table = Table::new(&["WHEN", "QUERY", "RESULTS"]);
    for entry in entries {
        table.row(vec![
            or_placeholder(entry.searched_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string())),
            entry.query.clone(),
            entry.results_count.to_string(),
        ]);
    }
    table.render()
}

pub fn saved(entry: &SearchHistoryEntry) -> String {
    format!("Saved search \"{}\"", entry.query)
}

pub fn chat(reply: &ChatReply) -> String {
    match reply.replied_at {
        Some(at) => format!("[{}] {}", at.format("%H:%M"), reply.response),
        None => reply.response.clone(),
    }
}

pub fn forecast(report: &ForecastReport) -> String {
    let Some(forecast) = &report.forecast else {
        return "No prediction yet. Start searching to get personalized predictions.".to_string();
    };

    let mut lines = Vec::new();
    if !forecast.preferences.is_empty() {
        lines.push(format!("Likely needs: {}", forecast.preferences.join(", ")));
    }
    if let Some(habit) = &forecast.weekend_habit {
        lines.push(format!("Weekend: {}", habit));
    }
    if let Some(season) = &forecast.seasonal_prediction {
        lines.push(format!("Season: {}", season));
    }
    if let Some(plan) = &forecast.meal_plan {
        lines.push("Meal plan:".to_string());
        for meal in [Meal::Breakfast, Meal::Lunch, Meal::Dinner] {
            let marker = if meal == report.next_meal { " (next)" } else { "" };
            lines.push(format!(
                "  {}{}: {}",
                meal,
                marker,
                or_placeholder(plan.meal(meal))
            ));
        }
    }
    if let Some(reasoning) = &forecast.reasoning {
        lines.push(format!("Why: {}", reasoning));
    }
    if lines.is_empty() {
        return "Prediction is empty. Keep searching to sharpen it.".to_string();
    }
    lines.join("\n")
}
