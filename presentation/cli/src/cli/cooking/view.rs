use business::domain::cooking::model::{GroceryList, ImageAnalysisReport, RecipeSearch};
use business::domain::shared::dates::or_placeholder;

use crate::cli::table::Table;

pub fn recipes(search: &RecipeSearch) -> String {
    let header = format!(
        "{} recipe(s) for: {}",
        search.total_found,
        search.ingredients.join(", ")
    );
    if search.recipes.is_empty() {
        return format!("{}\nNo recipes found.", header);
    }

    let mut table = Table::new(&["NAME", "CUISINE", "MATCH", "TIME", "DIFFICULTY", "SERVES", "MISSING"]);
    for recipe in &search.recipes {
        table.row(vec![
            recipe.name.clone(),
            or_placeholder(recipe.cuisine.as_deref()),
            or_placeholder(recipe.match_score.map(|s| format!("{:.0}%", s))),
            or_placeholder(recipe.cooking_time.as_deref()),
            or_placeholder(recipe.difficulty.as_deref()),
            or_placeholder(recipe.servings),
            if recipe.missing_ingredients.is_empty() {
                "nothing".to_string()
            } else {
                recipe.missing_ingredients.join(", ")
            },
        ]);
    }
    format!("{}\n{}", header, table.render())
}

pub fn analysis(report: &ImageAnalysisReport) -> String {
    let mut output = if report.analysis.ingredients.is_empty() {
        "No ingredients detected.".to_string()
    } else {
        format!("Detected: {}", report.analysis.ingredients.join(", "))
    };
    if let Some(message) = &report.analysis.message {
        output.push_str(&format!("\n{}", message));
    }
    if let Some(search) = &report.recipes {
        output.push_str("\n\n");
        output.push_str(&recipes(search));
    }
    output
}

fn quantity_text(quantity: Option<f64>) -> String {
    // Whole amounts print without decimals.
    or_placeholder(quantity.map(|q| {
        if q.fract() == 0.0 {
            format!("{:.0}", q)
        } else {
            format!("{:.2}", q)
        }
    }))
}

pub fn grocery_list(list: &GroceryList) -> String {
    if list.sections.is_empty() {
        return "Nothing to buy.".to_string();
    }

    let mut output = format!(
        "Grocery list for {} people ({} items)",
        list.num_people, list.total_items
    );
    for section in &list.sections {
        let mut table = Table::new(&["ITEM", "QTY", "UNIT"]);
        for item in &section.items {
            table.row(vec![
                item.item.clone(),
                quantity_text(item.quantity),
                or_placeholder(item.unit.as_deref()),
            ]);
        }
        output.push_str(&format!("\n\n{}\n{}", section.name.to_uppercase(), table.render()));
    }
    output
}
