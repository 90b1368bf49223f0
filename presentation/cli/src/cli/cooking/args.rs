use std::path::PathBuf;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum CookingCommand {
    /// Recipes you can cook with what you have, best match first
    Recipes {
        /// Ingredient names; commas also separate entries
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Detect ingredients in a photo (png, jpg, jpeg or gif)
    Scan {
        image: PathBuf,
        /// Also suggest recipes for the detected ingredients
        #[arg(long)]
        recipes: bool,
    },
    /// Grocery list for a set of planned meals
    Groceries {
        #[arg(required = true)]
        meals: Vec<String>,
        #[arg(long)]
        people: Option<u32>,
    },
}
