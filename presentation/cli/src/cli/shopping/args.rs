use clap::{Args, Subcommand};

use business::domain::shopping::errors::ShoppingError;
use business::domain::shopping::model::SearchFilters;

#[derive(Debug, Subcommand)]
pub enum ShoppingCommand {
    /// Search products across the connected stores
    Search {
        query: String,
        #[command(flatten)]
        filters: FilterArgs,
        /// ISO currency code, e.g. LKR
        #[arg(long)]
        currency: Option<String>,
        /// Also record the search in your history
        #[arg(long)]
        save: bool,
    },
    /// Show your recent searches, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Record a search in your history without running it
    Save {
        query: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Product recommendations from keywords and your search history
    Recommend {
        keywords: Vec<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        budget: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Ask the shopping assistant a question
    Chat {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Forecast what you are likely to need next
    Forecast,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub min_rating: Option<f64>,
}

impl TryFrom<FilterArgs> for SearchFilters {
    type Error = ShoppingError;

    fn try_from(args: FilterArgs) -> Result<Self, Self::Error> {
        SearchFilters::new(args.min_price, args.max_price, args.category, args.min_rating)
    }
}
