use clap::{Parser, Subcommand};

pub mod alert;
pub mod cooking;
pub mod food;
pub mod nutrition;
pub mod session;
pub mod shopping;
pub mod table;

use cooking::args::CookingCommand;
use food::args::FoodCommand;
use nutrition::args::NutritionCommand;
use session::args::SessionCommand;
use shopping::args::ShoppingCommand;

/// Terminal client for the smart-kitchen backend.
#[derive(Debug, Parser)]
#[command(name = "smart-kitchen", version)]
pub struct Cli {
    /// Backend API root, overrides SMART_KITCHEN_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Act as this user for one command without changing the saved session
    #[arg(long, global = true)]
    pub user: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Food inventory and expiry predictions
    #[command(subcommand)]
    Food(FoodCommand),
    /// Nutrition profile, intake log and reports
    #[command(subcommand)]
    Nutrition(NutritionCommand),
    /// Product search, search history and recommendations
    #[command(subcommand)]
    Shopping(ShoppingCommand),
    /// Recipe search, ingredient photo scanning and grocery lists
    #[command(subcommand)]
    Cooking(CookingCommand),
    /// Who this client acts as
    #[command(subcommand)]
    Session(SessionCommand),
}
