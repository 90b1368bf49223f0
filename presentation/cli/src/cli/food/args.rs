use clap::{Args, Subcommand, ValueEnum};

use business::domain::food::model::FoodChangesProps;
use business::domain::food::use_cases::predict::PrintedDateChoice;
use business::domain::food::value_objects::{FeedbackKind, StorageType};

#[derive(Debug, Subcommand)]
pub enum FoodCommand {
    /// List the inventory, soonest expiry first
    List(ListArgs),
    /// Add an item to the inventory
    Add(AddFoodArgs),
    /// Run the expiry prediction for an item
    Predict(PredictArgs),
    /// Change the descriptive fields of an item
    Edit(EditFoodArgs),
    /// Remove an item
    Delete {
        id: String,
    },
    /// Report when an item actually spoiled
    Feedback(FeedbackArgs),
    /// Show the item keys and categories the backend knows
    Options,
    /// Count items by expiry status
    Stats {
        /// Only the current user's items
        #[arg(long)]
        mine: bool,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only the current user's items
    #[arg(long)]
    pub mine: bool,
    /// Show the backend's days-left instead of computing it locally
    #[arg(long)]
    pub server_days_left: bool,
    /// Prediction history entries shown per item
    #[arg(long, default_value_t = 0)]
    pub history: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageArg {
    Fridge,
    Freezer,
    Pantry,
}

impl From<StorageArg> for StorageType {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Fridge => StorageType::Fridge,
            StorageArg::Freezer => StorageType::Freezer,
            StorageArg::Pantry => StorageType::Pantry,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddFoodArgs {
    /// Display name, e.g. "Mum's curry"
    #[arg(long)]
    pub name: String,
    /// Item key the prediction model knows, e.g. "whole milk"
    #[arg(long)]
    pub item: String,
    #[arg(long)]
    pub category: String,
    #[arg(long, value_enum, default_value_t = StorageArg::Pantry)]
    pub storage: StorageArg,
    /// Purchase date, YYYY-MM-DD
    #[arg(long)]
    pub purchased: String,
    /// Expiry date printed on the package, YYYY-MM-DD
    #[arg(long)]
    pub printed_date: Option<String>,
    #[arg(long, default_value_t = 1.0)]
    pub quantity: f64,
    #[arg(long)]
    pub used_before_expiry: bool,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    pub id: String,
    /// Cap the prediction against this printed date, YYYY-MM-DD
    #[arg(long, conflicts_with = "no_printed_date")]
    pub printed_date: Option<String>,
    /// The package has no printed date
    #[arg(long)]
    pub no_printed_date: bool,
}

impl PredictArgs {
    pub fn printed_date_choice(&self) -> PrintedDateChoice {
        match (&self.printed_date, self.no_printed_date) {
            (_, true) => PrintedDateChoice::Omit,
            (Some(date), false) => PrintedDateChoice::Replace(date.clone()),
            (None, false) => PrintedDateChoice::UseStored,
        }
    }
}

#[derive(Debug, Args)]
pub struct EditFoodArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub item: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, value_enum)]
    pub storage: Option<StorageArg>,
    #[arg(long)]
    pub purchased: Option<String>,
    /// New printed date; an empty value clears it
    #[arg(long)]
    pub printed_date: Option<String>,
    #[arg(long)]
    pub quantity: Option<f64>,
    #[arg(long)]
    pub used_before_expiry: Option<bool>,
}

impl From<EditFoodArgs> for FoodChangesProps {
    fn from(args: EditFoodArgs) -> Self {
        FoodChangesProps {
            food_name: args.name,
            item_name: args.item,
            category: args.category,
            storage_type: args.storage.map(StorageType::from),
            purchase_date: args.purchased,
            quantity: args.quantity,
            used_before_expiry: args.used_before_expiry,
            printed_expiry_date: args.printed_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedbackKindArg {
    Early,
    OnTime,
    Late,
}

impl From<FeedbackKindArg> for FeedbackKind {
    fn from(arg: FeedbackKindArg) -> Self {
        match arg {
            FeedbackKindArg::Early => FeedbackKind::Early,
            FeedbackKindArg::OnTime => FeedbackKind::OnTime,
            FeedbackKindArg::Late => FeedbackKind::Late,
        }
    }
}

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    pub id: String,
    #[arg(value_enum)]
    pub kind: FeedbackKindArg,
    /// Days the item actually lasted after purchase
    #[arg(long)]
    pub actual_days: f64,
}
