use clap::{Subcommand, ValueEnum};

use business::domain::nutrition::model::{PopulationGroup, ReportPeriod};

#[derive(Debug, Subcommand)]
pub enum NutritionCommand {
    /// Search the nutrition food catalogue
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Log something you ate
    Log {
        /// Catalogue id from `nutrition search`
        food_id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = 1.0)]
        quantity: f64,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show or change the nutrition profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// List the health conditions the backend knows
    Conditions,
    /// Intake summary, or the full requirement report with --full
    Report {
        #[arg(long, value_enum, default_value_t = PeriodArg::Weekly)]
        period: PeriodArg,
        #[arg(long)]
        full: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    Show,
    Set {
        #[arg(long)]
        age: Option<u32>,
        #[arg(long, value_enum, default_value_t = GroupArg::Male)]
        group: GroupArg,
        /// Repeat for several conditions
        #[arg(long = "condition")]
        conditions: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    Male,
    Female,
    Pregnant,
    Lactating,
}

impl From<GroupArg> for PopulationGroup {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Male => PopulationGroup::Male,
            GroupArg::Female => PopulationGroup::Female,
            GroupArg::Pregnant => PopulationGroup::Pregnant,
            GroupArg::Lactating => PopulationGroup::Lactating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Weekly,
    Monthly,
}

impl From<PeriodArg> for ReportPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Weekly => ReportPeriod::Weekly,
            PeriodArg::Monthly => ReportPeriod::Monthly,
        }
    }
}
