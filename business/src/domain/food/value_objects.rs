use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Categories offered when the backend cannot supply its own list.
pub const FOOD_CATEGORIES: [&str; 9] = [
    "dairy",
    "meat",
    "fish",
    "fruit",
    "vegetable",
    "grain",
    "snack",
    "beverage",
    "other",
];

static WHITESPACE_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Fridge,
    Freezer,
    #[default]
    Pantry,
}

impl StorageType {
    /// Reads free-form input, falling back to the pantry for anything unknown.
    pub fn from_lenient(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::Fridge => write!(f, "fridge"),
            StorageType::Freezer => write!(f, "freezer"),
            StorageType::Pantry => write!(f, "pantry"),
        }
    }
}

impl std::str::FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fridge" => Ok(StorageType::Fridge),
            "freezer" => Ok(StorageType::Freezer),
            "pantry" => Ok(StorageType::Pantry),
            _ => Err(format!("Invalid storage type: {}", s)),
        }
    }
}

/// How the real spoilage compared with the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Early,
    OnTime,
    Late,
}

impl std::fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackKind::Early => write!(f, "early"),
            FeedbackKind::OnTime => write!(f, "on_time"),
            FeedbackKind::Late => write!(f, "late"),
        }
    }
}

impl std::str::FromStr for FeedbackKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "early" => Ok(FeedbackKind::Early),
            "on_time" => Ok(FeedbackKind::OnTime),
            "late" => Ok(FeedbackKind::Late),
            _ => Err(format!("Invalid feedback kind: {}", s)),
        }
    }
}

/// Normalizes a model item key: lowercase, single spaces turned into underscores.
///
/// `"  Whole   Milk "` becomes `"whole_milk"`.
pub fn canonical_item_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    WHITESPACE_RUN
        .as_ref()
        .map(|re| re.replace_all(&lowered, "_").into_owned())
        .unwrap_or(lowered)
}

pub fn canonical_category(name: &str) -> String {
    name.trim().to_lowercase()
}
