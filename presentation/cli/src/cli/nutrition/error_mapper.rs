use business::domain::nutrition::errors::NutritionError;

use crate::cli::alert::{Alert, IntoAlert};

impl IntoAlert for NutritionError {
    fn into_alert(self) -> Alert {
        match self {
            NutritionError::UserRequired => Alert::validation("a user id is required"),
            NutritionError::FoodRequired => Alert::validation("food id and name are required"),
            NutritionError::QuantityNotPositive => {
                Alert::validation("quantity must be greater than 0")
            }
            NutritionError::DateInvalid => Alert::validation("date must be a real YYYY-MM-DD date"),
            NutritionError::AgeInvalid => Alert::validation("age must be between 1 and 120"),
            NutritionError::Gateway(err) => err.into_alert(),
        }
    }
}
