use business::domain::cooking::errors::CookingError;

use crate::cli::alert::{Alert, IntoAlert};

impl IntoAlert for CookingError {
    fn into_alert(self) -> Alert {
        match self {
            CookingError::IngredientsEmpty => Alert::validation("at least one ingredient is required"),
            CookingError::ImageTypeUnsupported => {
                Alert::validation("invalid file type; only PNG, JPG, JPEG and GIF are allowed")
            }
            CookingError::ImageEmpty => Alert::validation("the image file is empty"),
            CookingError::MealPlanEmpty => Alert::validation("at least one meal is required"),
            CookingError::PeopleNotPositive => {
                Alert::validation("number of people must be at least 1")
            }
            CookingError::Gateway(err) => err.into_alert(),
        }
    }
}
