use business::domain::food::errors::FoodError;

use crate::cli::alert::{Alert, IntoAlert};

impl IntoAlert for FoodError {
    fn into_alert(self) -> Alert {
        match self {
            FoodError::UserRequired => Alert::validation("a user id is required"),
            FoodError::NameEmpty => Alert::validation("food name is required"),
            FoodError::ItemNameEmpty => Alert::validation("item name is required"),
            FoodError::CategoryEmpty => Alert::validation("category is required"),
            FoodError::PurchaseDateInvalid => {
                Alert::validation("purchase date must be a real YYYY-MM-DD date")
            }
            FoodError::PrintedExpiryDateInvalid => {
                Alert::validation("printed expiry date must be a real YYYY-MM-DD date")
            }
            FoodError::QuantityNotPositive => Alert::validation("quantity must be greater than 0"),
            FoodError::ActualDaysNotPositive => {
                Alert::validation("actual days must be greater than 0")
            }
            FoodError::NothingToUpdate => Alert::validation("nothing to change"),
            FoodError::NotFound => Alert::new("NotFound", "food item not found"),
            FoodError::Gateway(err) => err.into_alert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::GatewayError;

    #[test]
    fn should_map_validation_errors() {
        let alert = FoodError::PurchaseDateInvalid.into_alert();

        assert_eq!(alert.name, "ValidationError");
        assert_eq!(alert.to_string(), "purchase date must be a real YYYY-MM-DD date");
    }

    #[test]
    fn should_pass_backend_rejection_through() {
        let alert = FoodError::Gateway(GatewayError::rejected(400, "Missing purchase_date"))
            .into_alert();

        assert_eq!(alert.to_string(), "Missing purchase_date");
    }
}
