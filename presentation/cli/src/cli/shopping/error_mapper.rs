use business::domain::shopping::errors::ShoppingError;

use crate::cli::alert::{Alert, IntoAlert};

impl IntoAlert for ShoppingError {
    fn into_alert(self) -> Alert {
        match self {
            ShoppingError::UserRequired => Alert::validation("a user id is required"),
            ShoppingError::QueryEmpty => Alert::validation("search query is required"),
            ShoppingError::PriceRangeInvalid => {
                Alert::validation("price range must be non-negative with min <= max")
            }
            ShoppingError::BudgetNotPositive => Alert::validation("budget must be greater than 0"),
            ShoppingError::CurrencyInvalid => {
                Alert::validation("currency must be a three-letter code such as USD")
            }
            ShoppingError::MessageEmpty => Alert::validation("message is required"),
            ShoppingError::Gateway(err) => err.into_alert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::GatewayError;

    #[test]
    fn should_show_backend_error_message() {
        let alert =
            ShoppingError::Gateway(GatewayError::rejected(200, "Search failed")).into_alert();

        assert_eq!(alert.name, "Rejected");
        assert_eq!(alert.to_string(), "Search failed");
    }
}
