#[derive(Debug, thiserror::Error)]
pub enum FoodError {
    #[error("food.user_required")]
    UserRequired,
    #[error("food.name_empty")]
    NameEmpty,
    #[error("food.item_name_empty")]
    ItemNameEmpty,
    #[error("food.category_empty")]
    CategoryEmpty,
    #[error("food.purchase_date_invalid")]
    PurchaseDateInvalid,
    #[error("food.printed_expiry_date_invalid")]
    PrintedExpiryDateInvalid,
    #[error("food.quantity_not_positive")]
    QuantityNotPositive,
    #[error("food.actual_days_not_positive")]
    ActualDaysNotPositive,
    #[error("food.nothing_to_update")]
    NothingToUpdate,
    #[error("food.not_found")]
    NotFound,
    #[error(transparent)]
    Gateway(#[from] crate::domain::errors::GatewayError),
}

impl FoodError {
    /// Maps gateway failures, turning a missing resource into `NotFound`.
    pub fn from_gateway(err: crate::domain::errors::GatewayError) -> Self {
        match err {
            crate::domain::errors::GatewayError::NotFound => FoodError::NotFound,
            other => FoodError::Gateway(other),
        }
    }
}
