#[derive(Debug, thiserror::Error)]
pub enum NutritionError {
    #[error("nutrition.user_required")]
    UserRequired,
    #[error("nutrition.food_required")]
    FoodRequired,
    #[error("nutrition.quantity_not_positive")]
    QuantityNotPositive,
    #[error("nutrition.date_invalid")]
    DateInvalid,
    #[error("nutrition.age_invalid")]
    AgeInvalid,
    #[error(transparent)]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
