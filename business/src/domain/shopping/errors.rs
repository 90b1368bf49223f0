#[derive(Debug, thiserror::Error)]
pub enum ShoppingError {
    #[error("shopping.user_required")]
    UserRequired,
    #[error("shopping.query_empty")]
    QueryEmpty,
    #[error("shopping.price_range_invalid")]
    PriceRangeInvalid,
    #[error("shopping.budget_not_positive")]
    BudgetNotPositive,
    #[error("shopping.currency_invalid")]
    CurrencyInvalid,
    #[error("shopping.message_empty")]
    MessageEmpty,
    #[error(transparent)]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
