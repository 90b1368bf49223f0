#[derive(Debug, thiserror::Error)]
pub enum CookingError {
    #[error("cooking.ingredients_empty")]
    IngredientsEmpty,
    #[error("cooking.image_type_unsupported")]
    ImageTypeUnsupported,
    #[error("cooking.image_empty")]
    ImageEmpty,
    #[error("cooking.meal_plan_empty")]
    MealPlanEmpty,
    #[error("cooking.people_not_positive")]
    PeopleNotPositive,
    #[error(transparent)]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
