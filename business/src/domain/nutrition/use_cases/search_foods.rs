use async_trait::async_trait;

use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::model::FoodMatch;

pub struct SearchNutritionFoodsParams {
    pub query: String,
    pub limit: Option<usize>,
}

#[async_trait]
pub trait SearchNutritionFoodsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchNutritionFoodsParams,
    ) -> Result<Vec<FoodMatch>, NutritionError>;
}
