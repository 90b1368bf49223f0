use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::gateway::NutritionGateway;
use crate::domain::nutrition::model::{DEFAULT_SEARCH_LIMIT, FoodMatch};
use crate::domain::nutrition::use_cases::search_foods::{
    SearchNutritionFoodsParams, SearchNutritionFoodsUseCase,
};

pub struct SearchNutritionFoodsUseCaseImpl {
    pub gateway: Arc<dyn NutritionGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchNutritionFoodsUseCase for SearchNutritionFoodsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchNutritionFoodsParams,
    ) -> Result<Vec<FoodMatch>, NutritionError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }
        let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).max(1);

        self.logger
            .debug(&format!("Searching nutrition foods: '{}' (limit {})", query, limit));
        let mut matches = self.gateway.search_foods(query, limit).await?;
        matches.truncate(limit);
        Ok(matches)
    }
}
