use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::gateway::ShoppingGateway;
use crate::domain::shopping::model::{
    Currency, RecommendationRequest, ShoppingProduct, rank_by_score,
};
use crate::domain::shopping::use_cases::recommendations::{
    GetRecommendationsParams, GetRecommendationsUseCase,
};

const HISTORY_CONTEXT: usize = 10;

pub struct GetRecommendationsUseCaseImpl {
    pub gateway: Arc<dyn ShoppingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecommendationsUseCase for GetRecommendationsUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecommendationsParams,
    ) -> Result<Vec<ShoppingProduct>, ShoppingError> {
        if params.budget.is_some_and(|b| !b.is_finite() || b <= 0.0) {
            return Err(ShoppingError::BudgetNotPositive);
        }
        let currency = match params.currency.as_deref() {
            Some(code) => Currency::new(code)?,
            None => Currency::default(),
        };

        // Recommendations still work without history context.
        let search_history = match self.gateway.history(&params.user_id, HISTORY_CONTEXT).await {
            Ok(entries) => entries.into_iter().map(|e| e.query).collect(),
            Err(err) => {
                self.logger
                    .warn(&format!("Search history unavailable for recommendations: {}", err));
                vec![]
            }
        };

        let request = RecommendationRequest {
            keywords: params
                .keywords
                .into_iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
            category: params
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            budget: params.budget,
            currency,
            search_history,
        };

        let mut products = self.gateway.recommendations(&request).await?;
        rank_by_score(&mut products);

        self.logger
            .info(&format!("Received {} recommendations", products.len()));
        Ok(products)
    }
}
