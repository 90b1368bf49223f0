use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::gateway::ShoppingGateway;
use crate::domain::shopping::model::{Currency, SearchQuery, SearchResults};
use crate::domain::shopping::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub gateway: Arc<dyn ShoppingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<SearchResults, ShoppingError> {
        let currency = match params.currency.as_deref() {
            Some(code) => Currency::new(code)?,
            None => Currency::default(),
        };
        let query = SearchQuery::new(params.user_id, &params.query, params.filters, currency)?;

        self.logger.info(&format!(
            "Searching products for {}: '{}' in {}",
            query.user_id, query.query, query.currency
        ));

        let results = self.gateway.search(&query).await?;

        self.logger
            .info(&format!("Found {} products", results.products.len()));
        Ok(results)
    }
}
