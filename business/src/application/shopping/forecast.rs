use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::gateway::ShoppingGateway;
use crate::domain::shopping::model::{ForecastReport, Meal};
use crate::domain::shopping::use_cases::forecast::{ForecastNeedsParams, ForecastNeedsUseCase};

pub struct ForecastNeedsUseCaseImpl {
    pub gateway: Arc<dyn ShoppingGateway>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ForecastNeedsUseCase for ForecastNeedsUseCaseImpl {
    async fn execute(&self, params: ForecastNeedsParams) -> Result<ForecastReport, ShoppingError> {
        if params.user_id.is_empty() {
            return Err(ShoppingError::UserRequired);
        }

        self.logger
            .info(&format!("Forecasting needs for {}", params.user_id));
        let forecast = self.gateway.predict_needs(&params.user_id).await?;
        if forecast.is_none() {
            self.logger.info("No forecast yet; the user has no search history");
        }

        Ok(ForecastReport {
            forecast,
            next_meal: Meal::next_after(self.clock.now().time()),
        })
    }
}
