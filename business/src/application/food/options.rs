use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::gateway::{FoodGateway, FoodOptions};
use crate::domain::food::use_cases::options::GetFoodOptionsUseCase;
use crate::domain::food::value_objects::FOOD_CATEGORIES;
use crate::domain::logger::Logger;

pub struct GetFoodOptionsUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub logger: Arc<dyn Logger>,
}

fn fallback_options() -> FoodOptions {
    FoodOptions {
        items: vec![],
        categories: FOOD_CATEGORIES.iter().map(|c| c.to_string()).collect(),
    }
}

#[async_trait]
impl GetFoodOptionsUseCase for GetFoodOptionsUseCaseImpl {
    async fn execute(&self) -> FoodOptions {
        match self.gateway.options().await {
            Ok(options) if options.categories.is_empty() => FoodOptions {
                categories: fallback_options().categories,
                ..options
            },
            Ok(options) => options,
            Err(err) => {
                self.logger.warn(&format!(
                    "Food options unavailable, using built-in categories: {}",
                    err
                ));
                fallback_options()
            }
        }
    }
}
