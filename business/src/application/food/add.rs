use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::gateway::FoodGateway;
use crate::domain::food::model::{FoodRecord, NewFood, NewFoodProps};
use crate::domain::food::use_cases::add::{AddFoodParams, AddFoodUseCase};
use crate::domain::logger::Logger;

pub struct AddFoodUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFoodUseCase for AddFoodUseCaseImpl {
    async fn execute(&self, params: AddFoodParams) -> Result<FoodRecord, FoodError> {
        self.logger
            .info(&format!("Adding food to inventory: {}", params.food_name));

        let food = NewFood::new(NewFoodProps {
            user_id: params.user_id,
            food_name: params.food_name,
            item_name: params.item_name,
            category: params.category,
            storage_type: params.storage_type,
            purchase_date: params.purchase_date,
            printed_expiry_date: params.printed_expiry_date,
            quantity: params.quantity,
            used_before_expiry: params.used_before_expiry,
        })?;

        let record = self.gateway.create(&food).await?;

        self.logger
            .info(&format!("Food added with id: {}", record.id));
        Ok(record)
    }
}
