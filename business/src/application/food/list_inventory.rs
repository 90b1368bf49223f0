use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food::errors::FoodError;
use crate::domain::food::gateway::FoodGateway;
use crate::domain::food::inventory::{InventoryRow, annotate_inventory};
use crate::domain::food::use_cases::list_inventory::{ListInventoryParams, ListInventoryUseCase};
use crate::domain::logger::Logger;

pub struct ListInventoryUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListInventoryUseCase for ListInventoryUseCaseImpl {
    async fn execute(&self, params: ListInventoryParams) -> Result<Vec<InventoryRow>, FoodError> {
        self.logger.info("Fetching inventory");
        let listing = self.gateway.list().await?;
        if listing.skipped > 0 {
            self.logger.warn(&format!(
                "Skipped {} unreadable food document(s)",
                listing.skipped
            ));
        }
        let records = listing.records;

        let capped_violations = records.iter().filter(|r| !r.respects_safety_cap()).count();
        if capped_violations > 0 {
            self.logger.warn(&format!(
                "{} record(s) have a final expiry after their printed date",
                capped_violations
            ));
        }

        let rows = annotate_inventory(records, self.clock.now(), &params.view);
        self.logger
            .info(&format!("Inventory ready with {} rows", rows.len()));
        Ok(rows)
    }
}
