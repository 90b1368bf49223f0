use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::food::errors::FoodError;
use crate::domain::food::gateway::FoodGateway;
use crate::domain::food::inventory::{InventoryStats, annotate_inventory};
use crate::domain::food::use_cases::stats::{InventoryStatsParams, InventoryStatsUseCase};
use crate::domain::logger::Logger;

pub struct InventoryStatsUseCaseImpl {
    pub gateway: Arc<dyn FoodGateway>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InventoryStatsUseCase for InventoryStatsUseCaseImpl {
    async fn execute(&self, params: InventoryStatsParams) -> Result<InventoryStats, FoodError> {
        let listing = self.gateway.list().await?;
        let rows = annotate_inventory(listing.records, self.clock.now(), &params.view);
        let stats = InventoryStats::from_rows(&rows);

        self.logger.debug(&format!(
            "Inventory stats: total={}, soon={}, expired={}, unknown={}",
            stats.total, stats.expiring_soon, stats.expired, stats.unknown
        ));
        Ok(stats)
    }
}
