use std::sync::Arc;

use business::domain::food::inventory::InventoryView;
use business::domain::food::use_cases::add::{AddFoodParams, AddFoodUseCase};
use business::domain::food::use_cases::delete::{DeleteFoodParams, DeleteFoodUseCase};
use business::domain::food::use_cases::feedback::{SubmitFeedbackParams, SubmitFeedbackUseCase};
use business::domain::food::use_cases::list_inventory::{
    ListInventoryParams, ListInventoryUseCase,
};
use business::domain::food::use_cases::options::GetFoodOptionsUseCase;
use business::domain::food::use_cases::predict::{PredictExpiryParams, PredictExpiryUseCase};
use business::domain::food::use_cases::stats::{InventoryStatsParams, InventoryStatsUseCase};
use business::domain::food::use_cases::update::{UpdateFoodParams, UpdateFoodUseCase};
use business::domain::session::model::Session;
use business::domain::shared::value_objects::FoodId;

use crate::cli::alert::{Alert, IntoAlert};
use crate::cli::food::args::{FoodCommand, ListArgs};
use crate::cli::food::view;

pub struct FoodHandlers {
    list_inventory_use_case: Arc<dyn ListInventoryUseCase>,
    add_use_case: Arc<dyn AddFoodUseCase>,
    predict_use_case: Arc<dyn PredictExpiryUseCase>,
    update_use_case: Arc<dyn UpdateFoodUseCase>,
    delete_use_case: Arc<dyn DeleteFoodUseCase>,
    feedback_use_case: Arc<dyn SubmitFeedbackUseCase>,
    options_use_case: Arc<dyn GetFoodOptionsUseCase>,
    stats_use_case: Arc<dyn InventoryStatsUseCase>,
}

impl FoodHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        list_inventory_use_case: Arc<dyn ListInventoryUseCase>,
        add_use_case: Arc<dyn AddFoodUseCase>,
        predict_use_case: Arc<dyn PredictExpiryUseCase>,
        update_use_case: Arc<dyn UpdateFoodUseCase>,
        delete_use_case: Arc<dyn DeleteFoodUseCase>,
        feedback_use_case: Arc<dyn SubmitFeedbackUseCase>,
        options_use_case: Arc<dyn GetFoodOptionsUseCase>,
        stats_use_case: Arc<dyn InventoryStatsUseCase>,
    ) -> Self {
        Self {
            list_inventory_use_case,
            add_use_case,
            predict_use_case,
            update_use_case,
            delete_use_case,
            feedback_use_case,
            options_use_case,
            stats_use_case,
        }
    }

    pub async fn run(&self, command: FoodCommand, session: &Session) -> Result<String, Alert> {
        match command {
            FoodCommand::List(args) => {
                let rows = self
                    .list_inventory_use_case
                    .execute(ListInventoryParams {
                        view: inventory_view(&args, session),
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::inventory(&rows))
            }
            FoodCommand::Add(args) => {
                let record = self
                    .add_use_case
                    .execute(AddFoodParams {
                        user_id: session.user_id.clone(),
                        food_name: args.name,
                        item_name: args.item,
                        category: args.category,
                        storage_type: args.storage.into(),
                        purchase_date: args.purchased,
                        printed_expiry_date: args.printed_date,
                        quantity: args.quantity,
                        used_before_expiry: args.used_before_expiry,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::record("Added", &record))
            }
            FoodCommand::Predict(args) => {
                let report = self
                    .predict_use_case
                    .execute(PredictExpiryParams {
                        food_id: FoodId::new(args.id.trim()),
                        user_id: session.user_id.clone(),
                        printed_expiry_date: args.printed_date_choice(),
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::prediction(&report))
            }
            FoodCommand::Edit(args) => {
                let id = FoodId::new(args.id.trim());
                let record = self
                    .update_use_case
                    .execute(UpdateFoodParams {
                        id,
                        changes: args.into(),
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::record("Updated", &record))
            }
            FoodCommand::Delete { id } => {
                let id = FoodId::new(id.trim());
                self.delete_use_case
                    .execute(DeleteFoodParams { id: id.clone() })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(format!("Deleted food item {}", id))
            }
            FoodCommand::Feedback(args) => {
                let receipt = self
                    .feedback_use_case
                    .execute(SubmitFeedbackParams {
                        food_id: FoodId::new(args.id.trim()),
                        user_id: session.user_id.clone(),
                        kind: args.kind.into(),
                        actual_days: args.actual_days,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::receipt(&receipt))
            }
            FoodCommand::Options => Ok(view::options(&self.options_use_case.execute().await)),
            FoodCommand::Stats { mine } => {
                let stats = self
                    .stats_use_case
                    .execute(InventoryStatsParams {
                        view: InventoryView {
                            only_user: mine.then(|| session.user_id.clone()),
                            ..InventoryView::default()
                        },
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::stats(&stats))
            }
        }
    }
}

fn inventory_view(args: &ListArgs, session: &Session) -> InventoryView {
    InventoryView {
        prefer_server_days_left: args.server_days_left,
        history_limit: args.history,
        only_user: args.mine.then(|| session.user_id.clone()),
    }
}
