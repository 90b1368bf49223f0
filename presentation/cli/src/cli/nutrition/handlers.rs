use std::sync::Arc;

use business::domain::nutrition::model::ReportKind;
use business::domain::nutrition::use_cases::conditions::ListConditionsUseCase;
use business::domain::nutrition::use_cases::log_intake::{LogIntakeParams, LogIntakeUseCase};
use business::domain::nutrition::use_cases::profile::{
    ManageNutritionProfileUseCase, ManageProfileParams,
};
use business::domain::nutrition::use_cases::report::{
    GetNutritionReportParams, GetNutritionReportUseCase,
};
use business::domain::nutrition::use_cases::search_foods::{
    SearchNutritionFoodsParams, SearchNutritionFoodsUseCase,
};
use business::domain::session::model::Session;

use crate::cli::alert::{Alert, IntoAlert};
use crate::cli::nutrition::args::{NutritionCommand, ProfileAction};
use crate::cli::nutrition::view;

pub struct NutritionHandlers {
    search_foods_use_case: Arc<dyn SearchNutritionFoodsUseCase>,
    log_intake_use_case: Arc<dyn LogIntakeUseCase>,
    profile_use_case: Arc<dyn ManageNutritionProfileUseCase>,
    conditions_use_case: Arc<dyn ListConditionsUseCase>,
    report_use_case: Arc<dyn GetNutritionReportUseCase>,
}

impl NutritionHandlers {
    pub fn new(
        search_foods_use_case: Arc<dyn SearchNutritionFoodsUseCase>,
        log_intake_use_case: Arc<dyn LogIntakeUseCase>,
        profile_use_case: Arc<dyn ManageNutritionProfileUseCase>,
        conditions_use_case: Arc<dyn ListConditionsUseCase>,
        report_use_case: Arc<dyn GetNutritionReportUseCase>,
    ) -> Self {
        Self {
            search_foods_use_case,
            log_intake_use_case,
            profile_use_case,
            conditions_use_case,
            report_use_case,
        }
    }

    pub async fn run(&self, command: NutritionCommand, session: &Session) -> Result<String, Alert> {
        match command {
            NutritionCommand::Search { query, limit } => {
                let matches = self
                    .search_foods_use_case
                    .execute(SearchNutritionFoodsParams { query, limit })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::matches(&matches))
            }
            NutritionCommand::Log {
                food_id,
                name,
                quantity,
                date,
            } => {
                let logged = self
                    .log_intake_use_case
                    .execute(LogIntakeParams {
                        user_id: session.user_id.clone(),
                        food_id,
                        food_name: name,
                        quantity,
                        date,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::intake(&logged))
            }
            NutritionCommand::Profile { action } => {
                let params = match action {
                    ProfileAction::Show => ManageProfileParams::Get {
                        user_id: session.user_id.clone(),
                    },
                    ProfileAction::Set {
                        age,
                        group,
                        conditions,
                    } => ManageProfileParams::Save {
                        user_id: session.user_id.clone(),
                        age,
                        group: group.into(),
                        conditions,
                    },
                };
                let profile = self
                    .profile_use_case
                    .execute(params)
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::profile(&profile))
            }
            NutritionCommand::Conditions => {
                let conditions = self
                    .conditions_use_case
                    .execute()
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::conditions(&conditions))
            }
            NutritionCommand::Report { period, full } => {
                let report = self
                    .report_use_case
                    .execute(GetNutritionReportParams {
                        user_id: session.user_id.clone(),
                        period: period.into(),
                        kind: if full {
                            ReportKind::Full
                        } else {
                            ReportKind::Summary
                        },
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::report(&report))
            }
        }
    }
}
