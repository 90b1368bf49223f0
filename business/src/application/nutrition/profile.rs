use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::gateway::NutritionGateway;
use crate::domain::nutrition::model::NutritionProfile;
use crate::domain::nutrition::use_cases::profile::{
    ManageNutritionProfileUseCase, ManageProfileParams,
};

pub struct ManageNutritionProfileUseCaseImpl {
    pub gateway: Arc<dyn NutritionGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ManageNutritionProfileUseCase for ManageNutritionProfileUseCaseImpl {
    async fn execute(
        &self,
        params: ManageProfileParams,
    ) -> Result<NutritionProfile, NutritionError> {
        match params {
            ManageProfileParams::Get { user_id } => {
                if user_id.is_empty() {
                    return Err(NutritionError::UserRequired);
                }
                Ok(self.gateway.profile(&user_id).await?)
            }
            ManageProfileParams::Save {
                user_id,
                age,
                group,
                conditions,
            } => {
                let profile = NutritionProfile::new(user_id, age, group, conditions)?;
                self.logger.info(&format!(
                    "Saving nutrition profile for {} ({}, {} condition(s))",
                    profile.user_id,
                    profile.group,
                    profile.conditions.len()
                ));
                Ok(self.gateway.save_profile(&profile).await?)
            }
        }
    }
}
