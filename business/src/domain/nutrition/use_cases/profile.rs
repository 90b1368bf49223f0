use async_trait::async_trait;

use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::model::{NutritionProfile, PopulationGroup};
use crate::domain::shared::value_objects::UserId;

pub enum ManageProfileParams {
    Get {
        user_id: UserId,
    },
    Save {
        user_id: UserId,
        age: Option<u32>,
        group: PopulationGroup,
        conditions: Vec<String>,
    },
}

#[async_trait]
pub trait ManageNutritionProfileUseCase: Send + Sync {
    async fn execute(&self, params: ManageProfileParams)
    -> Result<NutritionProfile, NutritionError>;
}
