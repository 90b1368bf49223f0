use async_trait::async_trait;

use crate::domain::cooking::errors::CookingError;
use crate::domain::cooking::model::GroceryList;

pub struct GenerateGroceryListParams {
    pub meals: Vec<String>,
    pub num_people: Option<u32>,
}

#[async_trait]
pub trait GenerateGroceryListUseCase: Send + Sync {
    async fn execute(&self, params: GenerateGroceryListParams)
    -> Result<GroceryList, CookingError>;
}
