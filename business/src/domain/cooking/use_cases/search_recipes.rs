use async_trait::async_trait;

use crate::domain::cooking::errors::CookingError;
use crate::domain::cooking::model::RecipeSearch;

pub struct SearchRecipesParams {
    pub ingredients: Vec<String>,
}

#[async_trait]
pub trait SearchRecipesUseCase: Send + Sync {
    async fn execute(&self, params: SearchRecipesParams) -> Result<RecipeSearch, CookingError>;
}
