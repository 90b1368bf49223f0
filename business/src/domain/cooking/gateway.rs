use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{GroceryList, GroceryListRequest, ImageAnalysis, ImageUpload, RecipeSearch};

/// Port to the cooking-assistant resource family of the backend.
#[async_trait]
pub trait CookingGateway: Send + Sync {
    async fn analyze_image(&self, image: &ImageUpload) -> Result<ImageAnalysis, GatewayError>;
    async fn search_recipes(&self, ingredients: &[String]) -> Result<RecipeSearch, GatewayError>;
    async fn grocery_list(
        &self,
        request: &GroceryListRequest,
    ) -> Result<GroceryList, GatewayError>;
}
