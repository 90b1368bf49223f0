use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cooking::errors::CookingError;
use crate::domain::cooking::gateway::CookingGateway;
use crate::domain::cooking::model::{RecipeSearch, normalize_ingredients, rank_by_match};
use crate::domain::cooking::use_cases::search_recipes::{SearchRecipesParams, SearchRecipesUseCase};
use crate::domain::logger::Logger;

pub struct SearchRecipesUseCaseImpl {
    pub gateway: Arc<dyn CookingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchRecipesUseCase for SearchRecipesUseCaseImpl {
    async fn execute(&self, params: SearchRecipesParams) -> Result<RecipeSearch, CookingError> {
        let ingredients = normalize_ingredients(&params.ingredients);
        if ingredients.is_empty() {
            return Err(CookingError::IngredientsEmpty);
        }

        self.logger
            .info(&format!("Searching recipes for: {}", ingredients.join(", ")));

        let mut search = self.gateway.search_recipes(&ingredients).await?;
        rank_by_match(&mut search.recipes);
        if search.ingredients.is_empty() {
            search.ingredients = ingredients;
        }
        Ok(search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cooking::model::{
        GroceryList, GroceryListRequest, ImageAnalysis, ImageUpload, Recipe,
    };
    use crate::domain::errors::GatewayError;
    use mockall::mock;

    mock! {
        pub CookingGw {}

        #[async_trait]
        impl CookingGateway for CookingGw {
            async fn analyze_image(&self, image: &ImageUpload) -> Result<ImageAnalysis, GatewayError>;
            async fn search_recipes(&self, ingredients: &[String]) -> Result<RecipeSearch, GatewayError>;
            async fn grocery_list(&self, request: &GroceryListRequest) -> Result<GroceryList, GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn recipe(id: &str, score: f64) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {}", id),
            cuisine: Some("Indian".to_string()),
            source: None,
            match_score: Some(score),
            matched_ingredients: vec!["rice".to_string()],
            missing_ingredients: vec![],
            cooking_time: None,
            difficulty: None,
            servings: None,
        }
    }

    #[tokio::test]
    async fn should_search_with_normalized_ingredients_and_rank_results() {
        let mut mock_gateway = MockCookingGw::new();
        mock_gateway
            .expect_search_recipes()
            .withf(|ingredients| ingredients.to_vec() == ["rice", "dal", "onion"])
            .times(1)
            .returning(|_| {
                Ok(RecipeSearch {
                    ingredients: vec![],
                    recipes: vec![recipe("r1", 40.0), recipe("r2", 90.0)],
                    total_found: 2,
                })
            });

        let use_case = SearchRecipesUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let search = use_case
            .execute(SearchRecipesParams {
                ingredients: vec!["Rice, Dal".to_string(), " onion ".to_string(), "rice".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(search.recipes[0].id, "r2");
        assert_eq!(search.ingredients, vec!["rice", "dal", "onion"]);
        assert_eq!(search.total_found, 2);
    }

    #[tokio::test]
    async fn should_reject_empty_ingredient_list() {
        let mut mock_gateway = MockCookingGw::new();
        mock_gateway.expect_search_recipes().never();

        let use_case = SearchRecipesUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchRecipesParams {
                ingredients: vec![" , ".to_string()],
            })
            .await;

        assert!(matches!(result.unwrap_err(), CookingError::IngredientsEmpty));
    }

    #[tokio::test]
    async fn should_propagate_gateway_rejection() {
        let mut mock_gateway = MockCookingGw::new();
        mock_gateway
            .expect_search_recipes()
            .returning(|_| Err(GatewayError::rejected(500, "Recipe database not loaded")));

        let use_case = SearchRecipesUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchRecipesParams {
                ingredients: vec!["rice".to_string()],
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CookingError::Gateway(GatewayError::Rejected { status: 500, .. })
        ));
    }
}
