use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cooking::errors::CookingError;
use crate::domain::cooking::gateway::CookingGateway;
use crate::domain::cooking::model::{GroceryList, GroceryListRequest};
use crate::domain::cooking::use_cases::grocery_list::{
    GenerateGroceryListParams, GenerateGroceryListUseCase,
};
use crate::domain::logger::Logger;

pub struct GenerateGroceryListUseCaseImpl {
    pub gateway: Arc<dyn CookingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateGroceryListUseCase for GenerateGroceryListUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateGroceryListParams,
    ) -> Result<GroceryList, CookingError> {
        let request = GroceryListRequest::new(params.meals, params.num_people.unwrap_or(1))?;

        self.logger.info(&format!(
            "Generating grocery list for {} meal(s), {} people",
            request.meal_plan.len(),
            request.num_people
        ));

        let mut list = self.gateway.grocery_list(&request).await?;
        if list.total_items == 0 {
            list.total_items = list.sections.iter().map(|s| s.items.len()).sum();
        }
        if list.num_people == 0 {
            list.num_people = request.num_people;
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cooking::model::{
        GroceryItem, GrocerySection, ImageAnalysis, ImageUpload, RecipeSearch,
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

    fn item(name: &str) -> GroceryItem {
        GroceryItem {
            item: name.to_string(),
            quantity: Some(2.0),
            unit: Some("cups".to_string()),
        }
    }

    #[tokio::test]
    async fn should_default_to_one_person_and_fill_totals() {
        let mut mock_gateway = MockCookingGw::new();
        mock_gateway
            .expect_grocery_list()
            .withf(|request| request.num_people == 1 && request.meal_plan == ["Chicken curry"])
            .times(1)
            .returning(|_| {
                Ok(GroceryList {
                    sections: vec![
                        GrocerySection {
                            name: "Produce".to_string(),
                            items: vec![item("onion"), item("tomato")],
                        },
                        GrocerySection {
                            name: "Meat".to_string(),
                            items: vec![item("chicken")],
                        },
                    ],
                    total_items: 0,
                    num_people: 0,
                })
            });

        let use_case = GenerateGroceryListUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(GenerateGroceryListParams {
                meals: vec!["Chicken curry".to_string()],
                num_people: None,
            })
            .await
            .unwrap();

        assert_eq!(list.total_items, 3);
        assert_eq!(list.num_people, 1);
    }

    #[tokio::test]
    async fn should_reject_zero_people() {
        let mut mock_gateway = MockCookingGw::new();
        mock_gateway.expect_grocery_list().never();

        let use_case = GenerateGroceryListUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateGroceryListParams {
                meals: vec!["Dhal".to_string()],
                num_people: Some(0),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CookingError::PeopleNotPositive));
    }

    #[tokio::test]
    async fn should_reject_empty_meal_plan() {
        let mut mock_gateway = MockCookingGw::new();
        mock_gateway.expect_grocery_list().never();

        let use_case = GenerateGroceryListUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateGroceryListParams {
                meals: vec![],
                num_people: Some(4),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CookingError::MealPlanEmpty));
    }
}
