use std::sync::Arc;

use anyhow::Context;
use backend_api::{
    BackendClient, CookingGatewayHttp, FoodGatewayHttp, NutritionGatewayHttp, ShoppingGatewayHttp,
};
use logger::TracingLogger;
use persistence::session::store::SessionStoreJsonFile;

use business::application::cooking::analyze_image::AnalyzeImageUseCaseImpl;
use business::application::cooking::grocery_list::GenerateGroceryListUseCaseImpl;
use business::application::cooking::search_recipes::SearchRecipesUseCaseImpl;
use business::application::food::add::AddFoodUseCaseImpl;
use business::application::food::delete::DeleteFoodUseCaseImpl;
use business::application::food::feedback::SubmitFeedbackUseCaseImpl;
use business::application::food::list_inventory::ListInventoryUseCaseImpl;
use business::application::food::options::GetFoodOptionsUseCaseImpl;
use business::application::food::predict::PredictExpiryUseCaseImpl;
use business::application::food::stats::InventoryStatsUseCaseImpl;
use business::application::food::update::UpdateFoodUseCaseImpl;
use business::application::nutrition::conditions::ListConditionsUseCaseImpl;
use business::application::nutrition::log_intake::LogIntakeUseCaseImpl;
use business::application::nutrition::profile::ManageNutritionProfileUseCaseImpl;
use business::application::nutrition::report::GetNutritionReportUseCaseImpl;
use business::application::nutrition::search_foods::SearchNutritionFoodsUseCaseImpl;
use business::application::session::resolve::ResolveSessionUseCaseImpl;
use business::application::session::switch_user::SwitchUserUseCaseImpl;
use business::application::shopping::chat::ChatWithAssistantUseCaseImpl;
use business::application::shopping::forecast::ForecastNeedsUseCaseImpl;
use business::application::shopping::history::GetShoppingHistoryUseCaseImpl;
use business::application::shopping::recommendations::GetRecommendationsUseCaseImpl;
use business::application::shopping::save_search::SaveSearchUseCaseImpl;
use business::application::shopping::search::SearchProductsUseCaseImpl;
use business::domain::clock::SystemClock;

use crate::cli::cooking::handlers::CookingHandlers;
use crate::cli::food::handlers::FoodHandlers;
use crate::cli::nutrition::handlers::NutritionHandlers;
use crate::cli::session::handlers::SessionHandlers;
use crate::cli::shopping::handlers::ShoppingHandlers;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub food: FoodHandlers,
    pub nutrition: NutritionHandlers,
    pub shopping: ShoppingHandlers,
    pub cooking: CookingHandlers,
    pub session: SessionHandlers,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let clock = Arc::new(SystemClock);

        // Infrastructure adapters
        let backend_client = BackendClient::new(&config.backend.api_url, config.backend.timeout)
            .context("cannot set up the HTTP client")?;
        let food_gateway = Arc::new(FoodGatewayHttp::new(backend_client.clone()));
        let nutrition_gateway = Arc::new(NutritionGatewayHttp::new(backend_client.clone()));
        let shopping_gateway = Arc::new(ShoppingGatewayHttp::new(backend_client.clone()));
        let cooking_gateway = Arc::new(CookingGatewayHttp::new(backend_client));
        let session_store = Arc::new(SessionStoreJsonFile::new(config.session.file.clone()));

        // Food use cases
        let list_inventory_use_case = Arc::new(ListInventoryUseCaseImpl {
            gateway: food_gateway.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddFoodUseCaseImpl {
            gateway: food_gateway.clone(),
            logger: logger.clone(),
        });
        let predict_use_case = Arc::new(PredictExpiryUseCaseImpl {
            gateway: food_gateway.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateFoodUseCaseImpl {
            gateway: food_gateway.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteFoodUseCaseImpl {
            gateway: food_gateway.clone(),
            logger: logger.clone(),
        });
        let feedback_use_case = Arc::new(SubmitFeedbackUseCaseImpl {
            gateway: food_gateway.clone(),
            logger: logger.clone(),
        });
        let options_use_case = Arc::new(GetFoodOptionsUseCaseImpl {
            gateway: food_gateway.clone(),
            logger: logger.clone(),
        });
        let stats_use_case = Arc::new(InventoryStatsUseCaseImpl {
            gateway: food_gateway,
            clock: clock.clone(),
            logger: logger.clone(),
        });

        // Nutrition use cases
        let search_foods_use_case = Arc::new(SearchNutritionFoodsUseCaseImpl {
            gateway: nutrition_gateway.clone(),
            logger: logger.clone(),
        });
        let log_intake_use_case = Arc::new(LogIntakeUseCaseImpl {
            gateway: nutrition_gateway.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let profile_use_case = Arc::new(ManageNutritionProfileUseCaseImpl {
            gateway: nutrition_gateway.clone(),
            logger: logger.clone(),
        });
        let conditions_use_case = Arc::new(ListConditionsUseCaseImpl {
            gateway: nutrition_gateway.clone(),
            logger: logger.clone(),
        });
        let report_use_case = Arc::new(GetNutritionReportUseCaseImpl {
            gateway: nutrition_gateway,
            logger: logger.clone(),
        });

        // Shopping use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            gateway: shopping_gateway.clone(),
            logger: logger.clone(),
        });
        let history_use_case = Arc::new(GetShoppingHistoryUseCaseImpl {
            gateway: shopping_gateway.clone(),
            logger: logger.clone(),
        });
        let save_search_use_case = Arc::new(SaveSearchUseCaseImpl {
            gateway: shopping_gateway.clone(),
            logger: logger.clone(),
        });
        let recommendations_use_case = Arc::new(GetRecommendationsUseCaseImpl {
            gateway: shopping_gateway.clone(),
            logger: logger.clone(),
        });
        let chat_use_case = Arc::new(ChatWithAssistantUseCaseImpl {
            gateway: shopping_gateway.clone(),
            logger: logger.clone(),
        });
        let forecast_use_case = Arc::new(ForecastNeedsUseCaseImpl {
            gateway: shopping_gateway,
            clock,
            logger: logger.clone(),
        });

        // Cooking use cases
        let search_recipes_use_case = Arc::new(SearchRecipesUseCaseImpl {
            gateway: cooking_gateway.clone(),
            logger: logger.clone(),
        });
        let analyze_image_use_case = Arc::new(AnalyzeImageUseCaseImpl {
            gateway: cooking_gateway.clone(),
            logger: logger.clone(),
        });
        let grocery_list_use_case = Arc::new(GenerateGroceryListUseCaseImpl {
            gateway: cooking_gateway,
            logger: logger.clone(),
        });

        // Session use cases
        let resolve_use_case = Arc::new(ResolveSessionUseCaseImpl {
            store: session_store.clone(),
            logger: logger.clone(),
        });
        let switch_user_use_case = Arc::new(SwitchUserUseCaseImpl {
            store: session_store,
            logger,
        });

        Ok(Self {
            food: FoodHandlers::new(
                list_inventory_use_case,
                add_use_case,
                predict_use_case,
                update_use_case,
                delete_use_case,
                feedback_use_case,
                options_use_case,
                stats_use_case,
            ),
            nutrition: NutritionHandlers::new(
                search_foods_use_case,
                log_intake_use_case,
                profile_use_case,
                conditions_use_case,
                report_use_case,
            ),
            shopping: ShoppingHandlers::new(
                search_use_case,
                history_use_case,
                save_search_use_case,
                recommendations_use_case,
                chat_use_case,
                forecast_use_case,
            ),
            cooking: CookingHandlers::new(
                search_recipes_use_case,
                analyze_image_use_case,
                grocery_list_use_case,
            ),
            session: SessionHandlers::new(resolve_use_case, switch_user_use_case),
        })
    }
}
