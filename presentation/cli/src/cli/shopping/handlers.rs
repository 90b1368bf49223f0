use std::sync::Arc;

use business::domain::session::model::Session;
use business::domain::shopping::model::SearchFilters;
use business::domain::shopping::use_cases::chat::{
    ChatWithAssistantParams, ChatWithAssistantUseCase,
};
use business::domain::shopping::use_cases::forecast::{ForecastNeedsParams, ForecastNeedsUseCase};
use business::domain::shopping::use_cases::history::{
    GetShoppingHistoryParams, GetShoppingHistoryUseCase,
};
use business::domain::shopping::use_cases::recommendations::{
    GetRecommendationsParams, GetRecommendationsUseCase,
};
use business::domain::shopping::use_cases::save_search::{SaveSearchParams, SaveSearchUseCase};
use business::domain::shopping::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

use crate::cli::alert::{Alert, IntoAlert};
use crate::cli::shopping::args::ShoppingCommand;
use crate::cli::shopping::view;

pub struct ShoppingHandlers {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    history_use_case: Arc<dyn GetShoppingHistoryUseCase>,
    save_search_use_case: Arc<dyn SaveSearchUseCase>,
    recommendations_use_case: Arc<dyn GetRecommendationsUseCase>,
    chat_use_case: Arc<dyn ChatWithAssistantUseCase>,
    forecast_use_case: Arc<dyn ForecastNeedsUseCase>,
}

impl ShoppingHandlers {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        history_use_case: Arc<dyn GetShoppingHistoryUseCase>,
        save_search_use_case: Arc<dyn SaveSearchUseCase>,
        recommendations_use_case: Arc<dyn GetRecommendationsUseCase>,
        chat_use_case: Arc<dyn ChatWithAssistantUseCase>,
        forecast_use_case: Arc<dyn ForecastNeedsUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            history_use_case,
            save_search_use_case,
            recommendations_use_case,
            chat_use_case,
            forecast_use_case,
        }
    }

    pub async fn run(&self, command: ShoppingCommand, session: &Session) -> Result<String, Alert> {
        match command {
            ShoppingCommand::Search {
                query,
                filters,
                currency,
                save,
            } => {
                let filters = SearchFilters::try_from(filters).map_err(IntoAlert::into_alert)?;
                let results = self
                    .search_use_case
                    .execute(SearchProductsParams {
                        user_id: session.user_id.clone(),
                        query: query.clone(),
                        filters: filters.clone(),
                        currency,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                let mut output = view::results(&results);
                if save {
                    let entry = self
                        .save_search_use_case
                        .execute(SaveSearchParams {
                            user_id: session.user_id.clone(),
                            query,
                            filters,
                        })
                        .await
                        .map_err(IntoAlert::into_alert)?;
                    output.push_str("\n\n");
                    output.push_str(&view::saved(&entry));
                }
                Ok(output)
            }
            ShoppingCommand::History { limit } => {
                let entries = self
                    .history_use_case
                    .execute(GetShoppingHistoryParams {
                        user_id: session.user_id.clone(),
                        limit,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::history(&entries))
            }
            ShoppingCommand::Save { query, filters } => {
                let filters = SearchFilters::try_from(filters).map_err(IntoAlert::into_alert)?;
                let entry = self
                    .save_search_use_case
                    .execute(SaveSearchParams {
                        user_id: session.user_id.clone(),
                        query,
                        filters,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::saved(&entry))
            }
            ShoppingCommand::Recommend {
                keywords,
                category,
                budget,
                currency,
            } => {
                let products = self
                    .recommendations_use_case
                    .execute(GetRecommendationsParams {
                        user_id: session.user_id.clone(),
                        keywords,
                        category,
                        budget,
                        currency,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::products(&products))
            }
            ShoppingCommand::Chat { message } => {
                let reply = self
                    .chat_use_case
                    .execute(ChatWithAssistantParams {
                        user_id: session.user_id.clone(),
                        message: message.join(" "),
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::chat(&reply))
            }
            ShoppingCommand::Forecast => {
                let report = self
                    .forecast_use_case
                    .execute(ForecastNeedsParams {
                        user_id: session.user_id.clone(),
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::forecast(&report))
            }
        }
    }
}
