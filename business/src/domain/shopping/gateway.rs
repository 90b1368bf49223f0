use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::UserId;

use super::model::{
    ChatMessage, ChatReply, NeedsForecast, RecommendationRequest, SearchFilters,
    SearchHistoryEntry, SearchQuery, SearchResults, ShoppingProduct,
};

/// Port to the smart-shopping resource family of the backend.
#[async_trait]
pub trait ShoppingGateway: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, GatewayError>;
    async fn history(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<SearchHistoryEntry>, GatewayError>;
    async fn save_history(
        &self,
        user_id: &UserId,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<SearchHistoryEntry, GatewayError>;
    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ShoppingProduct>, GatewayError>;
    async fn chat(&self, message: &ChatMessage) -> Result<ChatReply, GatewayError>;
    /// `None` when the backend has no prediction for the user yet.
    async fn predict_needs(&self, user_id: &UserId)
    -> Result<Option<NeedsForecast>, GatewayError>;
}
