use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use business::domain::errors::GatewayError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping::gateway::ShoppingGateway;
use business::domain::shopping::model::{
    CHAT_CONTEXT, ChatMessage, ChatReply, MealPlan, NeedsForecast, RecommendationRequest,
    SearchFilters, SearchHistoryEntry, SearchQuery, SearchResults, ShoppingProduct,
};

use crate::client::BackendClient;
use crate::wire::{self, Fields};

pub struct ShoppingGatewayHttp {
    client: BackendClient,
}

impl ShoppingGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct SearchBody<'a> {
    query: &'a str,
    filters: Value,
    currency: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
struct SaveHistoryBody<'a> {
    user_id: &'a str,
    query: &'a str,
    filters: Value,
}

#[derive(Debug, Serialize)]
struct RecommendationsBody<'a> {
    preferences: Value,
    search_history: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<f64>,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatBody<'a> {
    message: &'a str,
    user_id: &'a str,
    context: &'a str,
}

/// Filters in the shape the backend merges with its own query analysis.
pub(crate) fn filters_to_wire(filters: &SearchFilters) -> Value {
    let mut wire = serde_json::Map::new();
    if let Some((min, max)) = filters.price_range {
        let max = if max == f64::MAX { Value::Null } else { json!(max) };
        wire.insert("priceRange".to_string(), json!([min, max]));
    }
    if let Some(category) = &filters.category {
        wire.insert("category".to_string(), json!(category));
    }
    if let Some(rating) = filters.min_rating {
        wire.insert("minRating".to_string(), json!(rating));
    }
    Value::Object(wire)
}

/// Unwraps `{"status": ..., "data": ...}`; an `error` status becomes a rejection.
pub(crate) fn envelope_data(body: &Value) -> Result<&Value, GatewayError> {
    if body.get("status").and_then(Value::as_str) == Some("error") {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request failed");
        return Err(GatewayError::rejected(200, message));
    }
    Ok(body.get("data").unwrap_or(body))
}

pub(crate) fn product_from_wire(value: &Value) -> Option<ShoppingProduct> {
    let fields = Fields::of(value).ok()?;
    let name = fields.text(&["name", "title"])?;
    Some(ShoppingProduct {
        id: fields
            .text(&["id", "_id"])
            .unwrap_or_else(|| name.clone()),
        name,
        price: fields.number(&["price"]),
        currency: fields.text(&["currency"]),
        rating: fields.number(&["rating"]),
        category: fields.text(&["category"]),
        platform: fields.text(&["platform", "source"]),
        url: fields.text(&["url"]),
        image: fields.text(&["image"]),
        availability: fields.text(&["availability"]),
        recommendation_score: fields.number(&["recommendation_score", "score"]),
        recommendation_reason: fields.text(&["aiReason", "ai_reason"]),
    })
}

fn products_from(value: Option<&Value>) -> Vec<ShoppingProduct> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(product_from_wire).collect())
        .unwrap_or_default()
}

pub(crate) fn results_from_response(
    body: &Value,
    query: &str,
) -> Result<SearchResults, GatewayError> {
    let data = envelope_data(body)?;
    let products = products_from(data.get("products"));
    Ok(SearchResults {
        query: wire::text(data.get("query")).unwrap_or_else(|| query.to_string()),
        total: wire::integer(data.get("total"))
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(products.len()),
        products,
    })
}

pub(crate) fn history_entry_from_wire(value: &Value) -> Option<SearchHistoryEntry> {
    let fields = Fields::of(value).ok()?;
    Some(SearchHistoryEntry {
        id: fields.text(&["_id", "id"]),
        query: fields.text(&["query"])?,
        results_count: fields.count(&["results_count"]),
        searched_at: wire::timestamp(fields.get(&["timestamp", "created_at"])),
    })
}

pub(crate) fn history_from_response(body: &Value) -> Result<Vec<SearchHistoryEntry>, GatewayError> {
    let data = envelope_data(body)?;
    Ok(data
        .as_array()
        .map(|entries| entries.iter().filter_map(history_entry_from_wire).collect())
        .unwrap_or_default())
}

pub(crate) fn reply_from_response(body: &Value) -> Result<ChatReply, GatewayError> {
    let data = envelope_data(body)?;
    Ok(ChatReply {
        response: wire::text(data.get("response")).unwrap_or_default(),
        replied_at: wire::timestamp(data.get("timestamp")),
    })
}

/// Reads `{"success": true, "prediction": {...}}`; a missing prediction is `None`.
pub(crate) fn forecast_from_response(body: &Value) -> Result<Option<NeedsForecast>, GatewayError> {
    wire::ensure_success(body)?;
    let Some(prediction) = body.get("prediction").filter(|p| p.is_object()) else {
        return Ok(None);
    };
    let fields = Fields::of(prediction)?;
    let meal_plan = fields
        .get(&["meal_plan"])
        .and_then(|plan| Fields::of(plan).ok())
        .map(|plan| MealPlan {
            breakfast: plan.text(&["breakfast"]),
            lunch: plan.text(&["lunch"]),
            dinner: plan.text(&["dinner"]),
        });
    Ok(Some(NeedsForecast {
        preferences: wire::strings(fields.get(&["preferences"])),
        weekend_habit: fields.text(&["weekend_habit"]),
        seasonal_prediction: fields.text(&["seasonal_prediction"]),
        meal_plan,
        reasoning: fields.text(&["reasoning"]),
    }))
}

#[async_trait]
impl ShoppingGateway for ShoppingGatewayHttp {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("shopping/search"))
                    .json(&SearchBody {
                        query: &query.query,
                        filters: filters_to_wire(&query.filters),
                        currency: query.currency.as_str(),
                        user_id: query.user_id.as_str(),
                    }),
            )
            .await?;
        results_from_response(&body, &query.query)
    }

    async fn history(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<SearchHistoryEntry>, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .get(self.client.url("shopping/history"))
                    .query(&[("user_id", user_id.to_string()), ("limit", limit.to_string())]),
            )
            .await?;
        history_from_response(&body)
    }

    async fn save_history(
        &self,
        user_id: &UserId,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<SearchHistoryEntry, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("shopping/history"))
                    .json(&SaveHistoryBody {
                        user_id: user_id.as_str(),
                        query,
                        filters: filters_to_wire(filters),
                    }),
            )
            .await?;
        let data = envelope_data(&body)?;
        Ok(history_entry_from_wire(data).unwrap_or_else(|| SearchHistoryEntry {
            id: None,
            query: query.to_string(),
            results_count: 0,
            searched_at: None,
        }))
    }

    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ShoppingProduct>, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("shopping/recommendations"))
                    .json(&RecommendationsBody {
                        preferences: json!({ "keywords": request.keywords }),
                        search_history: &request.search_history,
                        budget: request.budget,
                        currency: request.currency.as_str(),
                        category: request.category.as_deref(),
                    }),
            )
            .await?;
        let data = envelope_data(&body)?;
        Ok(products_from(data.get("recommendations")))
    }

    async fn chat(&self, message: &ChatMessage) -> Result<ChatReply, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("shopping/chat"))
                    .json(&ChatBody {
                        message: &message.message,
                        user_id: message.user_id.as_str(),
                        context: CHAT_CONTEXT,
                    }),
            )
            .await?;
        reply_from_response(&body)
    }

    async fn predict_needs(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NeedsForecast>, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .get(self.client.url("shopping/predict-needs"))
                    .query(&[("user_id", user_id.as_str())]),
            )
            .await?;
        forecast_from_response(&body)
    }
}
