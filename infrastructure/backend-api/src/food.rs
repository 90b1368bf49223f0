use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use business::domain::errors::GatewayError;
use business::domain::food::feedback::{ExpiryFeedback, FeedbackReceipt};
use business::domain::food::gateway::{FoodGateway, FoodListing, FoodOptions};
use business::domain::food::model::{FoodChanges, FoodRecord, NewFood, PredictionHistoryEntry};
use business::domain::food::prediction::{PredictionOutcome, PredictionRequest};
use business::domain::food::value_objects::StorageType;
use business::domain::shared::dates::to_iso;
use business::domain::shared::value_objects::{FoodId, UserId};

use crate::client::BackendClient;
use crate::wire::{self, Fields};

/// `daysLeft` the backend reports for items whose purchase date is still ahead.
const INACTIVE_DAYS_LEFT: i64 = 9999;

pub struct FoodGatewayHttp {
    client: BackendClient,
}

impl FoodGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct CreateFoodBody<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    #[serde(rename = "foodName")]
    food_name: &'a str,
    item_name: &'a str,
    item_category: &'a str,
    storage_type: String,
    purchase_date: String,
    printed_expiry_date: Option<String>,
    quantity: f64,
    used_before_expiry: bool,
}

impl<'a> From<&'a NewFood> for CreateFoodBody<'a> {
    fn from(food: &'a NewFood) -> Self {
        Self {
            user_id: food.user_id.as_str(),
            food_name: &food.food_name,
            item_name: &food.item_name,
            item_category: &food.category,
            storage_type: food.storage_type.to_string(),
            purchase_date: to_iso(food.purchase_date),
            printed_expiry_date: food.printed_expiry_date.map(to_iso),
            quantity: food.quantity,
            used_before_expiry: food.used_before_expiry,
        }
    }
}

/// The printed date is always sent: an empty string tells the backend the
/// package has none, where `null` would make it reuse the stored one.
#[derive(Debug, Serialize)]
struct PredictBody<'a> {
    #[serde(rename = "foodId")]
    food_id: &'a str,
    #[serde(rename = "userId")]
    user_id: &'a str,
    item_name: &'a str,
    item_category: &'a str,
    purchase_date: String,
    printed_expiry_date: String,
    storage_type: String,
    quantity: f64,
    used_before_expiry: bool,
}

impl<'a> From<&'a PredictionRequest> for PredictBody<'a> {
    fn from(request: &'a PredictionRequest) -> Self {
        Self {
            food_id: request.food_id.as_str(),
            user_id: request.user_id.as_str(),
            item_name: &request.item_name,
            item_category: &request.category,
            purchase_date: to_iso(request.purchase_date),
            printed_expiry_date: request
                .printed_expiry_date
                .map(to_iso)
                .unwrap_or_default(),
            storage_type: request.storage_type.to_string(),
            quantity: request.quantity,
            used_before_expiry: request.used_before_expiry,
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct UpdateFoodBody {
    #[serde(rename = "foodName", skip_serializing_if = "Option::is_none")]
    food_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_name: Option<String>,
    #[serde(rename = "item_category", skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    used_before_expiry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    printed_expiry_date: Option<String>,
}

impl From<&FoodChanges> for UpdateFoodBody {
    fn from(changes: &FoodChanges) -> Self {
        Self {
            food_name: changes.food_name.clone(),
            item_name: changes.item_name.clone(),
            category: changes.category.clone(),
            storage_type: changes.storage_type.map(|s| s.to_string()),
            purchase_date: changes.purchase_date.map(to_iso),
            quantity: changes.quantity,
            used_before_expiry: changes.used_before_expiry,
            printed_expiry_date: changes
                .printed_expiry_date
                .map(|date| date.map(to_iso).unwrap_or_default()),
        }
    }
}

#[derive(Debug, Serialize)]
struct FeedbackBody<'a> {
    #[serde(rename = "foodId")]
    food_id: &'a str,
    #[serde(rename = "userId")]
    user_id: &'a str,
    feedback: String,
    actual_days: f64,
}

/// Normalizes one stored food document, whatever key spelling it uses.
pub(crate) fn record_from_document(doc: &Value) -> Result<FoodRecord, GatewayError> {
    let fields = Fields::of(doc)?;
    let id = fields
        .text(&["_id", "id"])
        .ok_or_else(|| GatewayError::decode("food document without an id"))?;

    let days_left = wire::integer(fields.get(&["daysLeft", "days_left"]))
        .filter(|days| *days < INACTIVE_DAYS_LEFT);
    let prediction_history = fields
        .get(&["predictionHistory", "prediction_history"])
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(history_entry).collect())
        .unwrap_or_default();

    Ok(FoodRecord {
        id: FoodId::new(id),
        user_id: UserId::new(fields.text(&["userId", "user_id"]).unwrap_or_default()),
        food_name: fields.text(&["foodName", "food_name"]).unwrap_or_default(),
        item_name: fields
            .text(&["itemName", "item_name"])
            .unwrap_or_default(),
        category: fields
            .text(&["category", "item_category"])
            .unwrap_or_default(),
        storage_type: fields
            .text(&["storageType", "storage_type"])
            .map(|s| StorageType::from_lenient(&s))
            .unwrap_or_default(),
        purchase_date: fields.date(&["purchaseDate", "purchase_date"]),
        printed_expiry_date: fields.date(&["printedExpiryDate", "printed_expiry_date"]),
        quantity: fields.number(&["quantity"]).unwrap_or(1.0),
        used_before_expiry: fields.flag(&["used_before_exp", "used_before_expiry", "usedBeforeExpiry"]),
        baseline_expiry_date: fields.date(&["baselineExpiryDate", "baseline_expiry_date"]),
        personalized_expiry_date: fields
            .date(&["personalizedExpiryDate", "personalized_expiry_date"]),
        final_expiry_date: fields.date(&[
            "finalExpiryDate",
            "final_expiry_date",
            "predictedExpiryDate",
        ]),
        scp_priority_score: fields.number(&[
            "scpPriorityScore_live",
            "scpPriorityScore",
            "scp_priority_score",
        ]),
        days_left,
        prediction_history,
    })
}

fn history_entry(entry: &Value) -> Option<PredictionHistoryEntry> {
    let fields = Fields::of(entry).ok()?;
    Some(PredictionHistoryEntry {
        recorded_at: wire::timestamp(fields.get(&["ts", "timestamp"]))?,
        baseline_days: fields.number(&["baseline_days"]).unwrap_or(0.0),
        baseline_expiry_date: fields.date(&["baseline_expiry_date"]),
        personalization_enabled: fields.flag(&["personalization_enabled"]),
        personalized_days: fields.number(&["personalized_days"]),
        personalized_expiry_date: fields.date(&["personalized_expiry_date"]),
        final_expiry_date: fields.date(&["final_expiry_date"]),
        days_left: wire::integer(fields.get(&["days_left"]))
            .filter(|days| *days < INACTIVE_DAYS_LEFT),
        priority_score: fields.number(&["scp", "scpPriorityScore"]),
        printed_expiry_date: fields.date(&["printed_expiry_date"]),
        printed_cap_applied: fields.flag(&["printed_cap_applied"]),
    })
}

/// Unwraps `{"<key>": {...}}` envelopes; bare documents pass through.
fn unwrap_document<'a>(body: &'a Value, key: &str) -> &'a Value {
    body.get(key).filter(|inner| inner.is_object()).unwrap_or(body)
}

/// Reads every usable document; unreadable ones are counted in `skipped`.
pub(crate) fn records_from_list(body: &Value) -> Result<FoodListing, GatewayError> {
    let documents = body
        .as_array()
        .or_else(|| body.get("foods").and_then(Value::as_array))
        .ok_or_else(|| GatewayError::decode("expected a list of foods"))?;
    let records: Vec<FoodRecord> = documents
        .iter()
        .filter_map(|doc| record_from_document(doc).ok())
        .collect();
    Ok(FoodListing {
        skipped: documents.len() - records.len(),
        records,
    })
}

pub(crate) fn outcome_from_response(body: &Value) -> Result<PredictionOutcome, GatewayError> {
    let fields = Fields::of(body)?;
    Ok(PredictionOutcome {
        item_name: fields.text(&["item_name", "itemName"]).unwrap_or_default(),
        category: fields.text(&["category", "item_category"]).unwrap_or_default(),
        baseline_days: fields.number(&["baseline_days"]),
        baseline_expiry_date: fields.date(&["baseline_expiry_date", "baselineExpiryDate"]),
        min_required_feedback: fields.count(&["min_required_feedback"]),
        item_feedback_count: fields.count(&["item_feedback_count"]),
        feedback_needed: fields.count(&["feedback_needed"]),
        personalization_enabled: fields.flag(&["personalization_enabled"]),
        personalized_days: fields.number(&["personalized_days"]),
        personalized_expiry_date: fields
            .date(&["personalized_expiry_date", "personalizedExpiryDate"]),
        printed_expiry_date: fields.date(&["printed_expiry_date", "printedExpiryDate"]),
        final_expiry_date: fields.date(&["final_expiry_date", "finalExpiryDate"]),
        printed_cap_applied: fields.flag(&["printed_cap_applied"]),
        days_left: wire::integer(fields.get(&["days_left", "daysLeft"]))
            .filter(|days| *days < INACTIVE_DAYS_LEFT),
        priority_score: fields.number(&["scpPriorityScore", "scp", "scp_priority_score"]),
        message: fields.text(&["message"]),
    })
}

pub(crate) fn receipt_from_response(body: &Value) -> Result<FeedbackReceipt, GatewayError> {
    let fields = Fields::of(body)?;
    Ok(FeedbackReceipt {
        item_name: fields.text(&["item_name", "itemName"]).unwrap_or_default(),
        category: fields.text(&["category"]).unwrap_or_default(),
        min_required_feedback: fields.count(&["min_required_feedback"]),
        item_feedback_count: fields.count(&["item_feedback_count_after", "item_feedback_count"]),
        feedback_needed: fields.count(&["feedback_needed"]),
        personalization_activated_now: fields.flag(&["personalization_activated_now"]),
        message: fields.text(&["message"]),
    })
}

pub(crate) fn options_from_response(body: &Value) -> Result<FoodOptions, GatewayError> {
    let fields = Fields::of(body)?;
    let strings = |key: &str| -> Vec<String> {
        fields
            .get(&[key])
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(|v| wire::text(Some(v))).collect())
            .unwrap_or_default()
    };
    Ok(FoodOptions {
        items: strings("items"),
        categories: strings("categories"),
    })
}

#[async_trait]
impl FoodGateway for FoodGatewayHttp {
    async fn list(&self) -> Result<FoodListing, GatewayError> {
        let body: Value = self
            .client
            .send_json(self.client.client.get(self.client.url("food")))
            .await?;
        records_from_list(&body)
    }

    async fn create(&self, food: &NewFood) -> Result<FoodRecord, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("food"))
                    .json(&CreateFoodBody::from(food)),
            )
            .await?;
        record_from_document(unwrap_document(&body, "food"))
    }

    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("food/predict"))
                    .json(&PredictBody::from(request)),
            )
            .await?;
        outcome_from_response(&body)
    }

    async fn update(
        &self,
        id: &FoodId,
        changes: &FoodChanges,
    ) -> Result<FoodRecord, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .put(self.client.url(&format!("food/{}", id)))
                    .json(&UpdateFoodBody::from(changes)),
            )
            .await?;
        record_from_document(unwrap_document(&body, "updated_food"))
    }

    async fn delete(&self, id: &FoodId) -> Result<(), GatewayError> {
        let _: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .delete(self.client.url(&format!("food/{}", id))),
            )
            .await?;
        Ok(())
    }

    async fn feedback(&self, feedback: &ExpiryFeedback) -> Result<FeedbackReceipt, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("food/feedback"))
                    .json(&FeedbackBody {
                        food_id: feedback.food_id.as_str(),
                        user_id: feedback.user_id.as_str(),
                        feedback: feedback.kind.to_string(),
                        actual_days: feedback.actual_days,
                    }),
            )
            .await?;
        receipt_from_response(&body)
    }

    async fn options(&self) -> Result<FoodOptions, GatewayError> {
        let body: Value = self
            .client
            .send_json(self.client.client.get(self.client.url("food/options")))
            .await?;
        options_from_response(&body)
    }
}
