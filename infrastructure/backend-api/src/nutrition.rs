use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use business::domain::errors::GatewayError;
use business::domain::nutrition::gateway::NutritionGateway;
use business::domain::nutrition::model::{
    FoodMatch, IntakeEntry, LoggedIntake, NutritionProfile, NutritionReport, PopulationGroup,
    ReportKind, ReportPeriod,
};
use business::domain::shared::dates::to_iso;
use business::domain::shared::value_objects::UserId;

use crate::client::BackendClient;
use crate::wire::{self, Fields};

pub struct NutritionGatewayHttp {
    client: BackendClient,
}

impl NutritionGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, GatewayError> {
        self.client
            .send_json(self.client.client.get(self.client.url(path)).query(query))
            .await
    }
}

#[derive(Debug, Serialize)]
struct ProfileBody<'a> {
    user_id: &'a str,
    age: Option<u32>,
    group: String,
    conditions: &'a [String],
}

#[derive(Debug, Serialize)]
struct IntakeBody<'a> {
    user_id: &'a str,
    food_id: &'a str,
    food_name: &'a str,
    quantity: f64,
    date: String,
}

pub(crate) fn conditions_from_response(body: &Value) -> Vec<String> {
    body.get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    // Entries are `{"condition": "..."}`; plain strings are accepted too.
                    wire::text(item.get("condition").or(Some(item)))
                })
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn profile_from_response(
    body: &Value,
    fallback_user: &UserId,
) -> Result<NutritionProfile, GatewayError> {
    let fields = Fields::of(body.get("profile").unwrap_or(body))?;
    let conditions = fields
        .get(&["conditions"])
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(|v| wire::text(Some(v))).collect())
        .unwrap_or_default();
    let user_id = fields
        .text(&["user_id", "userId"])
        .map(UserId::new)
        .unwrap_or_else(|| fallback_user.clone());

    Ok(NutritionProfile {
        user_id,
        age: wire::integer(fields.get(&["age"]))
            .and_then(|age| u32::try_from(age).ok())
            .filter(|age| *age > 0),
        group: fields
            .text(&["group"])
            .and_then(|g| g.parse().ok())
            .unwrap_or_default(),
        conditions,
    })
}

pub(crate) fn matches_from_response(body: &Value) -> Vec<FoodMatch> {
    body.get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let fields = Fields::of(item).ok()?;
                    Some(FoodMatch {
                        food_id: fields.text(&["food_id", "id"]),
                        food_name: fields.text(&["food_name", "name"])?,
                        serving_basis: fields.text(&["serving_basis"]),
                        serving_size_g: fields.number(&["serving_size_g"]),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn intake_from_response(
    body: &Value,
    sent: &IntakeEntry,
) -> Result<LoggedIntake, GatewayError> {
    let item = body.get("item").unwrap_or(body);
    let fields = Fields::of(item)?;
    let entry = IntakeEntry {
        user_id: fields
            .text(&["user_id"])
            .map(UserId::new)
            .unwrap_or_else(|| sent.user_id.clone()),
        food_id: fields
            .text(&["food_id"])
            .unwrap_or_else(|| sent.food_id.clone()),
        food_name: fields
            .text(&["food_name"])
            .unwrap_or_else(|| sent.food_name.clone()),
        quantity: fields.number(&["quantity"]).unwrap_or(sent.quantity),
        date: fields.date(&["date"]).unwrap_or(sent.date),
    };
    Ok(LoggedIntake {
        entry,
        recorded_at: fields.text(&["ts"]),
    })
}

#[async_trait]
impl NutritionGateway for NutritionGatewayHttp {
    async fn conditions(&self) -> Result<Vec<String>, GatewayError> {
        let body = self.get_json("nutrition/conditions", &[]).await?;
        Ok(conditions_from_response(&body))
    }

    async fn profile(&self, user_id: &UserId) -> Result<NutritionProfile, GatewayError> {
        let body = self
            .get_json("nutrition/profile", &[("user_id", user_id.to_string())])
            .await?;
        profile_from_response(&body, user_id)
    }

    async fn save_profile(
        &self,
        profile: &NutritionProfile,
    ) -> Result<NutritionProfile, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("nutrition/profile"))
                    .json(&ProfileBody {
                        user_id: profile.user_id.as_str(),
                        age: profile.age,
                        group: profile.group.to_string(),
                        conditions: &profile.conditions,
                    }),
            )
            .await?;
        profile_from_response(&body, &profile.user_id)
    }

    async fn search_foods(&self, query: &str, limit: usize) -> Result<Vec<FoodMatch>, GatewayError> {
        let body = self
            .get_json(
                "nutrition/foods/search",
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(matches_from_response(&body))
    }

    async fn add_intake(&self, entry: &IntakeEntry) -> Result<LoggedIntake, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("nutrition/intake/add"))
                    .json(&IntakeBody {
                        user_id: entry.user_id.as_str(),
                        food_id: &entry.food_id,
                        food_name: &entry.food_name,
                        quantity: entry.quantity,
                        date: to_iso(entry.date),
                    }),
            )
            .await?;
        intake_from_response(&body, entry)
    }

    async fn intake_summary(
        &self,
        user_id: &UserId,
        period: ReportPeriod,
    ) -> Result<NutritionReport, GatewayError> {
        let body = self
            .get_json(
                "nutrition/intake/summary",
                &[("user_id", user_id.to_string()), ("period", period.to_string())],
            )
            .await?;
        Ok(NutritionReport {
            kind: ReportKind::Summary,
            period,
            body,
        })
    }

    async fn report(
        &self,
        user_id: &UserId,
        period: ReportPeriod,
    ) -> Result<NutritionReport, GatewayError> {
        let body = self
            .get_json(
                "nutrition/report",
                &[("user_id", user_id.to_string()), ("period", period.to_string())],
            )
            .await?;
        Ok(NutritionReport {
            kind: ReportKind::Full,
            period,
            body,
        })
    }
}
