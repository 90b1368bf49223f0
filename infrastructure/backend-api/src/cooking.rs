use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use business::domain::cooking::gateway::CookingGateway;
use business::domain::cooking::model::{
    GroceryItem, GroceryList, GroceryListRequest, GrocerySection, ImageAnalysis, ImageUpload,
    Recipe, RecipeSearch,
};
use business::domain::errors::GatewayError;

use crate::client::BackendClient;
use crate::wire::{self, Fields};

pub struct CookingGatewayHttp {
    client: BackendClient,
}

impl CookingGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct SearchRecipesBody<'a> {
    ingredients: &'a [String],
}

#[derive(Debug, Serialize)]
struct GroceryListBody<'a> {
    meal_plan: &'a [String],
    num_people: u32,
}

pub(crate) fn analysis_from_response(body: &Value) -> Result<ImageAnalysis, GatewayError> {
    wire::ensure_success(body)?;
    Ok(ImageAnalysis {
        ingredients: wire::strings(body.get("ingredients")),
        message: wire::text(body.get("message")),
    })
}

fn recipe_from_wire(value: &Value) -> Option<Recipe> {
    let fields = Fields::of(value).ok()?;
    let name = fields.text(&["name", "title"])?;
    Some(Recipe {
        id: fields.text(&["id", "_id"]).unwrap_or_else(|| name.clone()),
        name,
        cuisine: fields.text(&["cuisine"]),
        source: fields.text(&["source"]),
        match_score: fields.number(&["match_score", "matchScore"]),
        matched_ingredients: wire::strings(fields.get(&["matched_ingredients"])),
        missing_ingredients: wire::strings(fields.get(&["missing_ingredients"])),
        cooking_time: fields.text(&["cooking_time", "cookingTime"]),
        difficulty: fields.text(&["difficulty"]),
        servings: Some(fields.count(&["servings"])).filter(|s| *s > 0),
    })
}

pub(crate) fn search_from_response(body: &Value) -> Result<RecipeSearch, GatewayError> {
    wire::ensure_success(body)?;
    let recipes: Vec<Recipe> = body
        .get("recipes")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(recipe_from_wire).collect())
        .unwrap_or_default();
    let total_found = wire::integer(body.get("total_found"))
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(recipes.len());

    Ok(RecipeSearch {
        ingredients: wire::strings(body.get("search_query")),
        recipes,
        total_found,
    })
}

fn grocery_item_from_wire(value: &Value) -> Option<GroceryItem> {
    let fields = Fields::of(value).ok()?;
    Some(GroceryItem {
        item: fields.text(&["item", "name"])?,
        quantity: fields.number(&["quantity"]),
        unit: fields.text(&["unit"]),
    })
}

/// The backend groups items by section name: `{"vegetables": [{item, quantity, unit}]}`.
pub(crate) fn grocery_list_from_response(body: &Value) -> Result<GroceryList, GatewayError> {
    wire::ensure_success(body)?;
    let sections: Vec<GrocerySection> = body
        .get("grocery_list")
        .and_then(Value::as_object)
        .map(|groups| {
            groups
                .iter()
                .map(|(name, items)| GrocerySection {
                    name: name.clone(),
                    items: items
                        .as_array()
                        .map(|items| items.iter().filter_map(grocery_item_from_wire).collect())
                        .unwrap_or_default(),
                })
                .filter(|section| !section.items.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(GroceryList {
        total_items: wire::count(body.get("total_items")) as usize,
        num_people: wire::count(body.get("num_people")),
        sections,
    })
}

#[async_trait]
impl CookingGateway for CookingGatewayHttp {
    async fn analyze_image(&self, image: &ImageUpload) -> Result<ImageAnalysis, GatewayError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type())
            .map_err(|e| GatewayError::unavailable(e.to_string()))?;

        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("cooking/analyze-image"))
                    .multipart(Form::new().part("image", part)),
            )
            .await?;
        analysis_from_response(&body)
    }

    async fn search_recipes(&self, ingredients: &[String]) -> Result<RecipeSearch, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("cooking/search-recipes"))
                    .json(&SearchRecipesBody { ingredients }),
            )
            .await?;
        search_from_response(&body)
    }

    async fn grocery_list(
        &self,
        request: &GroceryListRequest,
    ) -> Result<GroceryList, GatewayError> {
        let body: Value = self
            .client
            .send_json(
                self.client
                    .client
                    .post(self.client.url("cooking/generate-grocery-list"))
                    .json(&GroceryListBody {
                        meal_plan: &request.meal_plan,
                        num_people: request.num_people,
                    }),
            )
            .await?;
        grocery_list_from_response(&body)
    }
}
