use super::errors::CookingError;

/// Image types the ingredient detector accepts.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Lower-cases ingredient names, splits comma-separated entries and drops
/// blanks and repeats. First-seen order is kept.
pub fn normalize_ingredients<I, S>(ingredients: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for entry in ingredients {
        for part in entry.as_ref().split(',') {
            let name = part.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
            if !name.is_empty() && !normalized.contains(&name) {
                normalized.push(name);
            }
        }
    }
    normalized
}

fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// A photo of ingredients, validated before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Result<Self, CookingError> {
        let file_name = file_name.trim();
        if extension(file_name).is_none() {
            return Err(CookingError::ImageTypeUnsupported);
        }
        if bytes.is_empty() {
            return Err(CookingError::ImageEmpty);
        }
        Ok(Self {
            file_name: file_name.to_string(),
            bytes,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        match extension(&self.file_name).as_deref() {
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            _ => "image/jpeg",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageAnalysis {
    pub ingredients: Vec<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub cuisine: Option<String>,
    pub source: Option<String>,
    /// 0-100, how well the recipe fits the searched ingredients.
    pub match_score: Option<f64>,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub cooking_time: Option<String>,
    pub difficulty: Option<String>,
    pub servings: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSearch {
    pub ingredients: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub total_found: usize,
}

/// Best match first; ties go to the recipe missing fewer ingredients.
pub fn rank_by_match(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| {
        let a_score = a.match_score.unwrap_or(f64::NEG_INFINITY);
        let b_score = b.match_score.unwrap_or(f64::NEG_INFINITY);
        b_score
            .total_cmp(&a_score)
            .then_with(|| a.missing_ingredients.len().cmp(&b.missing_ingredients.len()))
    });
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysisReport {
    pub analysis: ImageAnalysis,
    /// Present when recipes were requested and the search succeeded.
    pub recipes: Option<RecipeSearch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryListRequest {
    pub meal_plan: Vec<String>,
    pub num_people: u32,
}

impl GroceryListRequest {
    pub fn new(meals: Vec<String>, num_people: u32) -> Result<Self, CookingError> {
        let meal_plan: Vec<String> = meals
            .into_iter()
            .map(|meal| meal.trim().to_string())
            .filter(|meal| !meal.is_empty())
            .collect();
        if meal_plan.is_empty() {
            return Err(CookingError::MealPlanEmpty);
        }
        if num_people == 0 {
            return Err(CookingError::PeopleNotPositive);
        }
        Ok(Self {
            meal_plan,
            num_people,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryItem {
    pub item: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrocerySection {
    pub name: String,
    pub items: Vec<GroceryItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryList {
    pub sections: Vec<GrocerySection>,
    pub total_items: usize,
    pub num_people: u32,
}
