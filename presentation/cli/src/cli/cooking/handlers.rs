use std::path::Path;
use std::sync::Arc;

use business::domain::cooking::use_cases::analyze_image::{AnalyzeImageParams, AnalyzeImageUseCase};
use business::domain::cooking::use_cases::grocery_list::{
    GenerateGroceryListParams, GenerateGroceryListUseCase,
};
use business::domain::cooking::use_cases::search_recipes::{
    SearchRecipesParams, SearchRecipesUseCase,
};

use crate::cli::alert::{Alert, IntoAlert};
use crate::cli::cooking::args::CookingCommand;
use crate::cli::cooking::view;

pub struct CookingHandlers {
    search_recipes_use_case: Arc<dyn SearchRecipesUseCase>,
    analyze_image_use_case: Arc<dyn AnalyzeImageUseCase>,
    grocery_list_use_case: Arc<dyn GenerateGroceryListUseCase>,
}

impl CookingHandlers {
    pub fn new(
        search_recipes_use_case: Arc<dyn SearchRecipesUseCase>,
        analyze_image_use_case: Arc<dyn AnalyzeImageUseCase>,
        grocery_list_use_case: Arc<dyn GenerateGroceryListUseCase>,
    ) -> Self {
        Self {
            search_recipes_use_case,
            analyze_image_use_case,
            grocery_list_use_case,
        }
    }

    pub async fn run(&self, command: CookingCommand) -> Result<String, Alert> {
        match command {
            CookingCommand::Recipes { ingredients } => {
                let search = self
                    .search_recipes_use_case
                    .execute(SearchRecipesParams { ingredients })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::recipes(&search))
            }
            CookingCommand::Scan { image, recipes } => {
                let bytes = read_image(&image).await?;
                let report = self
                    .analyze_image_use_case
                    .execute(AnalyzeImageParams {
                        file_name: image_file_name(&image),
                        bytes,
                        suggest_recipes: recipes,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::analysis(&report))
            }
            CookingCommand::Groceries { meals, people } => {
                let list = self
                    .grocery_list_use_case
                    .execute(GenerateGroceryListParams {
                        meals,
                        num_people: people,
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(view::grocery_list(&list))
            }
        }
    }
}

async fn read_image(path: &Path) -> Result<Vec<u8>, Alert> {
    tokio::fs::read(path).await.map_err(|e| {
        Alert::new(
            "FileError",
            format!("cannot read {} ({})", path.display(), e),
        )
    })
}

fn image_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
