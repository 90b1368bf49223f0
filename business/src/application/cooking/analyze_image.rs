use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cooking::errors::CookingError;
use crate::domain::cooking::gateway::CookingGateway;
use crate::domain::cooking::model::{
    ImageAnalysisReport, ImageUpload, normalize_ingredients, rank_by_match,
};
use crate::domain::cooking::use_cases::analyze_image::{AnalyzeImageParams, AnalyzeImageUseCase};
use crate::domain::logger::Logger;

pub struct AnalyzeImageUseCaseImpl {
    pub gateway: Arc<dyn CookingGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AnalyzeImageUseCase for AnalyzeImageUseCaseImpl {
    async fn execute(
        &self,
        params: AnalyzeImageParams,
    ) -> Result<ImageAnalysisReport, CookingError> {
        let image = ImageUpload::new(&params.file_name, params.bytes)?;

        self.logger.info(&format!(
            "Analyzing {} ({} bytes)",
            image.file_name,
            image.bytes.len()
        ));

        let mut analysis = self.gateway.analyze_image(&image).await?;
        analysis.ingredients = normalize_ingredients(&analysis.ingredients);

        if !params.suggest_recipes || analysis.ingredients.is_empty() {
            return Ok(ImageAnalysisReport {
                analysis,
                recipes: None,
            });
        }

        // The detected ingredients are still useful when the follow-up search fails.
        let recipes = match self.gateway.search_recipes(&analysis.ingredients).await {
            Ok(mut search) => {
                rank_by_match(&mut search.recipes);
                Some(search)
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Recipe search after image analysis failed: {}", e));
                None
            }
        };

        Ok(ImageAnalysisReport { analysis, recipes })
    }
}
