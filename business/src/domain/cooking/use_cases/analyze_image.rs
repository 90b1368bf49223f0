use async_trait::async_trait;

use crate::domain::cooking::errors::CookingError;
use crate::domain::cooking::model::ImageAnalysisReport;

pub struct AnalyzeImageParams {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Also search recipes for the detected ingredients.
    pub suggest_recipes: bool,
}

#[async_trait]
pub trait AnalyzeImageUseCase: Send + Sync {
    async fn execute(&self, params: AnalyzeImageParams)
    -> Result<ImageAnalysisReport, CookingError>;
}
