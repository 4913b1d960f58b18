use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ReplaceProductImageParams {
    pub id: i32,
    pub image_name: String,
}

#[async_trait]
pub trait ReplaceProductImageUseCase: Send + Sync {
    async fn execute(&self, params: ReplaceProductImageParams) -> Result<Product, ProductError>;
}
