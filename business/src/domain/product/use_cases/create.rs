use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
    /// Generated file name returned by the image storage.
    pub image_name: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
