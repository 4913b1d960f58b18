use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::PageRequest;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, ProductError>;
    async fn execute_paginated(&self, page: PageRequest) -> Result<Vec<Product>, ProductError>;
}
