use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::shared::value_objects::PageRequest;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all active products");
        let products = self.repository.get_active_products(None).await?;
        self.logger
            .info(&format!("Found {} active products", products.len()));
        Ok(products)
    }

    async fn execute_paginated(&self, page: PageRequest) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching active products (skip: {}, take: {})",
            page.skip, page.take
        ));
        let products = self.repository.get_active_products(Some(page)).await?;
        Ok(products)
    }
}
