use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};

/// Unknown categories yield an empty list rather than an error.
pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching active products for category: {}",
            params.category_id
        ));
        let products = self
            .repository
            .get_active_by_category(params.category_id)
            .await?;
        Ok(products)
    }
}
