use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::replace_image::{
    ReplaceProductImageParams, ReplaceProductImageUseCase,
};
use crate::domain::product::value_objects::image_path;

pub struct ReplaceProductImageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceProductImageUseCase for ReplaceProductImageUseCaseImpl {
    async fn execute(&self, params: ReplaceProductImageParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Replacing image of product: {}", params.id));

        let product = self
            .repository
            .update(params.id, &ProductChanges::image(image_path(&params.image_name)))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        Ok(product)
    }
}
