use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let not_found = |e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        };

        // Disabled products are still deletable, so no visibility check here.
        self.repository.get_by_id(params.id).await.map_err(not_found)?;

        // A concurrent delete between the two calls also reports not found.
        self.repository.delete(params.id).await.map_err(not_found)?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
