use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductChanges;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::disable::{DisableProductParams, DisableProductUseCase};

pub struct DisableProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DisableProductUseCase for DisableProductUseCaseImpl {
    async fn execute(&self, params: DisableProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Disabling product: {}", params.id));

        self.repository
            .update(params.id, &ProductChanges::disable())
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product disabled: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockProductRepo, make_product, mock_logger};

    #[tokio::test]
    async fn should_disable_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|id, changes| *id == 1 && *changes == ProductChanges::disable())
            .returning(|id, _| Ok(make_product(id, 1, true)));

        let use_case = DisableProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DisableProductParams { id: 1 }).await.is_ok());
    }

    #[tokio::test]
    async fn should_be_idempotent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .times(2)
            .returning(|id, _| Ok(make_product(id, 1, true)));

        let use_case = DisableProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DisableProductParams { id: 1 }).await.is_ok());
        assert!(use_case.execute(DisableProductParams { id: 1 }).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = DisableProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DisableProductParams { id: 1 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
