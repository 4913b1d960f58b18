use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let changes = ProductChanges {
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            category_id: params.category_id,
            ..ProductChanges::default()
        };
        changes.validate()?;

        // Missing product and missing category both surface as not found.
        let updated = self
            .repository
            .update(params.id, &changes)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                RepositoryError::ForeignKeyViolation => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockProductRepo, make_product, mock_logger};
    use crate::domain::errors::ErrorKind;

    fn rename(id: i32) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: Some("Sledgehammer".to_string()),
            description: None,
            price: None,
            stock: None,
            category_id: None,
        }
    }

    #[tokio::test]
    async fn should_update_only_provided_fields() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|id, changes| {
                *id == 1
                    && changes.name.as_deref() == Some("Sledgehammer")
                    && changes.price.is_none()
                    && changes.is_disabled.is_none()
            })
            .returning(|id, changes| {
                let mut product = make_product(id, 1, false);
                product.name = changes.name.clone().unwrap_or(product.name);
                Ok(product)
            });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(rename(1)).await.unwrap();

        assert_eq!(product.name, "Sledgehammer");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(rename(404)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_kind_when_category_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::ForeignKeyViolation));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(UpdateProductParams {
                category_id: Some(99),
                ..rename(1)
            })
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                name: Some(" ".to_string()),
                ..rename(1)
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }
}
