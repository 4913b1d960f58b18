use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::image_path;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = NewProduct::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            category_id: params.category_id,
            image: Some(image_path(&params.image_name)),
        })?;

        let created = self
            .repository
            .create(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKeyViolation => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockProductRepo, mock_logger};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use std::str::FromStr;

    fn params(category_id: i32) -> CreateProductParams {
        CreateProductParams {
            name: "Hammer".to_string(),
            description: "Claw hammer".to_string(),
            price: BigDecimal::from_str("9.99").unwrap(),
            stock: 5,
            category_id,
            image_name: "h1.png".to_string(),
        }
    }

    fn stored(id: i32, product: &NewProduct) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            product.name.clone(),
            product.description.clone(),
            product.price.clone(),
            product.stock,
            product.image.clone(),
            0,
            false,
            product.category_id,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_create_product_with_composed_image_path() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(|p| p.image.as_deref() == Some("/images/h1.png"))
            .returning(|p| Ok(stored(1, p)));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params(1)).await.unwrap();

        assert_eq!(product.image.as_deref(), Some("/images/h1.png"));
        assert_eq!(product.likes, 0);
        assert!(!product.is_disabled);
    }

    #[tokio::test]
    async fn should_return_not_found_when_category_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::ForeignKeyViolation));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case.execute(params(99)).await.unwrap_err();

        assert!(matches!(error, ProductError::CategoryNotFound));
        assert_eq!(error.kind(), crate::domain::errors::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn should_propagate_other_store_failures() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_reject_negative_price_before_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                price: BigDecimal::from_str("-1").unwrap(),
                ..params(1)
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }

    #[tokio::test]
    async fn should_reject_unstorable_price_before_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                price: BigDecimal::from_str("10000000000").unwrap(),
                ..params(1)
            })
            .await;

        let error = result.unwrap_err();
        assert!(matches!(error, ProductError::PriceOutOfRange));
        assert_eq!(error.kind(), crate::domain::errors::ErrorKind::Validation);
    }
}
