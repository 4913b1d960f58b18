use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;

use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{LikeToggle, NewProduct, Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::{PageRequest, UserId};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_active_products(&self, page: Option<PageRequest>) -> Result<Vec<Product>, RepositoryError>;
        async fn get_active_by_category(&self, category_id: i32) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
        async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&self, id: i32, changes: &ProductChanges) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        async fn toggle_like(&self, id: i32, user_id: &UserId) -> Result<LikeToggle, RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: i32) -> Result<Category, RepositoryError>;
        async fn create(&self, category: &NewCategory) -> Result<Category, RepositoryError>;
        async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(id: i32, category_id: i32, is_disabled: bool) -> Product {
    let now = Utc::now();
    Product::from_repository(
        id,
        "Hammer".to_string(),
        "Claw hammer".to_string(),
        BigDecimal::from_str("9.99").unwrap(),
        5,
        Some("/images/h1.png".to_string()),
        0,
        is_disabled,
        category_id,
        now,
        now,
    )
}
