use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{PageRequest, UserId};

use super::model::{LikeToggle, NewProduct, Product, ProductChanges};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Enabled products ordered by id, optionally windowed.
    async fn get_active_products(
        &self,
        page: Option<PageRequest>,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn get_active_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Product>, RepositoryError>;
    /// Returns the row whether or not it is disabled.
    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// Flips the (product, user) like state and adjusts the counter in a
    /// single atomic step.
    async fn toggle_like(&self, id: i32, user_id: &UserId) -> Result<LikeToggle, RepositoryError>;
}
