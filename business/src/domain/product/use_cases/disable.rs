use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DisableProductParams {
    pub id: i32,
}

#[async_trait]
pub trait DisableProductUseCase: Send + Sync {
    async fn execute(&self, params: DisableProductParams) -> Result<(), ProductError>;
}
