use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::LikeToggle;
use crate::domain::shared::value_objects::UserId;

pub struct ToggleLikeParams {
    pub product_id: i32,
    pub user_id: UserId,
}

#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    async fn execute(&self, params: ToggleLikeParams) -> Result<LikeToggle, ProductError>;
}
