use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::LikeToggle;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::toggle_like::{ToggleLikeParams, ToggleLikeUseCase};

pub struct ToggleLikeUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleLikeUseCase for ToggleLikeUseCaseImpl {
    async fn execute(&self, params: ToggleLikeParams) -> Result<LikeToggle, ProductError> {
        self.logger.info(&format!(
            "Toggling like of product {} for user {}",
            params.product_id, params.user_id
        ));

        // Every store failure collapses to not found.
        let toggle = self
            .repository
            .toggle_like(params.product_id, &params.user_id)
            .await
            .map_err(|e| {
                self.logger.warn(&format!(
                    "Like toggle failed for product {}: {}",
                    params.product_id, e
                ));
                ProductError::NotFound
            })?;

        self.logger.debug(&format!(
            "Product {} liked: {}, likes: {}",
            params.product_id, toggle.liked, toggle.likes
        ));
        Ok(toggle)
    }
}
